use crate::utils::error::{FilterError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let shown = path.display().to_string();

    if path.as_os_str().is_empty() {
        return Err(FilterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shown,
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.to_string_lossy().contains('\0') {
        return Err(FilterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shown,
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The output path may not exist yet, but if it does it has to be a directory.
pub fn validate_directory(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, path)?;

    if path.exists() && !path.is_dir() {
        return Err(FilterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path exists and is not a directory".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_name_prefix(field_name: &str, prefix: &str) -> Result<()> {
    if prefix.contains('\0') {
        return Err(FilterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Prefix contains null bytes".to_string(),
        });
    }

    if prefix.chars().any(std::path::is_separator) {
        return Err(FilterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Prefix cannot contain a path separator; use --output for directories"
                .to_string(),
        });
    }

    Ok(())
}
