use crate::config::CliConfig;
use crate::domain::stats::StatisticsMode;
use crate::utils::error::{FilterError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Defaults loaded from a `--config` file. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub statistics: Option<StatisticsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub prefix: Option<String>,
    pub append: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatisticsConfig {
    pub mode: Option<StatisticsMode>,
}

impl TomlConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            FilterError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FilterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// `${VAR}` becomes the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn prefix(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.prefix.as_deref())
    }

    pub fn append(&self) -> bool {
        self.output.as_ref().and_then(|o| o.append).unwrap_or(false)
    }

    pub fn statistics_mode(&self) -> StatisticsMode {
        self.statistics
            .as_ref()
            .and_then(|s| s.mode)
            .unwrap_or_default()
    }

    /// Fills in what the command line left unset. Flags given on the command
    /// line always win.
    pub fn apply_to(&self, cli: &mut CliConfig) {
        if cli.output_dir.is_none() {
            cli.output_dir = self.output_path().map(Path::to_path_buf);
        }

        if cli.prefix.is_none() {
            cli.prefix = self.prefix().map(str::to_string);
        }

        cli.append |= self.append();

        if !cli.short_stats && !cli.full_stats {
            match self.statistics_mode() {
                StatisticsMode::Short => cli.short_stats = true,
                StatisticsMode::Full => cli.full_stats = true,
                StatisticsMode::None => {}
            }
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }
        if let Some(prefix) = self.prefix() {
            validation::validate_file_name_prefix("output.prefix", prefix)?;
        }
        Ok(())
    }
}
