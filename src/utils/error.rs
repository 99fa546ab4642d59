use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input error in {}: {source}", path.display())]
    InputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error for {}: {source}", path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} of {total} output file(s) could not be written")]
    PartialOutput { failed: usize, total: usize },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("'{value}' is not a valid {kind} literal")]
    NumberFormatError { value: String, kind: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FilterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FilterError::InputNotFound { .. } | FilterError::InputError { .. } => {
                ErrorCategory::Input
            }
            FilterError::OutputError { .. } | FilterError::PartialOutput { .. } => {
                ErrorCategory::Output
            }
            FilterError::ConfigValidationError { .. }
            | FilterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FilterError::NumberFormatError { .. } => ErrorCategory::Data,
            FilterError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // a bad input file is skipped, the run carries on
            FilterError::InputNotFound { .. } | FilterError::InputError { .. } => {
                ErrorSeverity::Low
            }
            FilterError::NumberFormatError { .. } => ErrorSeverity::Medium,
            FilterError::OutputError { .. }
            | FilterError::PartialOutput { .. }
            | FilterError::ConfigValidationError { .. }
            | FilterError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            FilterError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FilterError::InputNotFound { path } => {
                format!("Input file not found: {}", path.display())
            }
            FilterError::InputError { path, source } => {
                format!("Could not read {}: {}", path.display(), source)
            }
            FilterError::OutputError { path, source } => {
                format!("Could not write {}: {}", path.display(), source)
            }
            FilterError::PartialOutput { failed, total } => {
                format!("{} of {} result file(s) were not written", failed, total)
            }
            FilterError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            FilterError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Option {} has an invalid value '{}': {}", field, value, reason),
            FilterError::NumberFormatError { value, kind } => {
                format!("'{}' is not a valid {}", value, kind)
            }
            FilterError::IoError(e) => format!("Unexpected I/O failure: {}", e),
        }
    }

    /// Process exit status for a run that stops on this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the input file exists and is readable",
            ErrorCategory::Output => {
                "Check that the output directory is writable and has free space"
            }
            ErrorCategory::Configuration => "Run with --help to see the accepted options",
            ErrorCategory::Data => "Check the input line; it will be treated as a string",
            ErrorCategory::System => "Retry the command; if it keeps failing, run with --verbose",
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = FilterError::InputNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.to_string(), "File not found: missing.txt");
    }

    #[test]
    fn test_output_and_config_errors_are_high_severity() {
        let partial = FilterError::PartialOutput {
            failed: 1,
            total: 3,
        };
        assert_eq!(partial.severity(), ErrorSeverity::High);
        assert_eq!(partial.category(), ErrorCategory::Output);

        let config = FilterError::InvalidConfigValueError {
            field: "prefix".to_string(),
            value: "a/b".to_string(),
            reason: "Prefix cannot contain a path separator".to_string(),
        };
        assert_eq!(config.severity(), ErrorSeverity::High);
        assert!(config.user_friendly_message().contains("a/b"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: FilterError = std::io::Error::other("disk on fire").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_exit_code_follows_severity() {
        let skipped = FilterError::InputNotFound {
            path: PathBuf::from("missing.txt"),
        };
        let number = FilterError::NumberFormatError {
            value: "1x".to_string(),
            kind: "integer",
        };
        let partial = FilterError::PartialOutput {
            failed: 2,
            total: 3,
        };
        let config = FilterError::ConfigValidationError {
            field: "output".to_string(),
            message: "Path is empty".to_string(),
        };
        let io: FilterError = std::io::Error::other("disk on fire").into();

        assert_eq!(skipped.exit_code(), 0);
        assert_eq!(number.exit_code(), 2);
        assert_eq!(partial.exit_code(), 1);
        assert_eq!(config.exit_code(), 1);
        assert_eq!(io.exit_code(), 3);
    }
}
