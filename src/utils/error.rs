use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Given list not found at '{path}'")]
    MissingInput { path: String },

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::MissingInput { .. } | PlannerError::InvalidEncoding { .. } => {
                ErrorCategory::Input
            }
            PlannerError::IoError(_) | PlannerError::CsvError(_) => ErrorCategory::Storage,
            PlannerError::ConfigError { .. }
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlannerError::MissingInput { path } => format!(
                "Please create {} with one username per line.",
                path
            ),
            PlannerError::InvalidEncoding { path } => {
                format!("Re-save {} as UTF-8 text.", path)
            }
            PlannerError::IoError(_) | PlannerError::CsvError(_) => {
                "Check that the output directory is writable and the disk is not full.".to_string()
            }
            PlannerError::ConfigError { .. } | PlannerError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML.".to_string()
            }
            PlannerError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again.", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::MissingInput { path } => {
                format!("ERROR: Given list not found at '{}'", path)
            }
            PlannerError::IoError(e) => format!("ERROR: Could not read or write a file: {}", e),
            PlannerError::CsvError(e) => format!("ERROR: Could not write CSV output: {}", e),
            other => format!("ERROR: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
