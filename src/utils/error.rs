use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Script parsing error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// 命令列結束代碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PersonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PersonError::IoError(_) => ErrorCategory::Output,
            PersonError::ConfigParseError { .. }
            | PersonError::InvalidConfigValueError { .. }
            | PersonError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PersonError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 寫入標準輸出時管線被關閉 (例如 `person-demo talk | head -0`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, PersonError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PersonError::IoError(e) => format!("Could not write or read: {}", e),
            PersonError::ConfigParseError { message } => {
                format!("The script file is not valid: {}", message)
            }
            PersonError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            PersonError::MissingConfigError { field } => {
                format!("Option '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PersonError::IoError(_) => "Check that the file exists and that stdout is writable",
            PersonError::ConfigParseError { .. } => {
                "Each [[steps]] entry needs `person` and `action` (\"talk\" or \"walk\")"
            }
            PersonError::InvalidConfigValueError { .. } => {
                "Fix the value shown above and run again"
            }
            PersonError::MissingConfigError { .. } => "Add the missing option and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, PersonError>;
