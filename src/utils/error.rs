use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Master list decode error: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("Master list is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to send mail to {recipient}: {message}")]
    MailError { recipient: String, message: String },

    #[error("No valid assignment found after {attempts} attempts")]
    DrawExhausted { attempts: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Reported, the run still counts as successful
    Low,
    /// Retrying later may help
    Medium,
    /// The input must be fixed
    High,
    /// Local environment problem (files, encoding)
    Critical,
}

impl SantaError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SantaError::MailError { .. } => ErrorSeverity::Low,
            SantaError::DrawExhausted { .. } => ErrorSeverity::Medium,
            SantaError::ConfigValidationError { .. }
            | SantaError::MissingConfigError { .. }
            | SantaError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SantaError::IoError(_) | SantaError::DecodeError(_) | SantaError::EncodingError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::IoError(_) => {
                "Check that the master list path exists and is readable/writable"
            }
            SantaError::DecodeError(_) | SantaError::EncodingError(_) => {
                "The master list file is corrupted; re-run the draw with a higher --attempt"
            }
            SantaError::ConfigValidationError { .. }
            | SantaError::MissingConfigError { .. }
            | SantaError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
            SantaError::MailError { .. } => {
                "Verify the SMTP host and sender credentials, then use santa-lookup to resend"
            }
            SantaError::DrawExhausted { .. } => {
                "The exclusions may be impossible to satisfy; remove some pairs or raise draw.max_attempts"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::IoError(e) => format!("Could not access the master list file: {}", e),
            SantaError::DecodeError(_) | SantaError::EncodingError(_) => {
                "Could not decode the master list file".to_string()
            }
            SantaError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            SantaError::MissingConfigError { field } => {
                format!("Configuration is missing {}", field)
            }
            SantaError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
            SantaError::MailError { recipient, .. } => {
                format!("The e-mail to {} could not be sent", recipient)
            }
            SantaError::DrawExhausted { attempts } => format!(
                "Could not find a valid secret santa draw after {} attempts",
                attempts
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
