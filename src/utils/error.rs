use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    StatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Backend error: {message}")]
    BackendError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl FactsError {
    /// 給使用者看的訊息，不含錯誤類別前綴
    pub fn user_friendly_message(&self) -> String {
        match self {
            FactsError::BackendError { message } | FactsError::ValidationError { message } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FactsError::ApiError(_) | FactsError::StatusError { .. } => {
                "Check the network connection and the API endpoint, then try again"
            }
            FactsError::IoError(_) => "Check that the file exists and is readable",
            FactsError::BackendError { .. } => "Try again later",
            FactsError::ConfigError { .. } | FactsError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            FactsError::ValidationError { .. } => "Enter a number and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, FactsError>;
