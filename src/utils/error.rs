use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Only one linkOutSuggestion may be given")]
    DuplicateLinkOut,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },
}

impl PayloadError {
    pub fn recovery_suggestion(&self) -> String {
        match self {
            PayloadError::DuplicateLinkOut => {
                "Remove the extra link_out step; a response carries a single link-out chip".to_string()
            }
            PayloadError::SerializationError(_) => {
                "Check that option items and images contain plain JSON values".to_string()
            }
            PayloadError::IoError(_) => {
                "Make sure the file exists and is readable".to_string()
            }
            PayloadError::ConfigValidationError { field, .. } => {
                format!("Fix the TOML syntax around '{}'", field)
            }
            PayloadError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            PayloadError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PayloadError::DuplicateLinkOut => "響應只能包含一個 link-out 建議".to_string(),
            PayloadError::IoError(e) => format!("無法讀取檔案: {}", e),
            PayloadError::SerializationError(e) => format!("JSON 序列化失敗: {}", e),
            other => format!("配置錯誤: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, PayloadError>;
