use thiserror::Error;

/// Failures of a single title validation run. Every variant ends the
/// invocation with exit status 1.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    #[error("no title provided")]
    MissingTitle,

    #[error("title \"{title}\" is invalid")]
    InvalidFormat { title: String },
}

impl TitleError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TitleError::MissingTitle => 1,
            TitleError::InvalidFormat { .. } => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern compile error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Invalid color mode: {value} (expected \"light\" or \"dark\")")]
    InvalidColorMode { value: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValueError { field: String, reason: String },

    #[error("Store error: {message}")]
    StoreError { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
