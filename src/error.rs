//! Error handling module
//!
//! Application-level error types and their outcome codes.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Session errors
    #[error("No account is open; send an `open` command first")]
    NoOpenAccount,

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    // Infrastructure errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NoOpenAccount => "no_open_account",
            AppError::InvalidCommand(_) => "invalid_command",
            AppError::Domain(domain_err) => domain_err.error_code(),
            AppError::Io(_) => "io_error",
            AppError::Json(_) => "json_error",
            AppError::Config(_) => "config_error",
        }
    }
}
