use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("{0}")]
    EmailNotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials("Invalid credentials".to_string())
    }

    pub fn email_not_found() -> Self {
        Self::EmailNotFound("Email not found".to_string())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidCredentials(message)
            | Self::EmailNotFound(message)
            | Self::Validation(message)
            | Self::NotFound(message)
            | Self::Unauthorized(message)
            | Self::BadRequest(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}

impl From<crate::data::DataError> for AppError {
    fn from(err: crate::data::DataError) -> Self {
        AppError::internal(err.to_string())
    }
}

impl From<crate::auth::storage::StorageError> for AppError {
    fn from(err: crate::auth::storage::StorageError) -> Self {
        AppError::internal(format!("Session storage failed: {err}"))
    }
}
