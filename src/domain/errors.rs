use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("User not found: {0}")]
    NotFound(u64),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

impl DomainError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        DomainError::InvalidInput(reason.into())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        DomainError::Unavailable(reason.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
