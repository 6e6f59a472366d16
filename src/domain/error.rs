use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Capacity exceeded: {message} (capacity {capacity})")]
    CapacityExceeded { message: String, capacity: usize },

    #[error("Conflict: {message}")]
    Conflict { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn capacity_exceeded(message: impl Into<String>, capacity: usize) -> Self {
        Self::CapacityExceeded {
            message: message.into(),
            capacity,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// The human-readable message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::CapacityExceeded { message, .. }
            | Self::Conflict { message } => message,
        }
    }
}
