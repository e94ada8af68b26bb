/// Error types for check-in operations
#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    #[error("No check-in found for venue {0}")]
    NotFound(i32),

    #[error("Invalid check-in status transition: {0}")]
    InvalidTransition(String),
}

/// Result type alias for check-in operations
pub type CheckinResult<T> = Result<T, CheckinError>;
