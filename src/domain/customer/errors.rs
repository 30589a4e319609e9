use chrono::{DateTime, Utc};

// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Invalid name {0:?}: must have at least 2 characters")]
    InvalidName(String),

    #[error("Invalid zip code {0:?}: expected format 12345-678")]
    InvalidZipCode(String),

    #[error("Birthday {0} cannot be in the future")]
    FutureBirthday(DateTime<Utc>),
}
