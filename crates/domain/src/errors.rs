use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid time period: {0}")]
    InvalidTimePeriod(String),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Aggregation failed: {0}")]
    AggregationFailure(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Errors caused by the caller's input rather than by this system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidTimePeriod(_) | DomainError::DeviceNotFound(_)
        )
    }

    pub fn is_defect(&self) -> bool {
        matches!(self, DomainError::PreconditionViolation(_))
    }
}
