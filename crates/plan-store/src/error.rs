use plan_types::{PlanId, TypeError};

/// Errors from plan store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// No resource is stored under the id.
    #[error("resource not found: {0}")]
    NotFound(PlanId),

    /// A resource with the same id already exists.
    #[error("resource with objectId {0} already exists")]
    Conflict(PlanId),

    /// The payload carries no usable `objectId`.
    #[error("invalid payload: {0}")]
    Invalid(#[from] TypeError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
