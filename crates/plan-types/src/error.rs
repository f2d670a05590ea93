use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("payload has no `objectId` field")]
    MissingObjectId,

    #[error("`objectId` must be a string, got {0}")]
    ObjectIdNotString(String),

    #[error("`objectId` must not be empty")]
    EmptyObjectId,
}
