use std::path::PathBuf;

/// Errors raised while loading or compiling a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("cannot read schema {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema document is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The schema is valid JSON but not a valid JSON Schema.
    #[error("schema failed to compile: {0}")]
    Compile(String),

    /// The schema does not require a string `objectId`.
    #[error("schema must require a string `objectId` property")]
    MissingObjectId,
}

/// Result alias for schema loading.
pub type SchemaResult<T> = Result<T, SchemaError>;
