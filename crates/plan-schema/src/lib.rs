//! JSON Schema validation for plan payloads.
//!
//! The plan schema is compiled exactly once, before the server starts
//! accepting traffic, and is then shared immutably between requests. A schema
//! that cannot be read, parsed, or compiled is a startup failure, never a
//! per-request one.
//!
//! Validation failures are reported as a list of [`ValidationIssue`]s, each
//! naming the failing location (`instancePath`), the violated constraint
//! (`keyword`, `schemaPath`), and a human-readable message. Issues are
//! serializable and are returned to HTTP clients verbatim.

pub mod error;
pub mod issue;
pub mod validator;

pub use error::{SchemaError, SchemaResult};
pub use issue::{ValidationIssue, ValidationReport};
pub use validator::{SchemaValidator, BUILTIN_PLAN_SCHEMA};
