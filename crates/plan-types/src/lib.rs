//! Foundation types for the plan store.
//!
//! Every other crate in the workspace depends on `plan-types`.
//!
//! # Key Types
//!
//! - [`PlanId`] — client-supplied identifier taken from a payload's `objectId`
//! - [`VersionTag`] — opaque per-resource token exposed as the HTTP `ETag`
//! - [`Resource`] — a stored payload together with its version tag

pub mod error;
pub mod id;
pub mod resource;
pub mod tag;

pub use error::TypeError;
pub use id::{PlanId, OBJECT_ID_FIELD};
pub use resource::Resource;
pub use tag::VersionTag;
