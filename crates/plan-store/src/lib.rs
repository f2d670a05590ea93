//! Resource storage for plans.
//!
//! Each plan is stored under the client-supplied `objectId` found in its
//! payload, together with a [`VersionTag`](plan_types::VersionTag) generated
//! at creation time.
//!
//! # Storage Backends
//!
//! All backends implement the [`PlanStore`] trait:
//!
//! - [`InMemoryPlanStore`] -- `HashMap`-based store, volatile across restarts
//!
//! # Rules
//!
//! 1. At most one resource per `objectId` at any time.
//! 2. A resource's version tag never changes; there is no update path.
//! 3. `create` and `delete` are not idempotent: repeating them fails.
//! 4. The store owns every entry; callers only ever receive clones.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryPlanStore;
pub use traits::PlanStore;
