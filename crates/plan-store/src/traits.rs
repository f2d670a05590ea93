use serde_json::Value;

use plan_types::{PlanId, Resource};

use crate::error::StoreResult;

/// Keyed store of plan resources.
///
/// All implementations must satisfy these invariants:
/// - `create` checks for an existing id and inserts atomically, so two
///   concurrent creates of the same id cannot both succeed.
/// - A reader never observes a partially written entry.
/// - Stored entries are never modified; they are only inserted and removed.
pub trait PlanStore: Send + Sync {
    /// Store a payload that has already passed schema validation.
    ///
    /// Returns the stored entry, including its freshly generated version tag.
    /// Fails with `Conflict` if the id is taken (nothing is written) and with
    /// `Invalid` if the payload carries no string `objectId`.
    fn create(&self, data: Value) -> StoreResult<Resource>;

    /// Fetch a stored entry. Fails with `NotFound` if absent.
    fn get(&self, id: &PlanId) -> StoreResult<Resource>;

    /// Remove a stored entry. Fails with `NotFound` if absent, including on a
    /// second delete of the same id.
    fn delete(&self, id: &PlanId) -> StoreResult<()>;

    /// Payloads of every stored resource, without version tags.
    ///
    /// Order is unspecified.
    fn list_all(&self) -> Vec<Value>;
}
