use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use plan_types::{PlanId, Resource, VersionTag};

use crate::error::{StoreError, StoreResult};
use crate::traits::PlanStore;

/// In-memory, HashMap-based plan store.
///
/// All entries live behind a single `RwLock`: mutations take the write lock,
/// reads take the read lock. Entries are cloned on the way out. Contents are
/// lost when the process exits.
pub struct InMemoryPlanStore {
    plans: RwLock<HashMap<PlanId, Resource>>,
}

impl InMemoryPlanStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            plans: RwLock::new(HashMap::new()),
        }
    }

    /// Number of plans currently stored.
    pub fn len(&self) -> usize {
        self.plans.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.plans.read().expect("lock poisoned").is_empty()
    }

    /// Remove all plans from the store.
    pub fn clear(&self) {
        self.plans.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all stored ids.
    pub fn ids(&self) -> Vec<PlanId> {
        let map = self.plans.read().expect("lock poisoned");
        let mut ids: Vec<PlanId> = map.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for InMemoryPlanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanStore for InMemoryPlanStore {
    fn create(&self, data: Value) -> StoreResult<Resource> {
        let id = PlanId::from_payload(&data)?;
        let mut map = self.plans.write().expect("lock poisoned");
        match map.entry(id) {
            Entry::Occupied(entry) => Err(StoreError::Conflict(entry.key().clone())),
            Entry::Vacant(entry) => {
                let resource = Resource::new(data, VersionTag::generate());
                tracing::debug!(id = %entry.key(), etag = %resource.version_tag, "plan created");
                Ok(entry.insert(resource).clone())
            }
        }
    }

    fn get(&self, id: &PlanId) -> StoreResult<Resource> {
        let map = self.plans.read().expect("lock poisoned");
        map.get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn delete(&self, id: &PlanId) -> StoreResult<()> {
        let mut map = self.plans.write().expect("lock poisoned");
        match map.remove(id) {
            Some(_) => {
                tracing::debug!(%id, "plan deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.clone())),
        }
    }

    fn list_all(&self) -> Vec<Value> {
        let map = self.plans.read().expect("lock poisoned");
        map.values().map(|r| r.data.clone()).collect()
    }
}

impl std::fmt::Debug for InMemoryPlanStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryPlanStore")
            .field("plan_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_types::TypeError;
    use serde_json::json;

    fn plan(id: &str) -> Value {
        json!({
            "objectId": id,
            "objectType": "plan",
            "_org": "example.com",
            "planType": "inNetwork",
            "creationDate": "12-12-2017"
        })
    }

    // -----------------------------------------------------------------------
    // Create / Get
    // -----------------------------------------------------------------------

    #[test]
    fn create_then_get_returns_payload() {
        let store = InMemoryPlanStore::new();
        let created = store.create(plan("a")).unwrap();
        assert_eq!(created.data, plan("a"));

        let fetched = store.get(&PlanId::new("a")).unwrap();
        assert_eq!(fetched.data, plan("a"));
        assert_eq!(fetched.version_tag, created.version_tag);
    }

    #[test]
    fn create_twice_conflicts() {
        let store = InMemoryPlanStore::new();
        let first = store.create(plan("dup")).unwrap();

        let mut other = plan("dup");
        other["planType"] = json!("outOfNetwork");
        let err = store.create(other).unwrap_err();
        assert_eq!(err, StoreError::Conflict(PlanId::new("dup")));

        // The first entry is untouched.
        let fetched = store.get(&PlanId::new("dup")).unwrap();
        assert_eq!(fetched.data, plan("dup"));
        assert_eq!(fetched.version_tag, first.version_tag);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_without_object_id_is_invalid() {
        let store = InMemoryPlanStore::new();
        let err = store.create(json!({"planType": "x"})).unwrap_err();
        assert_eq!(err, StoreError::Invalid(TypeError::MissingObjectId));
        assert!(store.is_empty());
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = InMemoryPlanStore::new();
        let err = store.get(&PlanId::new("nope")).unwrap_err();
        assert_eq!(err, StoreError::NotFound(PlanId::new("nope")));
    }

    #[test]
    fn get_does_not_change_tag() {
        let store = InMemoryPlanStore::new();
        let created = store.create(plan("t")).unwrap();
        for _ in 0..3 {
            assert_eq!(store.get(&PlanId::new("t")).unwrap().version_tag, created.version_tag);
        }
    }

    #[test]
    fn each_create_gets_a_distinct_tag() {
        let store = InMemoryPlanStore::new();
        let a = store.create(plan("a")).unwrap();
        let b = store.create(plan("b")).unwrap();
        assert_ne!(a.version_tag, b.version_tag);
    }

    #[test]
    fn recreate_after_delete_gets_new_tag() {
        let store = InMemoryPlanStore::new();
        let id = PlanId::new("r");
        let first = store.create(plan("r")).unwrap();
        store.delete(&id).unwrap();
        let second = store.create(plan("r")).unwrap();
        assert_ne!(first.version_tag, second.version_tag);
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_twice_is_not_found() {
        let store = InMemoryPlanStore::new();
        let id = PlanId::new("d");
        store.create(plan("d")).unwrap();
        assert_eq!(store.delete(&id), Ok(()));
        assert_eq!(store.delete(&id), Err(StoreError::NotFound(id.clone())));
    }

    #[test]
    fn get_after_delete_is_not_found() {
        let store = InMemoryPlanStore::new();
        let id = PlanId::new("g");
        store.create(plan("g")).unwrap();
        store.delete(&id).unwrap();
        assert!(matches!(store.get(&id), Err(StoreError::NotFound(_))));
        assert!(store.ids().is_empty());
    }

    #[test]
    fn delete_missing_is_not_found() {
        let store = InMemoryPlanStore::new();
        assert!(matches!(
            store.delete(&PlanId::new("never")),
            Err(StoreError::NotFound(_))
        ));
    }

    // -----------------------------------------------------------------------
    // List
    // -----------------------------------------------------------------------

    #[test]
    fn list_empty_store() {
        let store = InMemoryPlanStore::new();
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn list_reflects_creates_and_deletes() {
        let store = InMemoryPlanStore::new();
        store.create(plan("A")).unwrap();
        store.create(plan("B")).unwrap();
        store.create(plan("C")).unwrap();
        store.delete(&PlanId::new("B")).unwrap();

        let mut ids: Vec<String> = store
            .list_all()
            .iter()
            .map(|v| v["objectId"].as_str().unwrap().to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn list_returns_payload_only() {
        let store = InMemoryPlanStore::new();
        store.create(plan("p")).unwrap();
        let all = store.list_all();
        assert_eq!(all, vec![plan("p")]);
        assert!(all[0].get("etag").is_none());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_clear_and_ids() {
        let store = InMemoryPlanStore::default();
        assert!(store.is_empty());
        store.create(plan("b")).unwrap();
        store.create(plan("a")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.ids(), vec![PlanId::new("a"), PlanId::new("b")]);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryPlanStore::new();
        store.create(plan("x")).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryPlanStore"));
        assert!(debug.contains("plan_count"));
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_creates_of_same_id_admit_exactly_one() {
        use std::sync::{Arc, Barrier};
        use std::thread;

        let store = Arc::new(InMemoryPlanStore::new());
        let barrier = Arc::new(Barrier::new(16));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    store.create(plan("race")).is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_reads_see_complete_entries() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryPlanStore::new());
        let created = store.create(plan("shared")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let expected = created.clone();
                thread::spawn(move || {
                    let got = store.get(&PlanId::new("shared")).unwrap();
                    assert_eq!(got, expected);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }
}
