use farebox::prelude::*;
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq)]
struct Pass {
    id: String,
    zone: u32,
    rides: u32,
}

impl Pass {
    fn new(id: &str, zone: u32, rides: u32) -> Self {
        Self {
            id: id.to_string(),
            zone,
            rides,
        }
    }
}

impl Identifiable for Pass {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Rejects every write after the first `allowed` ones.
struct FlakyStore {
    inner: MemoryStore<Pass>,
    allowed: Cell<usize>,
}

impl Store<Pass> for FlakyStore {
    fn fetch_all(&self) -> Result<Vec<Pass>, StoreError> {
        self.inner.fetch_all()
    }

    fn upsert(&self, value: Pass) -> Result<Pass, StoreError> {
        if self.allowed.get() == 0 {
            return Err(StoreError::Backend("offline".into()));
        }
        self.allowed.set(self.allowed.get() - 1);
        self.inner.upsert(value)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.inner.delete(id)
    }
}

#[test]
fn memory_store_test() {
    let store: MemoryStore<Pass> = MemoryStore::new();
    store.upsert(Pass::new("a", 1, 10)).unwrap();
    store.upsert(Pass::new("b", 2, 10)).unwrap();
    store.upsert(Pass::new("a", 1, 9)).unwrap();
    assert_eq!(
        store.fetch_all().unwrap(),
        vec![Pass::new("a", 1, 9), Pass::new("b", 2, 10)]
    );
    store.delete("a").unwrap();
    assert_eq!(store.delete("a"), Err(StoreError::NotFound("a".into())));
    assert_eq!(store.fetch_all().unwrap().len(), 1);
}

#[test]
fn apply_is_last_write_wins_test() {
    let mut cache = OptimisticCache::new();
    cache.apply(Pass::new("a", 1, 10));
    cache.apply(Pass::new("b", 2, 10));
    cache.apply(Pass::new("a", 1, 7));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("a").unwrap().rides, 7);
    let ids: Vec<_> = cache.values().map(|pass| pass.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert!(cache.is_pending("a"));
    assert_eq!(cache.pending_count(), 2);
}

#[test]
fn reconcile_replaces_local_state_test() {
    let mut cache = OptimisticCache::new();
    cache.apply(Pass::new("a", 1, 3));
    cache.apply(Pass::new("local", 1, 3));
    cache.reconcile(vec![Pass::new("b", 2, 10), Pass::new("a", 1, 10)]);
    assert_eq!(cache.get("a").unwrap().rides, 10);
    assert!(cache.get("local").is_none());
    assert_eq!(cache.pending_count(), 0);
    let ids: Vec<_> = cache.values().map(|pass| pass.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn remove_test() {
    let mut cache = OptimisticCache::new();
    cache.reconcile(vec![Pass::new("a", 1, 10)]);
    assert_eq!(cache.remove("a"), Some(Pass::new("a", 1, 10)));
    assert!(cache.is_empty());
    assert!(cache.is_pending("a"));
    assert_eq!(cache.remove("a"), None);
}

#[test]
fn sync_pushes_and_reconciles_test() {
    let store = MemoryStore::with_values(vec![Pass::new("a", 1, 10), Pass::new("b", 2, 10)]);
    let mut cache = OptimisticCache::new();
    cache.sync(&store).unwrap();
    assert_eq!(cache.len(), 2);

    cache.apply(Pass::new("a", 1, 8));
    cache.remove("b");
    cache.apply(Pass::new("c", 3, 10));
    cache.sync(&store).unwrap();

    assert_eq!(cache.pending_count(), 0);
    assert_eq!(
        store.fetch_all().unwrap(),
        vec![Pass::new("a", 1, 8), Pass::new("c", 3, 10)]
    );
    let cached: Vec<_> = cache.values().cloned().collect();
    assert_eq!(cached, store.fetch_all().unwrap());
}

#[test]
fn sync_delete_of_unsaved_entity_test() {
    let store: MemoryStore<Pass> = MemoryStore::new();
    let mut cache = OptimisticCache::new();
    cache.apply(Pass::new("draft", 1, 1));
    cache.remove("draft");
    cache.sync(&store).unwrap();
    assert!(cache.is_empty());
    assert!(store.fetch_all().unwrap().is_empty());
}

#[test]
fn failed_sync_keeps_optimistic_state_test() {
    let store = FlakyStore {
        inner: MemoryStore::new(),
        allowed: Cell::new(1),
    };
    let mut cache = OptimisticCache::new();
    cache.apply(Pass::new("a", 1, 10));
    cache.apply(Pass::new("b", 2, 10));

    let err = cache.sync(&store).unwrap_err();
    assert_eq!(err, StoreError::Backend("offline".into()));
    assert!(!cache.is_pending("a"));
    assert!(cache.is_pending("b"));
    assert_eq!(cache.get("b").unwrap().zone, 2);
    assert_eq!(store.fetch_all().unwrap(), vec![Pass::new("a", 1, 10)]);

    store.allowed.set(1);
    cache.sync(&store).unwrap();
    assert_eq!(cache.pending_count(), 0);
    assert_eq!(store.fetch_all().unwrap().len(), 2);
}

#[test]
fn sync_through_trait_object_test() {
    let store: Box<dyn Store<Pass>> =
        Box::new(MemoryStore::with_values(vec![Pass::new("a", 1, 1)]));
    let mut cache = OptimisticCache::new();
    cache.sync(store.as_ref()).unwrap();
    assert_eq!(cache.len(), 1);
}
