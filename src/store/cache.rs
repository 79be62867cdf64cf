use std::{collections::HashMap, sync::Arc};
use tracing::{debug, warn};

use super::{Identifiable, Store, StoreError};

/// Entities keyed by id with local edits applied before the backend confirms
/// them. The last write to an id wins, and [`reconcile`](Self::reconcile)
/// replaces everything with confirmed data.
#[derive(Debug, Clone)]
pub struct OptimisticCache<T> {
    entries: HashMap<Arc<str>, T>,
    order: Vec<Arc<str>>,
    // Ids with unconfirmed writes, oldest first. A pending id without an
    // entry is a pending delete.
    pending: Vec<Arc<str>>,
}

impl<T> Default for OptimisticCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            pending: Vec::new(),
        }
    }
}

impl<T: Identifiable + Clone> OptimisticCache<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// Entries in the order they were first seen.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.iter().any(|pending| &**pending == id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Optimistic insert or replace.
    pub fn apply(&mut self, value: T) {
        let id = self.insert(value);
        self.mark_pending(id);
    }

    /// Optimistic delete.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let removed = self.entries.remove(id)?;
        self.order.retain(|key| &**key != id);
        self.mark_pending(Arc::from(id));
        Some(removed)
    }

    /// Drops every local entry and pending write in favour of `confirmed`.
    pub fn reconcile(&mut self, confirmed: Vec<T>) {
        if !self.pending.is_empty() {
            debug!(
                "Discarding {} unconfirmed writes on reconcile",
                self.pending.len()
            );
        }
        self.entries.clear();
        self.order.clear();
        self.pending.clear();
        for value in confirmed {
            self.insert(value);
        }
    }

    /// Pushes pending writes in order, then refetches and reconciles. On a
    /// failed push the remaining writes stay pending and the cache keeps its
    /// optimistic state.
    pub fn sync<S>(&mut self, store: &S) -> Result<(), StoreError>
    where
        S: Store<T> + ?Sized,
    {
        while let Some(id) = self.pending.first().cloned() {
            let result = match self.entries.get(&id) {
                Some(value) => store.upsert(value.clone()).map(|_| ()),
                None => match store.delete(&id) {
                    // Never reached the backend, nothing to delete.
                    Err(StoreError::NotFound(_)) => Ok(()),
                    other => other,
                },
            };
            if let Err(err) = result {
                warn!("Failed to push write for {id}: {err}");
                return Err(err);
            }
            self.pending.remove(0);
        }

        let confirmed = store.fetch_all()?;
        self.reconcile(confirmed);
        Ok(())
    }

    fn insert(&mut self, value: T) -> Arc<str> {
        let id: Arc<str> = Arc::from(value.id());
        if self.entries.insert(id.clone(), value).is_none() {
            self.order.push(id.clone());
        }
        id
    }

    fn mark_pending(&mut self, id: Arc<str>) {
        self.pending.retain(|pending| *pending != id);
        self.pending.push(id);
    }
}
