use std::sync::RwLock;

use super::{Identifiable, Store, StoreError};

/// Store kept in process memory. Keeps insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    values: RwLock<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(Vec::new()),
        }
    }

    pub fn with_values(values: Vec<T>) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }
}

fn poisoned<E>(_: E) -> StoreError {
    StoreError::Backend("store lock poisoned".to_string())
}

impl<T: Identifiable + Clone> Store<T> for MemoryStore<T> {
    fn fetch_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.values.read().map_err(poisoned)?.clone())
    }

    fn upsert(&self, value: T) -> Result<T, StoreError> {
        let mut values = self.values.write().map_err(poisoned)?;
        match values.iter_mut().find(|stored| stored.id() == value.id()) {
            Some(stored) => *stored = value.clone(),
            None => values.push(value.clone()),
        }
        Ok(value)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut values = self.values.write().map_err(poisoned)?;
        let index = values
            .iter()
            .position(|stored| stored.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        values.remove(index);
        Ok(())
    }
}
