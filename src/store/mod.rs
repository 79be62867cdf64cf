//! Explicitly passed data access plus a client side optimistic cache.
//!
//! Consumers receive a [`Store`] instead of reaching for a process wide
//! client, so tests can hand in a [`MemoryStore`].
use thiserror::Error;

mod cache;
mod memory;
pub use cache::*;
pub use memory::*;

pub trait Identifiable {
    fn id(&self) -> &str;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No entity with id: {0}")]
    NotFound(String),
    #[error("Backend error: {0}")]
    Backend(String),
}

pub trait Store<T> {
    fn fetch_all(&self) -> Result<Vec<T>, StoreError>;
    /// Inserts or replaces by id and returns the stored value.
    fn upsert(&self, value: T) -> Result<T, StoreError>;
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}
