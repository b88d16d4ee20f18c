//! In-memory table used by the in-memory repositories

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Rows keyed by a store-assigned, monotonically increasing id
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryTable<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    sequence: AtomicI64,
}

impl<T> Default for InMemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryTable<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    /// Reserves the next id, starting at 1 like a `BIGSERIAL`
    pub fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, BTreeMap<i64, T>> {
        self.rows.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<i64, T>> {
        self.rows.write().await
    }

    pub async fn remove(&self, id: i64) -> bool {
        self.rows.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

impl<T: Clone> InMemoryTable<T> {
    pub async fn get(&self, id: i64) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }

    /// Builds a row from a freshly reserved id and stores it
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(i64) -> T,
    {
        let id = self.next_id();
        let row = build(id);
        self.rows.write().await.insert(id, row.clone());
        row
    }

    /// Applies `change` to the row and returns the updated copy
    pub async fn update_with<F>(&self, id: i64, change: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&id)?;
        change(row);
        Some(row.clone())
    }
}
