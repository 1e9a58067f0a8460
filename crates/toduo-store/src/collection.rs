use chrono::Utc;
use parking_lot::Mutex;
use toduo_core::{Patchable, Record, SequentialId};

use crate::error::StoreError;

/// An insertion-ordered set of records behind a single lock.
///
/// Id assignment and the append happen under the same guard, so concurrent
/// creates can never hand out the same id. Lookups are linear scans.
pub struct Collection<T: Record> {
    rows: Mutex<Vec<T>>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Append a record built from `draft` and return its id (`max + 1`, or 1 when empty).
    pub fn insert(&self, draft: T::Draft) -> T::Id {
        let mut rows = self.rows.lock();
        let id = T::Id::after(rows.iter().map(|r| r.id()).max());
        rows.push(T::create(id, draft, Utc::now()));
        id
    }

    /// Snapshot of every record in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.rows.lock().clone()
    }

    /// Snapshot of the records matching `pred`, in insertion order.
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.lock().iter().filter(|&r| pred(r)).cloned().collect()
    }

    pub fn find(&self, id: T::Id) -> Result<T, StoreError> {
        self.rows
            .lock()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found::<T>(id))
    }

    /// Remove the record with `id`. Returns the number of removed rows (always 1).
    pub fn remove(&self, id: T::Id) -> Result<usize, StoreError> {
        let mut rows = self.rows.lock();
        let idx = rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found::<T>(id))?;
        rows.remove(idx);
        Ok(1)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

impl<T: Patchable> Collection<T> {
    /// Merge `patch` into the record with `id` in place. Returns the number of changed rows (always 1).
    pub fn patch(&self, id: T::Id, patch: T::Patch) -> Result<usize, StoreError> {
        let mut rows = self.rows.lock();
        let row = rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found::<T>(id))?;
        row.apply(patch, Utc::now());
        Ok(1)
    }
}
