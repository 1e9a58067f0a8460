use chrono::{DateTime, Utc};

use crate::ids::SequentialId;

/// An entity stored in one collection.
///
/// `create` builds a fresh record from its draft; the collection supplies the
/// id and the timestamp so every entity is stamped the same way.
pub trait Record: Clone + Send + Sync + 'static {
    type Id: SequentialId;
    type Draft: Send;

    /// Human-readable resource name used in "not found" messages.
    const KIND: &'static str;

    fn id(&self) -> Self::Id;
    fn create(id: Self::Id, draft: Self::Draft, now: DateTime<Utc>) -> Self;
}

/// A record that supports partial updates.
///
/// Every field present in the patch overwrites the stored value; absent
/// fields are left alone. Implementations refresh `updated_at` when the
/// entity carries one.
pub trait Patchable: Record {
    type Patch: Send;

    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

/// Overwrite `slot` only when the patch carries a value.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}
