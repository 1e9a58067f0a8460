use tracing::{debug, instrument};

use toduo_core::{NewTag, Tag, TagId};

use crate::error::StoreError;
use crate::store::Store;

/// Tags support create, read and delete. There is no update.
pub struct TagRepo {
    store: Store,
}

impl TagRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub fn create(&self, draft: NewTag) -> TagId {
        let id = self.store.tags().insert(draft);
        debug!(tag_id = %id, "tag created");
        id
    }

    pub fn list(&self) -> Vec<Tag> {
        self.store.tags().all()
    }

    pub fn get(&self, id: TagId) -> Result<Tag, StoreError> {
        self.store.tags().find(id)
    }

    #[instrument(skip(self), fields(tag_id = %id))]
    pub fn delete(&self, id: TagId) -> Result<usize, StoreError> {
        self.store.tags().remove(id)
    }
}
