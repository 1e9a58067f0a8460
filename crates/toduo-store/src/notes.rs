use tracing::{debug, instrument};

use toduo_core::{NewNote, Note, NoteId, NotePatch};

use crate::error::StoreError;
use crate::store::Store;

pub struct NoteRepo {
    store: Store,
}

impl NoteRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn create(&self, draft: NewNote) -> NoteId {
        let id = self.store.notes().insert(draft);
        debug!(note_id = %id, "note created");
        id
    }

    pub fn list(&self) -> Vec<Note> {
        self.store.notes().all()
    }

    pub fn get(&self, id: NoteId) -> Result<Note, StoreError> {
        self.store.notes().find(id)
    }

    #[instrument(skip(self, patch), fields(note_id = %id))]
    pub fn update(&self, id: NoteId, patch: NotePatch) -> Result<usize, StoreError> {
        self.store.notes().patch(id, patch)
    }

    #[instrument(skip(self), fields(note_id = %id))]
    pub fn delete(&self, id: NoteId) -> Result<usize, StoreError> {
        self.store.notes().remove(id)
    }
}
