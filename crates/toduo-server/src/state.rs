use std::time::Instant;

use toduo_store::{BoardRepo, CardRepo, ColumnRepo, NoteRepo, Store, TagRepo, TaskRepo};
use toduo_vault::VaultWriter;

/// Shared application state passed to Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub vault: VaultWriter,
    /// When the server started.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Store, vault: VaultWriter) -> Self {
        Self {
            store,
            vault,
            start_time: Instant::now(),
        }
    }

    pub fn tasks(&self) -> TaskRepo {
        TaskRepo::new(self.store.clone())
    }

    pub fn notes(&self) -> NoteRepo {
        NoteRepo::new(self.store.clone())
    }

    pub fn boards(&self) -> BoardRepo {
        BoardRepo::new(self.store.clone())
    }

    pub fn columns(&self) -> ColumnRepo {
        ColumnRepo::new(self.store.clone())
    }

    pub fn cards(&self) -> CardRepo {
        CardRepo::new(self.store.clone())
    }

    pub fn tags(&self) -> TagRepo {
        TagRepo::new(self.store.clone())
    }
}
