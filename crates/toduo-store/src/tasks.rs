use tracing::{debug, instrument};

use toduo_core::{NewTask, Task, TaskId, TaskPatch};

use crate::error::StoreError;
use crate::store::Store;

pub struct TaskRepo {
    store: Store,
}

impl TaskRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn create(&self, draft: NewTask) -> TaskId {
        let id = self.store.tasks().insert(draft);
        debug!(task_id = %id, "task created");
        id
    }

    pub fn list(&self) -> Vec<Task> {
        self.store.tasks().all()
    }

    pub fn get(&self, id: TaskId) -> Result<Task, StoreError> {
        self.store.tasks().find(id)
    }

    #[instrument(skip(self, patch), fields(task_id = %id))]
    pub fn update(&self, id: TaskId, patch: TaskPatch) -> Result<usize, StoreError> {
        self.store.tasks().patch(id, patch)
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub fn delete(&self, id: TaskId) -> Result<usize, StoreError> {
        self.store.tasks().remove(id)
    }
}
