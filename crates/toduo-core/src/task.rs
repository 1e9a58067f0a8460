use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::TaskId;
use crate::record::{merge, Patchable, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Record for Task {
    type Id = TaskId;
    type Draft = NewTask;
    const KIND: &'static str = "Task";

    fn id(&self) -> TaskId {
        self.id
    }

    fn create(id: TaskId, draft: NewTask, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Patchable for Task {
    type Patch = TaskPatch;

    fn apply(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.completed, patch.completed);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> Task {
        let draft = NewTask {
            title: "X".into(),
            description: Some("Y".into()),
        };
        Task::create(TaskId::from(1), draft, Utc::now())
    }

    #[test]
    fn new_task_starts_incomplete() {
        let task = sample();
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let draft: NewTask = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        let task = Task::create(TaskId::from(1), draft, Utc::now());
        assert_eq!(task.description, "");
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut task = sample();
        let created = task.created_at;
        let later = created + Duration::seconds(5);
        let patch: TaskPatch = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        task.apply(patch, later);

        assert_eq!(task.title, "X");
        assert_eq!(task.description, "Y");
        assert!(task.completed);
        assert_eq!(task.created_at, created);
        assert_eq!(task.updated_at, later);
    }

    #[test]
    fn serializes_snake_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1);
        assert!(json.get("created_at").is_some());
        assert!(json.get("updated_at").is_some());
    }
}
