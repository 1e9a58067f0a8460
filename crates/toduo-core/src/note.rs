use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::NoteId;
use crate::record::{merge, Patchable, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Record for Note {
    type Id = NoteId;
    type Draft = NewNote;
    const KIND: &'static str = "Note";

    fn id(&self) -> NoteId {
        self.id
    }

    fn create(id: NoteId, draft: NewNote, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Patchable for Note {
    type Patch = NotePatch;

    fn apply(&mut self, patch: NotePatch, now: DateTime<Utc>) {
        merge(&mut self.title, patch.title);
        merge(&mut self.content, patch.content);
        self.updated_at = now;
    }
}
