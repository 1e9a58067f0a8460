use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::TagId;
use crate::record::Record;

/// A label with a free-form color string. Tags are create/delete only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewTag {
    pub name: String,
    pub color: String,
}

impl Record for Tag {
    type Id = TagId;
    type Draft = NewTag;
    const KIND: &'static str = "Tag";

    fn id(&self) -> TagId {
        self.id
    }

    fn create(id: TagId, draft: NewTag, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            created_at: now,
        }
    }
}
