//! Kanban entities: boards, their columns, and the cards inside columns.
//!
//! `board_id` and `column_id` are plain foreign keys. Nothing checks that the
//! parent exists, and deleting a parent leaves its children in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{BoardId, CardId, ColumnId};
use crate::record::{merge, Patchable, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewBoard {
    pub title: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BoardPatch {
    pub title: Option<String>,
}

impl Record for Board {
    type Id = BoardId;
    type Draft = NewBoard;
    const KIND: &'static str = "Board";

    fn id(&self) -> BoardId {
        self.id
    }

    fn create(id: BoardId, draft: NewBoard, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Patchable for Board {
    type Patch = BoardPatch;

    fn apply(&mut self, patch: BoardPatch, now: DateTime<Utc>) {
        merge(&mut self.title, patch.title);
        self.updated_at = now;
    }
}

/// A column on a board. Columns carry no `updated_at`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub board_id: BoardId,
    pub title: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewColumn {
    pub board_id: BoardId,
    pub title: String,
    pub position: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ColumnPatch {
    pub title: Option<String>,
    pub position: Option<i64>,
}

impl Record for Column {
    type Id = ColumnId;
    type Draft = NewColumn;
    const KIND: &'static str = "Column";

    fn id(&self) -> ColumnId {
        self.id
    }

    fn create(id: ColumnId, draft: NewColumn, now: DateTime<Utc>) -> Self {
        Self {
            id,
            board_id: draft.board_id,
            title: draft.title,
            position: draft.position,
            created_at: now,
        }
    }
}

impl Patchable for Column {
    type Patch = ColumnPatch;

    fn apply(&mut self, patch: ColumnPatch, _now: DateTime<Utc>) {
        merge(&mut self.title, patch.title);
        merge(&mut self.position, patch.position);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub column_id: ColumnId,
    pub title: String,
    pub description: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewCard {
    pub column_id: ColumnId,
    pub title: String,
    pub description: String,
    pub position: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<i64>,
}

impl Record for Card {
    type Id = CardId;
    type Draft = NewCard;
    const KIND: &'static str = "Card";

    fn id(&self) -> CardId {
        self.id
    }

    fn create(id: CardId, draft: NewCard, now: DateTime<Utc>) -> Self {
        Self {
            id,
            column_id: draft.column_id,
            title: draft.title,
            description: draft.description,
            position: draft.position,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Patchable for Card {
    type Patch = CardPatch;

    fn apply(&mut self, patch: CardPatch, now: DateTime<Utc>) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.position, patch.position);
        self.updated_at = now;
    }
}
