use std::sync::Arc;

use serde::Serialize;
use toduo_core::{Board, Card, Column, Note, Tag, Task};

use crate::collection::Collection;

/// In-memory resource store. Cheap to clone; clones share the same collections.
///
/// Each collection has its own lock, so a write to tasks never waits on boards.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Collections>,
}

#[derive(Default)]
struct Collections {
    tasks: Collection<Task>,
    notes: Collection<Note>,
    boards: Collection<Board>,
    columns: Collection<Column>,
    cards: Collection<Card>,
    tags: Collection<Tag>,
}

/// Row count per collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub tasks: usize,
    pub notes: usize,
    pub boards: usize,
    pub columns: usize,
    pub cards: usize,
    pub tags: usize,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &Collection<Task> {
        &self.inner.tasks
    }

    pub fn notes(&self) -> &Collection<Note> {
        &self.inner.notes
    }

    pub fn boards(&self) -> &Collection<Board> {
        &self.inner.boards
    }

    pub fn columns(&self) -> &Collection<Column> {
        &self.inner.columns
    }

    pub fn cards(&self) -> &Collection<Card> {
        &self.inner.cards
    }

    pub fn tags(&self) -> &Collection<Tag> {
        &self.inner.tags
    }

    pub fn counts(&self) -> Counts {
        Counts {
            tasks: self.tasks().len(),
            notes: self.notes().len(),
            boards: self.boards().len(),
            columns: self.columns().len(),
            cards: self.cards().len(),
            tags: self.tags().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toduo_core::{NewBoard, NewTag};

    #[test]
    fn new_store_is_empty() {
        assert_eq!(Store::new().counts(), Counts::default());
    }

    #[test]
    fn clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        other.boards().insert(NewBoard { title: "b".into() });
        assert_eq!(store.counts().boards, 1);
    }

    #[test]
    fn separate_stores_are_isolated() {
        let a = Store::new();
        let b = Store::new();
        a.tags().insert(NewTag {
            name: "x".into(),
            color: "#fff".into(),
        });
        assert_eq!(a.counts().tags, 1);
        assert_eq!(b.counts().tags, 0);
    }

    #[test]
    fn collections_number_ids_independently() {
        let store = Store::new();
        let board = store.boards().insert(NewBoard { title: "b".into() });
        let tag = store.tags().insert(NewTag {
            name: "t".into(),
            color: "red".into(),
        });
        assert_eq!(board.to_string(), "1");
        assert_eq!(tag.to_string(), "1");
    }
}
