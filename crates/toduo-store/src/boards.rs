//! Boards, columns and cards.
//!
//! Parent ids are stored as given. Creating a column for a board that does
//! not exist succeeds, and deleting a board or column leaves its children
//! orphaned.

use tracing::{debug, instrument};

use toduo_core::{
    Board, BoardId, BoardPatch, Card, CardId, CardPatch, Column, ColumnId, ColumnPatch, NewBoard,
    NewCard, NewColumn,
};

use crate::error::StoreError;
use crate::store::Store;

pub struct BoardRepo {
    store: Store,
}

impl BoardRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn create(&self, draft: NewBoard) -> BoardId {
        let id = self.store.boards().insert(draft);
        debug!(board_id = %id, "board created");
        id
    }

    pub fn list(&self) -> Vec<Board> {
        self.store.boards().all()
    }

    pub fn get(&self, id: BoardId) -> Result<Board, StoreError> {
        self.store.boards().find(id)
    }

    #[instrument(skip(self, patch), fields(board_id = %id))]
    pub fn update(&self, id: BoardId, patch: BoardPatch) -> Result<usize, StoreError> {
        self.store.boards().patch(id, patch)
    }

    #[instrument(skip(self), fields(board_id = %id))]
    pub fn delete(&self, id: BoardId) -> Result<usize, StoreError> {
        self.store.boards().remove(id)
    }
}

pub struct ColumnRepo {
    store: Store,
}

impl ColumnRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    #[instrument(skip(self, draft), fields(board_id = %draft.board_id, position = draft.position))]
    pub fn create(&self, draft: NewColumn) -> ColumnId {
        let id = self.store.columns().insert(draft);
        debug!(column_id = %id, "column created");
        id
    }

    /// Columns of one board, in creation order.
    pub fn list_for_board(&self, board_id: BoardId) -> Vec<Column> {
        self.store.columns().filter(|c| c.board_id == board_id)
    }

    #[instrument(skip(self, patch), fields(column_id = %id))]
    pub fn update(&self, id: ColumnId, patch: ColumnPatch) -> Result<usize, StoreError> {
        self.store.columns().patch(id, patch)
    }

    #[instrument(skip(self), fields(column_id = %id))]
    pub fn delete(&self, id: ColumnId) -> Result<usize, StoreError> {
        self.store.columns().remove(id)
    }
}

pub struct CardRepo {
    store: Store,
}

impl CardRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    #[instrument(skip(self, draft), fields(column_id = %draft.column_id, position = draft.position))]
    pub fn create(&self, draft: NewCard) -> CardId {
        let id = self.store.cards().insert(draft);
        debug!(card_id = %id, "card created");
        id
    }

    /// Cards of one column, in creation order.
    pub fn list_for_column(&self, column_id: ColumnId) -> Vec<Card> {
        self.store.cards().filter(|c| c.column_id == column_id)
    }

    #[instrument(skip(self, patch), fields(card_id = %id))]
    pub fn update(&self, id: CardId, patch: CardPatch) -> Result<usize, StoreError> {
        self.store.cards().patch(id, patch)
    }

    #[instrument(skip(self), fields(card_id = %id))]
    pub fn delete(&self, id: CardId) -> Result<usize, StoreError> {
        self.store.cards().remove(id)
    }
}
