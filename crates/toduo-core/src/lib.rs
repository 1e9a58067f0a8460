pub mod board;
pub mod ids;
pub mod note;
pub mod record;
pub mod tag;
pub mod task;

pub use board::{Board, BoardPatch, Card, CardPatch, Column, ColumnPatch, NewBoard, NewCard, NewColumn};
pub use ids::{BoardId, CardId, ColumnId, NoteId, SequentialId, TagId, TaskId};
pub use note::{NewNote, Note, NotePatch};
pub use record::{Patchable, Record};
pub use tag::{NewTag, Tag};
pub use task::{NewTask, Task, TaskPatch};
