//! HTTP handlers organized by resource.

pub mod boards;
pub mod notes;
pub mod system;
pub mod tags;
pub mod tasks;
pub mod vault;

use serde::Serialize;

/// Body returned by every create endpoint.
#[derive(Debug, Serialize)]
pub struct Inserted {
    #[serde(rename = "lastInsertRowid")]
    pub last_insert_rowid: i64,
}

impl Inserted {
    pub fn new(id: impl toduo_core::SequentialId) -> Self {
        Self {
            last_insert_rowid: id.get(),
        }
    }
}

/// Body returned by update and delete endpoints.
#[derive(Debug, Serialize)]
pub struct Changes {
    pub changes: usize,
}

impl From<usize> for Changes {
    fn from(changes: usize) -> Self {
        Self { changes }
    }
}
