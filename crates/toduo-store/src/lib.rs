pub mod boards;
pub mod collection;
pub mod error;
pub mod notes;
pub mod seed;
pub mod store;
pub mod tags;
pub mod tasks;

pub use boards::{BoardRepo, CardRepo, ColumnRepo};
pub use collection::Collection;
pub use error::StoreError;
pub use notes::NoteRepo;
pub use seed::seed_demo_data;
pub use store::{Counts, Store};
pub use tags::TagRepo;
pub use tasks::TaskRepo;
