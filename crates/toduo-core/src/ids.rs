use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Integer identifier assigned by a collection as `max(existing) + 1`.
pub trait SequentialId: Copy + Eq + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static {
    fn from_raw(raw: i64) -> Self;
    fn get(self) -> i64;

    /// The id following the highest one still present, or 1 for an empty collection.
    fn after(max: Option<Self>) -> Self {
        Self::from_raw(max.map_or(0, Self::get) + 1)
    }
}

macro_rules! numeric_id {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl SequentialId for $name {
            fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

numeric_id!(TaskId);
numeric_id!(NoteId);
numeric_id!(BoardId);
numeric_id!(ColumnId);
numeric_id!(CardId);
numeric_id!(TagId);
