use toduo_core::{Record, SequentialId};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: i64 },
}

impl StoreError {
    pub fn not_found<T: Record>(id: T::Id) -> Self {
        StoreError::NotFound {
            kind: T::KIND,
            id: id.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toduo_core::{Task, TaskId};

    #[test]
    fn not_found_message_names_the_resource() {
        let err = StoreError::not_found::<Task>(TaskId::from(9));
        assert_eq!(err.to_string(), "Task not found");
        assert!(matches!(err, StoreError::NotFound { id: 9, .. }));
    }
}
