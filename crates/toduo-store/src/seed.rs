//! Demo fixtures for a fresh store: a couple of tasks and notes, one kanban
//! board with three columns and a card in each, and three tags.

use tracing::info;

use toduo_core::{NewBoard, NewCard, NewColumn, NewNote, NewTag, NewTask};

use crate::store::Store;

pub fn seed_demo_data(store: &Store) {
    for (title, description) in [
        ("Complete project proposal", "Write a detailed proposal for the new project"),
        ("Schedule team meeting", "Set up a meeting with the development team"),
    ] {
        store.tasks().insert(NewTask {
            title: title.into(),
            description: Some(description.into()),
        });
    }

    for (title, content) in [
        ("Meeting notes", "Key points from the team meeting"),
        ("Project ideas", "List of potential project ideas"),
    ] {
        store.notes().insert(NewNote {
            title: title.into(),
            content: content.into(),
        });
    }

    let board_id = store.boards().insert(NewBoard {
        title: "Project Board".into(),
    });

    let lanes = [
        ("To Do", "Create wireframes", "Design wireframes for the new feature"),
        ("In Progress", "Implement authentication", "Add user authentication to the app"),
        ("Done", "Set up project repository", "Initialize Git repository and set up CI/CD"),
    ];
    for (position, (column, card, description)) in (0_i64..).zip(lanes) {
        let column_id = store.columns().insert(NewColumn {
            board_id,
            title: column.into(),
            position,
        });
        store.cards().insert(NewCard {
            column_id,
            title: card.into(),
            description: description.into(),
            position: 0,
        });
    }

    for (name, color) in [("Frontend", "#3498db"), ("Backend", "#e74c3c"), ("Design", "#2ecc71")] {
        store.tags().insert(NewTag {
            name: name.into(),
            color: color.into(),
        });
    }

    let counts = store.counts();
    info!(
        tasks = counts.tasks,
        notes = counts.notes,
        boards = counts.boards,
        tags = counts.tags,
        "demo data seeded"
    );
}
