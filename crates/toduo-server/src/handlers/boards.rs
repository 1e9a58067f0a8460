//! Boards, plus the columns and cards nested under them.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use toduo_core::{
    Board, BoardId, BoardPatch, Card, CardId, CardPatch, Column, ColumnId, ColumnPatch, NewBoard,
    NewCard, NewColumn,
};

use super::{Changes, Inserted};
use crate::error::ApiError;
use crate::state::AppState;

/// Column fields in a create request; the board comes from the path.
#[derive(Debug, Deserialize)]
pub struct CreateColumn {
    pub title: String,
    pub position: i64,
}

/// Card fields in a create request; the column comes from the path.
#[derive(Debug, Deserialize)]
pub struct CreateCard {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position: Option<i64>,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Board>> {
    Json(state.boards().list())
}

pub async fn create(State(state): State<AppState>, Json(body): Json<NewBoard>) -> Json<Inserted> {
    Json(Inserted::new(state.boards().create(body)))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<BoardId>) -> Result<Json<Board>, ApiError> {
    Ok(Json(state.boards().get(id)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<BoardId>,
    Json(patch): Json<BoardPatch>,
) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.boards().update(id, patch)?.into()))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<BoardId>) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.boards().delete(id)?.into()))
}

pub async fn list_columns(State(state): State<AppState>, Path(board_id): Path<BoardId>) -> Json<Vec<Column>> {
    Json(state.columns().list_for_board(board_id))
}

pub async fn create_column(
    State(state): State<AppState>,
    Path(board_id): Path<BoardId>,
    Json(body): Json<CreateColumn>,
) -> Json<Inserted> {
    let id = state.columns().create(NewColumn {
        board_id,
        title: body.title,
        position: body.position,
    });
    Json(Inserted::new(id))
}

pub async fn update_column(
    State(state): State<AppState>,
    Path(id): Path<ColumnId>,
    Json(patch): Json<ColumnPatch>,
) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.columns().update(id, patch)?.into()))
}

pub async fn delete_column(
    State(state): State<AppState>,
    Path(id): Path<ColumnId>,
) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.columns().delete(id)?.into()))
}

pub async fn list_cards(State(state): State<AppState>, Path(column_id): Path<ColumnId>) -> Json<Vec<Card>> {
    Json(state.cards().list_for_column(column_id))
}

pub async fn create_card(
    State(state): State<AppState>,
    Path(column_id): Path<ColumnId>,
    Json(body): Json<CreateCard>,
) -> Json<Inserted> {
    let id = state.cards().create(NewCard {
        column_id,
        title: body.title,
        description: body.description,
        position: body.position.unwrap_or(0),
    });
    Json(Inserted::new(id))
}

pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<CardId>,
    Json(patch): Json<CardPatch>,
) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.cards().update(id, patch)?.into()))
}

pub async fn delete_card(State(state): State<AppState>, Path(id): Path<CardId>) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.cards().delete(id)?.into()))
}

#[cfg(test)]
mod tests {
    use crate::testing::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn board_crud() {
        let app = TestApp::new();
        app.post("/api/boards", json!({"title": "Roadmap"})).await;
        app.put("/api/boards/1", json!({"title": "Roadmap 2"})).await;
        let (_, board) = app.get("/api/boards/1").await;
        assert_eq!(board["title"], "Roadmap 2");
        assert!(board.get("updated_at").is_some());

        assert_eq!(app.delete("/api/boards/1").await.1, json!({"changes": 1}));
        assert_eq!(app.get("/api/boards/1").await.1, json!({"detail": "Board not found"}));
    }

    #[tokio::test]
    async fn columns_listed_per_board_in_creation_order() {
        let app = TestApp::new();
        app.post("/api/boards/5/columns", json!({"title": "a", "position": 2})).await;
        app.post("/api/boards/6/columns", json!({"title": "elsewhere", "position": 0})).await;
        app.post("/api/boards/5/columns", json!({"title": "b", "position": 1})).await;

        let (status, cols) = app.get("/api/boards/5/columns").await;
        assert_eq!(status, StatusCode::OK);
        let titles: Vec<_> = cols.as_array().unwrap().iter().map(|c| c["title"].clone()).collect();
        assert_eq!(titles, [json!("a"), json!("b")]);
        assert_eq!(cols[0]["board_id"], 5);
        assert!(cols[0].get("updated_at").is_none());
    }

    #[tokio::test]
    async fn column_requires_position() {
        let app = TestApp::new();
        let (status, _) = app.post_raw("/api/boards/1/columns", r#"{"title":"a"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn column_update_and_delete() {
        let app = TestApp::new();
        app.post("/api/boards/1/columns", json!({"title": "To Do", "position": 0})).await;

        let (status, body) = app.put("/api/boards/columns/1", json!({"position": 3})).await;
        assert_eq!((status, body), (StatusCode::OK, json!({"changes": 1})));
        let (_, cols) = app.get("/api/boards/1/columns").await;
        assert_eq!(cols[0]["title"], "To Do");
        assert_eq!(cols[0]["position"], 3);

        app.delete("/api/boards/columns/1").await;
        let (status, body) = app.delete("/api/boards/columns/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Column not found");
    }

    #[tokio::test]
    async fn card_defaults_and_scope() {
        let app = TestApp::new();
        app.post("/api/boards/columns/1/cards", json!({"title": "Wireframes"})).await;
        app.post(
            "/api/boards/columns/2/cards",
            json!({"title": "Auth", "description": "login", "position": 4}),
        )
        .await;

        let (_, cards) = app.get("/api/boards/columns/1/cards").await;
        let cards = cards.as_array().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0]["description"], "");
        assert_eq!(cards[0]["position"], 0);
        assert_eq!(cards[0]["column_id"], 1);

        let (_, other) = app.get("/api/boards/columns/2/cards").await;
        assert_eq!(other[0]["position"], 4);
    }

    #[tokio::test]
    async fn card_update_and_delete() {
        let app = TestApp::new();
        app.post("/api/boards/columns/1/cards", json!({"title": "c", "position": null})).await;
        app.put("/api/boards/cards/1", json!({"title": "renamed"})).await;

        let (_, cards) = app.get("/api/boards/columns/1/cards").await;
        assert_eq!(cards[0]["title"], "renamed");
        assert_eq!(cards[0]["position"], 0);

        assert_eq!(app.delete("/api/boards/cards/1").await.0, StatusCode::OK);
        let (status, body) = app.put("/api/boards/cards/1", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Card not found");
    }

    #[tokio::test]
    async fn deleting_board_keeps_its_columns() {
        let app = TestApp::new();
        app.post("/api/boards", json!({"title": "B"})).await;
        app.post("/api/boards/1/columns", json!({"title": "c", "position": 0})).await;
        app.delete("/api/boards/1").await;

        let (_, cols) = app.get("/api/boards/1/columns").await;
        assert_eq!(cols.as_array().unwrap().len(), 1);
    }
}
