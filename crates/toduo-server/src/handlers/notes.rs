use axum::extract::{Path, State};
use axum::Json;
use toduo_core::{NewNote, Note, NoteId, NotePatch};

use super::{Changes, Inserted};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(state.notes().list())
}

pub async fn create(State(state): State<AppState>, Json(body): Json<NewNote>) -> Json<Inserted> {
    Json(Inserted::new(state.notes().create(body)))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<NoteId>) -> Result<Json<Note>, ApiError> {
    Ok(Json(state.notes().get(id)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
    Json(patch): Json<NotePatch>,
) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.notes().update(id, patch)?.into()))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<NoteId>) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.notes().delete(id)?.into()))
}

#[cfg(test)]
mod tests {
    use crate::testing::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn note_lifecycle() {
        let app = TestApp::new();
        let (_, created) = app
            .post("/api/notes", json!({"title": "Meeting", "content": "agenda"}))
            .await;
        assert_eq!(created["lastInsertRowid"], 1);

        app.put("/api/notes/1", json!({"content": "minutes"})).await;
        let (_, note) = app.get("/api/notes/1").await;
        assert_eq!(note["title"], "Meeting");
        assert_eq!(note["content"], "minutes");

        assert_eq!(app.delete("/api/notes/1").await.0, StatusCode::OK);
        let (status, body) = app.get("/api/notes/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Note not found");
    }

    #[tokio::test]
    async fn content_is_required() {
        let app = TestApp::new();
        let (status, _) = app.post_raw("/api/notes", r#"{"title":"t"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
