use axum::extract::{Path, State};
use axum::Json;
use toduo_core::{NewTask, Task, TaskId, TaskPatch};

use super::{Changes, Inserted};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.tasks().list())
}

pub async fn create(State(state): State<AppState>, Json(body): Json<NewTask>) -> Json<Inserted> {
    Json(Inserted::new(state.tasks().create(body)))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<TaskId>) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.tasks().get(id)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.tasks().update(id, patch)?.into()))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<TaskId>) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.tasks().delete(id)?.into()))
}

#[cfg(test)]
mod tests {
    use crate::testing::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn create_returns_last_insert_rowid() {
        let app = TestApp::new();
        let (status, body) = app.post("/api/tasks", json!({"title": "Write docs"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"lastInsertRowid": 1}));

        let (_, tasks) = app.get("/api/tasks").await;
        assert_eq!(tasks.as_array().unwrap().len(), 1);
        assert_eq!(tasks[0]["id"], 1);
        assert_eq!(tasks[0]["description"], "");
        assert_eq!(tasks[0]["completed"], false);
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let app = TestApp::new();
        app.post("/api/tasks", json!({"title": "X", "description": "Y"})).await;
        let (_, before) = app.get("/api/tasks/1").await;

        let (status, body) = app.put("/api/tasks/1", json!({"completed": true})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"changes": 1}));

        let (_, after) = app.get("/api/tasks/1").await;
        assert_eq!(after["title"], "X");
        assert_eq!(after["description"], "Y");
        assert_eq!(after["completed"], true);
        assert_eq!(after["created_at"], before["created_at"]);
    }

    #[tokio::test]
    async fn missing_task_is_404_with_detail() {
        let app = TestApp::new();
        for (status, body) in [
            app.get("/api/tasks/9").await,
            app.put("/api/tasks/9", json!({"title": "x"})).await,
            app.delete("/api/tasks/9").await,
        ] {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({"detail": "Task not found"}));
        }
    }

    #[tokio::test]
    async fn delete_then_get_is_404() {
        let app = TestApp::new();
        app.post("/api/tasks", json!({"title": "gone"})).await;
        let (status, body) = app.delete("/api/tasks/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"changes": 1}));
        assert_eq!(app.get("/api/tasks/1").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn id_reuses_max_of_remaining() {
        let app = TestApp::new();
        app.post("/api/tasks", json!({"title": "A"})).await;
        app.post("/api/tasks", json!({"title": "B"})).await;
        app.delete("/api/tasks/2").await;
        let (_, body) = app.post("/api/tasks", json!({"title": "C"})).await;
        assert_eq!(body["lastInsertRowid"], 2);
    }

    #[tokio::test]
    async fn missing_title_is_rejected() {
        let app = TestApp::new();
        let (status, _) = app.post_raw("/api/tasks", r#"{"description":"no title"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(app.get("/api/tasks").await.1.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let app = TestApp::new();
        let (status, _) = app.get_raw("/api/tasks/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
