use axum::extract::{Path, State};
use axum::Json;
use toduo_core::{NewTag, Tag, TagId};

use super::{Changes, Inserted};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Tag>> {
    Json(state.tags().list())
}

pub async fn create(State(state): State<AppState>, Json(body): Json<NewTag>) -> Json<Inserted> {
    Json(Inserted::new(state.tags().create(body)))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<TagId>) -> Result<Json<Tag>, ApiError> {
    Ok(Json(state.tags().get(id)?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<TagId>) -> Result<Json<Changes>, ApiError> {
    Ok(Json(state.tags().delete(id)?.into()))
}
