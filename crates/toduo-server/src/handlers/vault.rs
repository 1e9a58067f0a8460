//! Markdown note files in the vault directory.

use std::path::{Path, PathBuf};

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveNote {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNote {
    pub file_path: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultResult {
    pub file_path: String,
}

impl From<PathBuf> for VaultResult {
    fn from(path: PathBuf) -> Self {
        Self {
            file_path: path.to_string_lossy().into_owned(),
        }
    }
}

/// POST /api/vault/save
pub async fn save(State(state): State<AppState>, Json(body): Json<SaveNote>) -> Result<Json<VaultResult>, ApiError> {
    let vault = state.vault.clone();
    let path = tokio::task::spawn_blocking(move || vault.save_new(&body.title, &body.content)).await??;
    Ok(Json(path.into()))
}

/// PUT /api/vault/update
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<UpdateNote>,
) -> Result<Json<VaultResult>, ApiError> {
    let vault = state.vault.clone();
    let path = tokio::task::spawn_blocking(move || {
        vault.update(Path::new(&body.file_path), &body.title, &body.content)
    })
    .await??;
    Ok(Json(path.into()))
}
