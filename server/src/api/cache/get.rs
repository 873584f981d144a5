use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{MethodRouter, get},
};
use axum_macros::debug_handler;
use cache::{Cache, Entry};

use crate::{AppState, error::json_error_response};

pub const PATH: &str = "/cache/{key}";

pub fn method_router() -> MethodRouter<AppState> {
    get(handler)
}

pub type ResponseBody = Entry<String, String>;

#[debug_handler]
#[tracing::instrument(fields(%key), skip_all, ret)]
pub async fn handler(
    State(AppState { cache }): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ResponseBody>, GetError> {
    match cache.get(&key) {
        Some(entry) => Ok(Json(entry)),
        None => Err(GetError::KeyNotFound(key)),
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GetError {
    #[error("key '{0}' not found")]
    KeyNotFound(String),
}

impl IntoResponse for GetError {
    fn into_response(self) -> axum::response::Response {
        match self {
            GetError::KeyNotFound(_) => {
                tracing::info!("{:?}", self);
                (StatusCode::NOT_FOUND, Json(json_error_response(self))).into_response()
            }
        }
    }
}
