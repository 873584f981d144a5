use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{MethodRouter, post},
};
use axum_macros::debug_handler;
use cache::{Cache, Tags};
use serde::Deserialize;

use crate::{AppState, error::json_error_response};

pub const PATH: &str = "/cache";

pub fn method_router() -> MethodRouter<AppState> {
    post(handler)
}

#[derive(Debug, Deserialize)]
pub struct RequestBody {
    pub key: String,
    pub value: String,
    pub tags: Tags,
}

#[debug_handler]
#[tracing::instrument(skip_all, ret)]
pub async fn handler(
    State(AppState { cache }): State<AppState>,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<(StatusCode, &'static str), PutError> {
    let Json(RequestBody { key, value, tags }) = body?;

    tracing::info!(%key, ?tags, value_len = value.len());
    cache.put(key, value, tags);

    Ok((StatusCode::OK, "Data stored successfully"))
}

#[derive(thiserror::Error, Debug)]
pub enum PutError {
    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for PutError {
    fn into_response(self) -> axum::response::Response {
        match self {
            PutError::InvalidBody(_) => {
                tracing::info!("{:?}", self);
                (StatusCode::BAD_REQUEST, Json(json_error_response(self))).into_response()
            }
        }
    }
}
