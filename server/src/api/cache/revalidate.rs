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

pub const PATH: &str = "/cache/revalidate";

pub fn method_router() -> MethodRouter<AppState> {
    post(handler)
}

#[derive(Debug, Deserialize)]
pub struct RequestBody {
    pub tags: Tags,
}

#[debug_handler]
#[tracing::instrument(skip_all, ret)]
pub async fn handler(
    State(AppState { cache }): State<AppState>,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<(StatusCode, &'static str), RevalidateError> {
    let Json(RequestBody { tags }) = body?;

    let removed = cache.invalidate(&tags);
    tracing::info!(?tags, removed, "cache revalidated");

    Ok((StatusCode::OK, "Cache cleared successfully"))
}

#[derive(thiserror::Error, Debug)]
pub enum RevalidateError {
    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for RevalidateError {
    fn into_response(self) -> axum::response::Response {
        match self {
            RevalidateError::InvalidBody(_) => {
                tracing::info!("{:?}", self);
                (StatusCode::BAD_REQUEST, Json(json_error_response(self))).into_response()
            }
        }
    }
}
