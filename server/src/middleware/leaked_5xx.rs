use axum::{
    body::{Body, to_bytes},
    http::{Request, Response},
    middleware::Next,
    response::IntoResponse,
};

/// Handlers never put internal details in a 5xx body, but if one slips through
/// it is logged here and the client only gets the bare status.
pub async fn handle_leaked_5xx(request: Request<Body>, next: Next) -> Response<Body> {
    let response = next.run(request).await;
    let status = response.status();

    if !status.is_server_error() {
        return response;
    }

    match to_bytes(response.into_body(), usize::MAX).await {
        Ok(content) if !content.is_empty() => tracing::error!("leaked {} :: {:?}", status, content),
        Err(e) => tracing::error!("unable to read {} response body :: {:?}", status, e),
        _ => {}
    }

    status.into_response()
}
