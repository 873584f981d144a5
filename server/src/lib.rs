mod api;
mod error;
mod middleware;
mod span;

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{Router, middleware::from_fn};
use cache::TaggedCache;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use api::cache::get::ResponseBody as EntryResponse;

/// The process-wide store shared by every request.
pub type SharedCache = Arc<TaggedCache<String, String>>;

#[derive(Debug, Clone)]
pub struct ServerOpts {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Clone)]
pub struct AppState {
    pub cache: SharedCache,
}

pub fn server(cache: SharedCache) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(span::span))
        .layer(from_fn(middleware::latency_ms))
        .layer(from_fn(middleware::handle_leaked_5xx));

    Router::new()
        .route(api::health::PATH, api::health::method_router())
        .route(api::cache::put::PATH, api::cache::put::method_router())
        .route(
            api::cache::revalidate::PATH,
            api::cache::revalidate::method_router(),
        )
        .route(api::cache::get::PATH, api::cache::get::method_router())
        .with_state(AppState { cache })
        .layer(middleware)
}

pub async fn serve(opts: ServerOpts) -> Result<(), ServerError> {
    tracing::info!("{:?}", opts);

    let app = server(Arc::new(TaggedCache::new()))
        .into_make_service_with_connect_info::<SocketAddr>();

    let addr = SocketAddr::from((opts.host, opts.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(
        "listening on {}",
        listener.local_addr().map_err(ServerError::LocalAddr)?
    );

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("bind :: {addr} :: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("local_addr :: {0}")]
    LocalAddr(std::io::Error),

    #[error("axum::serve :: {0}")]
    Serve(std::io::Error),
}
