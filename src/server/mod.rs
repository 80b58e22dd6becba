use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::data::Catalogs;

pub mod api;
pub mod pages;
pub mod query;
pub mod routes;

/// Block on a tokio runtime serving the wiki on `bind_addr`.
pub fn run_server(bind_addr: &str, catalogs: Arc<Catalogs>) -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(bind_addr, catalogs))
}

pub async fn serve(bind_addr: &str, catalogs: Arc<Catalogs>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        records = catalogs.total_records(),
        "tjwiki server listening"
    );
    axum::serve(listener, app(catalogs)).await
}

/// Every request goes through [routes::route_request]; axum only supplies transport and tracing.
pub fn app(catalogs: Arc<Catalogs>) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(catalogs)
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(
    State(catalogs): State<Arc<Catalogs>>,
    method: Method,
    uri: Uri,
) -> routes::HttpResponse {
    let target = uri.path_and_query().map_or("/", |pq| pq.as_str());
    routes::route_request(&catalogs, method.as_str(), target)
}
