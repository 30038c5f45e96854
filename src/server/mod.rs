//! HTTP server
//!
//! Every page request opens its own navigation session, waits for the page
//! to settle and returns the rendered document. Local content is also
//! served as-is under `/content`.

use anyhow::Result;
use axum::{
    extract::{RawQuery, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::helpers::{query_param, strip_root, url_for};
use crate::navigation::Session;
use crate::Site;

/// Server state
struct ServerState {
    site: Arc<Site>,
    shutdown: CancellationToken,
}

/// Build the application router
pub fn router(site: Arc<Site>, shutdown: CancellationToken) -> Router {
    let content = site.store.local_root().map(ServeDir::new);
    let content_path = url_for(site.config(), "/content");

    let mut app = Router::new();
    if let Some(dir) = content {
        app = app.nest_service(&content_path, dir);
    }

    app.fallback(page_handler)
        .with_state(Arc::new(ServerState { site, shutdown }))
        .layer(TraceLayer::new_for_http())
}

/// Serve on `listener` until `shutdown` is cancelled
pub async fn serve(listener: TcpListener, site: Arc<Site>, shutdown: CancellationToken) -> Result<()> {
    let app = router(site, shutdown.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;
    Ok(())
}

/// Bind `ip:port` and serve until `shutdown` is cancelled
pub async fn start(site: Arc<Site>, ip: &str, port: u16, shutdown: CancellationToken) -> Result<()> {
    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let listener = TcpListener::bind(addr).await?;
    let url = format!("http://{}:{}{}", ip, port, url_for(site.config(), "/"));
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    serve(listener, site, shutdown).await?;
    tracing::info!("Server stopped");
    Ok(())
}

/// Render the page for any path; unmatched paths get the empty shell with 404
async fn page_handler(
    State(state): State<Arc<ServerState>>,
    RawQuery(query): RawQuery,
    uri: Uri,
) -> Response {
    let path = strip_root(state.site.config(), uri.path());

    let mut session = Session::with_parent(Arc::clone(&state.site), state.shutdown.clone());
    session.navigate(path);
    if let Some(term) = query.as_deref().and_then(|q| query_param(q, "q")) {
        session.search(&term);
    }

    let view = session.settled().await;
    let status = if view.page.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    (status, Html(session.render())).into_response()
}
