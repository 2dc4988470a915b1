// axum application setup and server startup

use std::net::SocketAddr;
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use super::{
    handlers::{
        invoke::handle_invoke,
        status::{handle_health, handle_not_found},
    },
    middleware::add_security_headers,
};

/// create the axum application with all routes and middleware
pub fn create_app(config: &AppConfig) -> Router {
    Router::new()
        // edge function invocation
        .route("/invoke", post(handle_invoke))
        .route("/health", get(handle_health))
        .fallback(handle_not_found)

        .layer(DefaultBodyLimit::max(config.server.max_event_bytes))

        // middleware stack
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(add_security_headers))
        )
}

/// start the http server
pub async fn start_server(config: AppConfig) -> Result<()> {
    let app = create_app(&config);

    // create socket address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid host/port combination")?;

    info!("starting edgeguard v{} at http://{}",
          env!("CARGO_PKG_VERSION"), addr);
    info!("accepting events up to {} bytes on /invoke", config.server.max_event_bytes);

    let listener = tokio::net::TcpListener::bind(&addr).await
        .context("failed to bind to address")?;

    info!("server listening on {}", addr);

    axum::serve(listener, app).await
        .context("server error")?;

    Ok(())
}
