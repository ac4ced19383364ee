//! HTTP API server for saygate
//!
//! Exposes `GET /say` and the interactive API documentation at `/api-docs`.

mod docs;
mod routes;
mod types;


pub use docs::api_doc;
pub use routes::{Gateway, create_router};

use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3004;

/// Wrap the router with CORS and tracing middleware
pub fn build_app(gateway: Gateway, port: u16, cors_origin: Option<String>) -> Result<Router> {
    let cors = if let Some(origin) = cors_origin {
        CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", origin))?,
            )
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        warn!("No CORS origin specified, allowing all origins. Set --cors-origin in production.");
        CorsLayer::very_permissive()
    };

    Ok(create_router(Arc::new(gateway), api_doc(port))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Start the HTTP API server
pub async fn serve_http(gateway: Gateway, port: u16, cors_origin: Option<String>) -> Result<()> {
    let app = build_app(gateway, port, cors_origin)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening at http://localhost:{}", port);
    info!("API documentation at http://localhost:{}/api-docs", port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
