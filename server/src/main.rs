// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use anyhow::Context;
use axum::http::HeaderName;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use server::{routes, store};

// Defaults match the original backend: all interfaces, port 3000.
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting up the server...");

    // The whole task list lives in this one handle; it is created here
    // and handed to the router, never reachable as a global.
    let task_store = store::new_shared();

    let app_routes = routes::create_router(task_store);

    // Configure CORS here, applying it globally to the router. The
    // mobile client runs from a different origin during development.
    let cors = CorsLayer::new()
        .allow_methods(Any) // Allow all HTTP methods
        // Explicit list of headers the frontend may send. No token auth,
        // so 'authorization' is not needed.
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
        ])
        .allow_origin(Any); // Allow all origins

    let app = app_routes.layer(cors); // Apply the CORS layer

    let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid HOST/PORT configuration")?;

    tracing::info!("The server listens on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listen address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
