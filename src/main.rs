//! Static host for the MINDORA.ART site.
//!
//! Serves the built client (`SITE_DIR`) with SPA fallback and security
//! headers. Configuration comes from the environment, optionally seeded from
//! a `.env` file.

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    if !config.site_dir.join("index.html").is_file() {
        tracing::warn!(site_dir = %config.site_dir.display(), "index.html not found; SPA fallback will 404");
    }

    let app = routes::app(&config.site_dir);
    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.socket_addr(), site_dir = %config.site_dir.display(), "mindora listening");
    axum::serve(listener, app).await.expect("server failed");
}
