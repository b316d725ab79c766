//! spsa.church site server
//!
//! Serves server-rendered pages and the content API in front of the GraphQL backend.

#[cfg(feature = "server")]
use spsa_site::{api, config, content};

#[cfg(feature = "server")]
use anyhow::Result;
#[cfg(feature = "server")]
use std::net::SocketAddr;
#[cfg(feature = "server")]
use std::sync::Arc;
#[cfg(feature = "server")]
use tokio::signal;
#[cfg(feature = "server")]
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
#[cfg(feature = "server")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spsa_site=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting spsa.church site v{} ({})",
        env!("SITE_VERSION"),
        env!("SITE_GIT_SHA")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!("Configuration loaded, port: {}", config.port);

    // Content backend behind the cache
    let endpoint = config.graphql_endpoint()?;
    tracing::info!("Content backend: {}", endpoint);
    let graphql = content::GraphQlContent::new(content::GraphQlClient::new(endpoint)?);
    let content = Arc::new(content::CachedContent::new(graphql, config.cache_ttl()));
    tracing::info!("Content cache initialized, ttl: {:?}", content.ttl());

    let state = api::AppState::new(content, (&config).into(), config.default_viewport_px);

    let app = api::router(state)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

/// Browser build: mount the routed app
#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(spsa_site::app::App);
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(feature = "server")]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
