mod api;
mod config;
mod storage;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::storage::Database;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the log level can come from it
    let config = AppConfig::load()?;

    // Initialize logging, RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting TechTrends");
    info!("📋 Configuration loaded");
    let db = Database::new(&config.storage.database_path);
    info!("   - Database: {}", db.path().display());
    info!("   - Server: {}", config.bind_addr());

    if config.storage.init_schema {
        info!("💾 Ensuring posts schema...");
        db.init_schema().await?;
    }

    if let storage::Health::Unhealthy(reason) = storage::checks::check_health(&db).await {
        warn!("⚠️  Posts table not reachable yet: {}", reason);
    }

    let app = api::router(AppState::new(db)).layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("📡 Available endpoints:");
    info!("   GET  /           - List posts");
    info!("   GET  /{{id}}       - Show post");
    info!("   GET  /about      - About page");
    info!("   GET  /create     - New post form");
    info!("   POST /create     - Create post");
    info!("   GET  /healthz    - Health check");
    info!("   GET  /metrics    - Post metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
