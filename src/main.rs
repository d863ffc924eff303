use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use contact_backend::config::Config;
use contact_backend::error::StartupError;
use contact_backend::store;

#[tokio::main]
async fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    if let Err(e) = run(config).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    tracing::info!("Starting contact backend");

    // No requests are accepted unless the store answers now
    let store = store::connect(&config.store_url, &config.collection).await?;
    tracing::info!(backend = store.backend(), "Document store connected");

    let addr = SocketAddr::new(config.host, config.port);
    let app = contact_backend::build_app(store, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
