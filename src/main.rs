use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use words_helper::ai::CompletionClient;
use words_helper::api::{AppState, build_router};
use words_helper::core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env for local development; real deployments set the vars.
    dotenvy::dotenv().ok();
    words_helper::setup_logging();

    let config = AppConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("loading configuration")?;

    let state = Arc::new(AppState {
        client: CompletionClient::new(&config),
    });
    let router = build_router(state, &config.public_dir);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("binding port {}", config.port))?;
    info!(port = config.port, model = %config.model, "Words Helper listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;
    info!("HTTP server exited");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
