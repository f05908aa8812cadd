use std::future::Future;

use configs::AppConfig;
use service::students::StudentStore;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::AppState};

/// Build the app from config and serve it until `shutdown` resolves.
pub async fn serve<F>(cfg: &AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = StudentStore::from_config(&cfg.store);
    info!(id_policy = ?store.policy(), seeded = cfg.store.seed, "student store ready");
    let app = routes::app(AppState::new(store));

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(addr = %listener.local_addr()?, "starting student registry");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: serve with the given config until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    serve(&cfg, shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl+C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
