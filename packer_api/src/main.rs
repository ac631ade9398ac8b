mod app;
mod calculator;
mod closer;
mod config;
mod docs;
mod error;
mod history;
mod index;
mod pagination;
mod routes;
mod state;

use std::{fs::File, io::Write, sync::Arc};

use anyhow::Context;
use axum::serve;
use packer_history::{FileHistoryStore, HistoryStore, MemoryHistoryStore};
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{Level, error, info};

use crate::{
    closer::{Closer, shutdown_signal},
    config::AppConfig,
    state::AppState,
};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let config = AppConfig::from_env()?;

    let history: Arc<dyn HistoryStore> = match &config.history_path {
        Some(path) => Arc::new(FileHistoryStore::open(path)?),
        None => {
            info!("PACKER_HISTORY_PATH not set, keeping history in memory");
            Arc::new(MemoryHistoryStore::new())
        }
    };

    let state = Arc::new(AppState {
        history: Arc::clone(&history),
        max_amount: config.max_amount,
    });

    let (app, api) = app::router(state);

    if std::env::args().any(|a| a == "--generate-openapi") {
        std::fs::create_dir_all("schemas")?;
        let mut file =
            File::create("schemas/openapi.json").context("failed to create schemas/openapi.json")?;
        let spec = serde_json::to_string_pretty(&*api)?;
        file.write_all(spec.as_bytes())?;
        info!("OpenAPI specification has been written to openapi.json");
        return Ok(());
    }

    let closer = Closer::new();

    let listener = TcpListener::bind(config.http_address())
        .await
        .with_context(|| format!("failed to bind {}:{}", config.http_host, config.http_port))?;
    info!("HTTP server is running on {}", listener.local_addr()?);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let (stopped_tx, stopped_rx) = oneshot::channel::<std::io::Result<()>>();

    tokio::spawn(async move {
        let result = serve(listener, app)
            .with_graceful_shutdown(async move {
                stop_rx.await.ok();
            })
            .await;

        if let Err(error) = &result {
            error!(%error, "HTTP server failed");
        }
        stopped_tx.send(result).ok();
    });

    closer.add(move || async move {
        stop_tx.send(()).ok();
        stopped_rx.await??;
        info!("HTTP server stopped");
        Ok(())
    });

    closer.add(move || async move {
        tokio::task::spawn_blocking(move || history.flush()).await??;
        Ok(())
    });

    shutdown_signal().await;
    closer.close_all(config.shutdown_timeout).await;

    info!("application exited");

    Ok(())
}
