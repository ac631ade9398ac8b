use std::{
    future::Future,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use futures::{FutureExt, future::BoxFuture};
use parking_lot::Mutex;
use tokio::{sync::watch, task::JoinSet};
use tracing::{debug, error, info, warn};

type ShutdownHook = Box<dyn FnOnce() -> BoxFuture<'static, anyhow::Result<()>> + Send>;

/// Shutdown hooks run concurrently once, under a shared deadline.
pub struct Closer {
    hooks: Mutex<Vec<ShutdownHook>>,
    started: AtomicBool,
    done: watch::Sender<bool>,
}

impl Default for Closer {
    fn default() -> Self {
        Self::new()
    }
}

impl Closer {
    pub fn new() -> Self {
        Closer {
            hooks: Mutex::new(Vec::new()),
            started: AtomicBool::new(false),
            done: watch::Sender::new(false),
        }
    }

    pub fn add<F, Fut>(&self, hook: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        debug!("registering shutdown hook");
        self.hooks.lock().push(Box::new(move || hook().boxed()));
    }

    /// Runs every registered hook. Later calls wait for the first one to finish.
    pub async fn close_all(&self, timeout: Duration) {
        if self.started.swap(true, Ordering::SeqCst) {
            self.wait().await;
            return;
        }

        let hooks = std::mem::take(&mut *self.hooks.lock());
        info!(hooks = hooks.len(), ?timeout, "graceful shutdown started");

        let mut tasks = JoinSet::new();
        for hook in hooks {
            tasks.spawn(hook());
        }

        let drain = async {
            while let Some(result) = tasks.join_next().await {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(error)) => error!(error = %error, "shutdown hook failed"),
                    Err(error) => error!(error = %error, "shutdown hook panicked"),
                }
            }
        };
        let finished = tokio::time::timeout(timeout, drain).await.is_ok();

        if finished {
            info!("graceful shutdown finished");
        } else {
            warn!(remaining = tasks.len(), "graceful shutdown timed out");
            tasks.abort_all();
        }

        self.done.send_replace(true);
    }

    pub async fn wait(&self) {
        let mut done = self.done.subscribe();
        let _ = done.wait_for(|done| *done).await;
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c"),
        _ = terminate => info!("received SIGTERM"),
    }
}
