//! Debounced, request-coalescing autosave.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;

/// The persistence callback wrapped by [`AutoSaveManager`].
pub type SaveFn = Arc<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

/// Coalesces save requests into a debounced stream of saves.
///
/// Any number of mutation sites may call [`Self::request_save`]; requests
/// collapse into a single pending signal (the latest is never lost), and the
/// worker enforces a minimum spacing of one debounce interval between saves.
/// After the last edit the data is never more than one interval stale.
///
/// A save callback failure is fatal to the worker: the error is logged and
/// the worker exits. Call [`Self::start`] again to restart it. One manager
/// per loaded profile, at most one live at a time.
pub struct AutoSaveManager {
    save: SaveFn,
    debounce: Duration,
    requests: Arc<Notify>,
    shutdown: watch::Sender<bool>,
    worker: Option<JoinHandle<()>>,
}

impl AutoSaveManager {
    #[must_use]
    pub fn new(debounce: Duration, save: SaveFn) -> Self {
        Self {
            save,
            debounce,
            requests: Arc::new(Notify::new()),
            shutdown: watch::channel(false).0,
            worker: None,
        }
    }

    /// Begin the background worker. Does nothing if it is already running.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        self.shutdown = shutdown_tx;

        let save = Arc::clone(&self.save);
        let requests = Arc::clone(&self.requests);
        let debounce = self.debounce;
        self.worker = Some(tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    () = requests.notified() => {
                        if let Err(error) = save() {
                            tracing::error!(%error, "autosave failed; worker stopping");
                            break;
                        }
                        // Cool down before accepting the next request. A
                        // request arriving during the sleep stays pending and
                        // produces exactly one more save.
                        tokio::select! {
                            _ = shutdown_rx.changed() => break,
                            () = tokio::time::sleep(debounce) => {}
                        }
                    }
                }
            }
        }));
    }

    /// Signal that a save is wanted. Never blocks; rapid calls collapse into
    /// at most one pending request.
    pub fn request_save(&self) {
        self.requests.notify_one();
    }

    /// A handle that store update callbacks can hold to request saves
    /// without owning the manager.
    #[must_use]
    pub fn request_handle(&self) -> Arc<Notify> {
        Arc::clone(&self.requests)
    }

    /// Run the save callback right now, bypassing the debounce. Used before
    /// risky transitions (profile switch, process exit).
    ///
    /// # Errors
    ///
    /// Propagates the save callback's failure.
    pub fn force_save(&self) -> anyhow::Result<()> {
        (self.save)()
    }

    /// Stop the worker and wait for any in-flight save to finish. No save is
    /// left running after this returns.
    pub async fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let _ = self.shutdown.send(true);
        if let Err(error) = worker.await {
            tracing::warn!(%error, "autosave worker ended abnormally");
        }
    }
}
