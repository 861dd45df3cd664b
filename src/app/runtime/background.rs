//! Channels and background workers for the runtime.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::api::CloudApi;
use crate::state::Installation;

/// One lock/unlock request handed from the event layer to the toggle worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    /// Installation to toggle.
    pub installation_id: String,
    /// User whose list is refreshed after the toggle completes.
    pub user_id: String,
    /// `true` to lock deletion, `false` to unlock.
    pub lock: bool,
}

/// Outcome of one installation fetch: the fresh list, or the error message
/// that preempts list rendering.
pub type FetchOutcome = Result<Vec<Installation>, String>;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop and background workers.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving end of the terminal event channel.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Cooperative stop flag for the event reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests an installation list fetch for a user id.
    pub refresh_req_tx: mpsc::UnboundedSender<String>,
    /// Fetch outcomes from the refresh worker.
    pub installs_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    /// One-shot lock allowance from the configuration fetch.
    pub config_rx: mpsc::UnboundedReceiver<Option<u32>>,
    /// Requests a deletion-lock toggle.
    pub toggle_req_tx: mpsc::UnboundedSender<ToggleRequest>,
}

impl Channels {
    /// What: Create all channels and spawn the background workers.
    ///
    /// Inputs:
    /// - `api`: Shared plugin server client handed to every worker.
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized.
    #[must_use]
    pub fn new(api: Arc<dyn CloudApi>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (refresh_req_tx, refresh_req_rx) = mpsc::unbounded_channel::<String>();
        let (installs_tx, installs_rx) = mpsc::unbounded_channel::<FetchOutcome>();
        let (config_tx, config_rx) = mpsc::unbounded_channel::<Option<u32>>();
        let (toggle_req_tx, toggle_req_rx) = mpsc::unbounded_channel::<ToggleRequest>();

        spawn_refresh_worker(api.clone(), refresh_req_rx, installs_tx);
        spawn_toggle_worker(api.clone(), toggle_req_rx, refresh_req_tx.clone());
        spawn_config_fetch(api, config_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            refresh_req_tx,
            installs_rx,
            config_rx,
            toggle_req_tx,
        }
    }
}

/// What: Spawn the blocking thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is spawned (test mode).
/// - `tx`: Channel the thread forwards events on.
/// - `cancelled`: Flag checked between polls to stop the thread.
pub fn spawn_event_thread(
    headless: bool,
    tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            if crossterm::event::poll(Duration::from_millis(100)).unwrap_or(false) {
                match crossterm::event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        }
    });
}

/// Spawn the worker that serves installation list fetches.
///
/// Every request is answered, success or failure; the loop ends when either
/// channel closes.
fn spawn_refresh_worker(
    api: Arc<dyn CloudApi>,
    mut req_rx: mpsc::UnboundedReceiver<String>,
    res_tx: mpsc::UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        while let Some(user_id) = req_rx.recv().await {
            let outcome = match api.installs_for_user(&user_id).await {
                Ok(list) => Ok(list),
                Err(e) => {
                    tracing::warn!(error = %e, "installation fetch failed");
                    Err(e.to_string())
                }
            };
            if res_tx.send(outcome).is_err() {
                break;
            }
        }
    });
}

/// Spawn the worker that runs deletion-lock toggles.
///
/// Each request gets its own task so two toggles on different installations
/// can overlap; their follow-up refreshes may interleave in either order.
fn spawn_toggle_worker(
    api: Arc<dyn CloudApi>,
    mut req_rx: mpsc::UnboundedReceiver<ToggleRequest>,
    refresh_tx: mpsc::UnboundedSender<String>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            tokio::spawn(perform_toggle(api.clone(), req, refresh_tx.clone()));
        }
    });
}

/// What: Run one lock/unlock request to completion, then queue a refresh.
///
/// Inputs:
/// - `api`: Plugin server client.
/// - `req`: The toggle to perform.
/// - `refresh_tx`: Channel the follow-up list refresh is requested on.
///
/// Details:
/// - The toggle call is awaited but its outcome is not inspected beyond a
///   debug log line; the refresh is issued regardless, and a failed toggle
///   becomes visible only through the refreshed state.
/// - No cancellation: a toggle started before shutdown runs to completion,
///   and its refresh send no-ops on the closed channel.
pub async fn perform_toggle(
    api: Arc<dyn CloudApi>,
    req: ToggleRequest,
    refresh_tx: mpsc::UnboundedSender<String>,
) {
    let result = if req.lock {
        api.deletion_lock(&req.installation_id).await
    } else {
        api.deletion_unlock(&req.installation_id).await
    };
    if let Err(e) = result {
        tracing::debug!(
            installation = %req.installation_id,
            lock = req.lock,
            error = %e,
            "toggle request failed"
        );
    }
    let _ = refresh_tx.send(req.user_id);
}

/// Spawn the one-shot plugin configuration fetch.
///
/// A failed fetch leaves the allowance at `None`, which never disables the
/// lock control.
fn spawn_config_fetch(api: Arc<dyn CloudApi>, res_tx: mpsc::UnboundedSender<Option<u32>>) {
    tokio::spawn(async move {
        let max = match api.plugin_configuration().await {
            Ok(cfg) => cfg.max_locked_installations(),
            Err(e) => {
                tracing::debug!(error = %e, "plugin configuration fetch failed");
                None
            }
        };
        let _ = res_tx.send(max);
    });
}
