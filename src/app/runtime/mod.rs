//! The runtime: terminal lifecycle, channels, workers, and the select! loop.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::api::{CloudApi, CloudClient};
use crate::config::Settings;
use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

pub mod background;
mod handlers;

use background::{Channels, spawn_event_thread};
use handlers::{handle_config_result, handle_installs_result};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the sidebar end-to-end: initialize the terminal and state,
/// spawn background workers, drive the event loop, and restore the terminal
/// on exit.
///
/// Inputs:
/// - `settings`: Validated client settings (server URL, user id, token).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or
///   runtime errors.
///
/// Details:
/// - Lifecycle: the panel is marked visible on startup, which triggers the
///   initial installation fetch and the plugin configuration fetch; it is
///   marked not visible on teardown.
/// - Event loop: renders one frame per iteration and dispatches keyboard
///   events, fetch outcomes, and the configuration result.
/// - Toggles run on their own tasks; their follow-up refreshes arrive here
///   as ordinary fetch outcomes, in whatever order they complete.
pub async fn run(settings: &Settings) -> Result<()> {
    let headless = std::env::var("CLOUDSIDE_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState {
        user_id: settings.user_id.clone(),
        ..Default::default()
    };

    let api: Arc<dyn CloudApi> = Arc::new(CloudClient::new(settings));
    let mut channels = Channels::new(api);

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    // Panel activation: visible, then the two initial fetches. The
    // configuration fetch was already queued by Channels::new.
    app.panel_visible = true;
    tracing::info!(user = %app.user_id, "panel visible");
    let _ = channels.refresh_req_tx.send(app.user_id.clone());

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(
                    ev,
                    &mut app,
                    &channels.refresh_req_tx,
                    &channels.toggle_req_tx,
                ) {
                    break;
                }
            }
            Some(outcome) = channels.installs_rx.recv() => {
                handle_installs_result(&mut app, outcome);
            }
            Some(max) = channels.config_rx.recv() => {
                handle_config_result(&mut app, max);
            }
            else => break,
        }
    }

    // Panel deactivation. In-flight toggles run to completion; their sends
    // land on closed channels and no-op.
    app.panel_visible = false;
    tracing::info!("panel hidden");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
