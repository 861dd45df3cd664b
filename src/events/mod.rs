//! Keyboard dispatch for the sidebar.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::ToggleRequest;
use crate::logic;
use crate::state::AppState;
use crate::util::open_url;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    refresh_tx: &mpsc::UnboundedSender<String>,
    toggle_tx: &mpsc::UnboundedSender<ToggleRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Entry actions only exist while the list view is showing; during the
    // error view the stale list is hidden and must stay untouchable.
    let list_visible =
        logic::panel_view(&app.installs, &app.server_error) == logic::PanelView::List;

    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if ke.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Up | KeyCode::Char('k') if list_visible => move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') if list_visible => move_selection(app, 1),
        KeyCode::Char('r') => {
            let _ = refresh_tx.send(app.user_id.clone());
        }
        KeyCode::Enter | KeyCode::Char(' ') if list_visible => toggle_selected(app, toggle_tx),
        KeyCode::Char('o') if list_visible => {
            if let Some(install) = app.selected_install() {
                open_url(&logic::view_installation_url(install));
            }
        }
        KeyCode::Char('i') if list_visible => {
            if let Some(install) = app.selected_install() {
                open_url(&install.installation_logs_url);
            }
        }
        KeyCode::Char('p') if list_visible => {
            if let Some(install) = app.selected_install() {
                open_url(&install.provisioner_logs_url);
            }
        }
        _ => {}
    }
    false
}

/// Move the list selection up or down, clamped to the list bounds.
fn move_selection(app: &mut AppState, delta: i64) {
    if app.installs.is_empty() {
        return;
    }
    let len = app.installs.len() as i64;
    let next = (app.selected as i64 + delta).clamp(0, len - 1);
    app.selected = usize::try_from(next).unwrap_or(0);
    app.list_state.select(Some(app.selected));
}

/// Request a lock or unlock for the highlighted installation.
///
/// An unlocked installation at the lock limit is inert: the control renders
/// disabled and the key press does nothing. The request itself is handed to
/// the toggle worker; the list only changes when the follow-up refresh lands.
fn toggle_selected(app: &mut AppState, toggle_tx: &mpsc::UnboundedSender<ToggleRequest>) {
    let Some(install) = app.selected_install() else {
        return;
    };
    let lock = !install.deletion_locked;
    if lock && !logic::lock_enabled(&app.installs, app.max_locked_installations) {
        tracing::debug!(installation = %install.id, "lock request ignored, limit reached");
        return;
    }
    let id = install.id.clone();
    tracing::info!(installation = %id, lock, "deletion lock toggle requested");
    app.deletion_locked_installation_id = Some(id.clone());
    let _ = toggle_tx.send(ToggleRequest {
        installation_id: id,
        user_id: app.user_id.clone(),
        lock,
    });
}
