//! Central `AppState` container shared by the event, networking, and UI layers.

use ratatui::widgets::ListState;

use crate::state::types::Installation;

/// Global application state mutated by the event loop in response to input
/// and background fetch results.
///
/// The installation list is the single shared resource: the renderer reads
/// it and the lock controller recomputes its locked count from it on every
/// decision. There is no memoized copy; each refresh replaces it wholesale.
#[derive(Debug)]
pub struct AppState {
    /// Identity of the user whose installations are shown.
    pub user_id: String,
    /// Latest fetched installation list, in server order.
    pub installs: Vec<Installation>,
    /// Non-empty when the last fetch failed; preempts all list rendering.
    pub server_error: String,
    /// Lock allowance from the plugin configuration; `None` when unset or
    /// non-numeric (lock button then never disables).
    pub max_locked_installations: Option<u32>,
    /// Most recently toggled installation id, used only to re-pin the list
    /// selection after a refresh lands.
    pub deletion_locked_installation_id: Option<String>,
    /// Index into `installs` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the installation list widget.
    pub list_state: ListState,
    /// Whether the sidebar panel is currently active. Set on startup,
    /// cleared on teardown.
    pub panel_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            installs: Vec::new(),
            server_error: String::new(),
            max_locked_installations: None,
            deletion_locked_installation_id: None,
            selected: 0,
            list_state: ListState::default(),
            panel_visible: false,
        }
    }
}

impl AppState {
    /// Currently highlighted installation, if any.
    #[must_use]
    pub fn selected_install(&self) -> Option<&Installation> {
        self.installs.get(self.selected)
    }

    /// Replace the installation list with a freshly fetched one.
    ///
    /// Clears any previous server error, then restores the selection: the
    /// most recently toggled installation wins when it is still present,
    /// otherwise the old index is clamped into the new bounds. The pin is
    /// consumed here so it only steers the one refresh that follows its
    /// toggle, not later manual refreshes.
    pub fn apply_installs(&mut self, installs: Vec<Installation>) {
        self.installs = installs;
        self.server_error.clear();
        let pinned = self
            .deletion_locked_installation_id
            .take()
            .and_then(|id| self.installs.iter().position(|i| i.id == id));
        if let Some(idx) = pinned {
            self.selected = idx;
        } else {
            self.selected = self.selected.min(self.installs.len().saturating_sub(1));
        }
        let sel = if self.installs.is_empty() {
            None
        } else {
            Some(self.selected)
        };
        self.list_state.select(sel);
    }
}
