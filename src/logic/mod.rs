//! Pure panel derivations shared by the renderer and the event layer.
//!
//! Everything here recomputes from the latest installation list; nothing is
//! cached between decisions.

use crate::state::Installation;

/// Literal shown when an installation has no DNS records.
pub const NO_URL_PLACEHOLDER: &str = "No URL!";

/// Which of the three mutually exclusive panel views to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView {
    /// A non-empty server error preempts everything else.
    Error,
    /// No error and zero installations.
    Empty,
    /// One entry per installation, in input order.
    List,
}

/// Pick the panel view for the given list and error string.
#[must_use]
pub fn panel_view(installs: &[Installation], server_error: &str) -> PanelView {
    if !server_error.is_empty() {
        PanelView::Error
    } else if installs.is_empty() {
        PanelView::Empty
    } else {
        PanelView::List
    }
}

/// Whether the status badge uses the primary style.
///
/// Two-valued: `stable` is primary, anything else is danger.
#[must_use]
pub fn badge_is_primary(state: &str) -> bool {
    state == "stable"
}

/// DNS field text: the first record's domain, or the "No URL!" placeholder.
///
/// Only the first record is ever consulted, matching the original panel.
#[must_use]
pub fn dns_display(install: &Installation) -> &str {
    install
        .dns_records
        .first()
        .map_or(NO_URL_PLACEHOLDER, |r| r.domain_name.as_str())
}

/// Version/Tag display: label and value, mutually exclusive.
///
/// Shows `Tag` when non-empty, otherwise `Version`.
#[must_use]
pub fn version_display(install: &Installation) -> (&'static str, &str) {
    if install.tag.is_empty() {
        ("Version", install.version.as_str())
    } else {
        ("Tag", install.tag.as_str())
    }
}

/// Browser URL for the view-installation link.
///
/// Deliberately unguarded: with no DNS records this yields the literal
/// `"https://"`, preserving the upstream behavior rather than inventing a
/// fallback.
#[must_use]
pub fn view_installation_url(install: &Installation) -> String {
    let domain = install
        .dns_records
        .first()
        .map_or("", |r| r.domain_name.as_str());
    format!("https://{domain}")
}

/// Count of deletion-locked installations in the current list.
#[must_use]
pub fn locked_count(installs: &[Installation]) -> usize {
    installs.iter().filter(|i| i.deletion_locked).count()
}

/// Whether the "Lock Deletion" control is enabled for an unlocked
/// installation.
///
/// Disabled once the locked count reaches the configured maximum. A `None`
/// maximum (absent or non-numeric configuration) never disables the control.
#[must_use]
pub fn lock_enabled(installs: &[Installation], max_locked: Option<u32>) -> bool {
    max_locked.is_none_or(|max| locked_count(installs) < max as usize)
}
