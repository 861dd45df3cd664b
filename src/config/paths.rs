//! Filesystem locations for Cloudside's configuration and logs.

use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// XDG config directory for Cloudside (`…/cloudside`), ensured to exist.
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("cloudside");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Log directory under the config directory, ensured to exist.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of the settings file, whether or not it exists yet.
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// Find an existing settings file, preferring `$XDG_CONFIG_HOME` over
/// `$HOME/.config`.
#[must_use]
pub(crate) fn resolve_settings_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join("cloudside").join("settings.conf"));
    }
    if let Some(h) = home.as_deref() {
        candidates.push(
            Path::new(h)
                .join(".config")
                .join("cloudside")
                .join("settings.conf"),
        );
    }
    candidates.into_iter().find(|p| p.is_file())
}
