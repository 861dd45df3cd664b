//! `settings.conf` loading: skeleton creation, KEY = VALUE parsing, and
//! startup validation.

use std::fs;
use std::path::Path;

use super::paths::{resolve_settings_path, settings_path};

/// Skeleton written on first run so users have something to edit.
pub const SKELETON_CONFIG_CONTENT: &str = "\
# Cloudside settings
#
# server_url: base URL of the cloud plugin, e.g.
#   https://chat.example.com/plugins/com.mattermost.cloud
server_url =

# user_id: the user whose installations are listed
user_id =

# token: optional bearer token for deployments behind an auth proxy
token =
";

/// Client settings loaded from `settings.conf`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the plugin server.
    pub server_url: String,
    /// Identity of the user whose installations are fetched.
    pub user_id: String,
    /// Optional bearer token; empty means no Authorization header.
    pub token: String,
}

impl Settings {
    /// Validate the minimum viable configuration.
    ///
    /// # Errors
    /// - When `server_url` or `user_id` is blank.
    pub fn is_valid(&self) -> Result<(), String> {
        if self.server_url.trim().is_empty() {
            return Err("server_url must be set (see settings.conf)".to_string());
        }
        if self.user_id.trim().is_empty() {
            return Err("user_id must be set (see settings.conf)".to_string());
        }
        Ok(())
    }
}

/// Strip a trailing `#` or `//` comment from a value.
///
/// A marker only starts a comment at the beginning of the value or after
/// whitespace, so the `//` inside a URL value is left alone.
fn strip_inline_comment(val: &str) -> &str {
    let mut cut = val.len();
    for marker in ["#", "//"] {
        let mut from = 0;
        while let Some(i) = val[from..].find(marker) {
            let idx = from + i;
            if idx == 0 || val[..idx].ends_with(char::is_whitespace) {
                cut = cut.min(idx);
                break;
            }
            from = idx + marker.len();
        }
    }
    val[..cut].trim()
}

/// Parse settings file content into a [`Settings`] value.
///
/// Unknown keys are ignored; blank lines and comment lines are skipped.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        match key.as_str() {
            "server_url" | "url" => out.server_url = val.to_string(),
            "user_id" | "user" => out.user_id = val.to_string(),
            "token" | "auth_token" => out.token = val.to_string(),
            _ => {}
        }
    }
    out
}

/// Load settings from a specific file path.
///
/// Missing or unreadable files yield defaults.
#[must_use]
pub fn settings_from(path: &Path) -> Settings {
    fs::read_to_string(path).map_or_else(|_| Settings::default(), |c| parse_settings(&c))
}

/// Load user settings, writing the skeleton config on first run.
///
/// Falls back to `Settings::default()` when no file can be found or created.
#[must_use]
pub fn settings() -> Settings {
    if let Some(p) = resolve_settings_path() {
        return settings_from(&p);
    }
    let p = settings_path();
    if let Some(dir) = p.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let _ = fs::write(&p, SKELETON_CONFIG_CONTENT);
    settings_from(&p)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: KEY = VALUE lines parse with comments and aliases honored.
    ///
    /// - Input: Mixed-case keys, inline comments, unknown keys
    /// - Output: Known fields populated, the rest ignored
    #[test]
    fn parse_settings_basic() {
        let content = "\
# comment
server_url = https://chat.example.com/plugins/cloud  # inline
USER = u-123
token = abc // trailing
unknown_key = whatever
";
        let s = parse_settings(content);
        assert_eq!(s.server_url, "https://chat.example.com/plugins/cloud");
        assert_eq!(s.user_id, "u-123");
        assert_eq!(s.token, "abc");
    }

    /// What: URL values survive the inline comment rules intact.
    ///
    /// - Input: URLs containing `//`, bare and with trailing comments
    /// - Output: The full URL round-trips; only whitespace-led markers cut
    #[test]
    fn url_values_survive_comment_stripping() {
        let s = parse_settings("server_url = https://chat.example.com/plugins/cloud\n");
        assert_eq!(s.server_url, "https://chat.example.com/plugins/cloud");

        let s = parse_settings("server_url = https://chat.example.com/cloud // staging\n");
        assert_eq!(s.server_url, "https://chat.example.com/cloud");

        let s = parse_settings("server_url = https://chat.example.com/cloud # prod\n");
        assert_eq!(s.server_url, "https://chat.example.com/cloud");
    }

    /// What: Empty content parses to defaults.
    ///
    /// - Input: Blank and comment-only content
    /// - Output: All fields empty
    #[test]
    fn parse_settings_empty() {
        assert_eq!(parse_settings(""), Settings::default());
        assert_eq!(parse_settings("# only comments\n\n"), Settings::default());
    }

    /// What: Validation requires a server URL and a user id.
    ///
    /// - Input: Valid settings, then each required field blanked in turn
    /// - Output: Ok for the base, Err naming the missing field
    #[test]
    fn is_valid_requires_url_and_user() {
        let base = Settings {
            server_url: "https://chat.example.com/plugins/cloud".to_string(),
            user_id: "u-123".to_string(),
            token: String::new(),
        };
        assert!(base.is_valid().is_ok());

        let mut no_url = base.clone();
        no_url.server_url.clear();
        assert!(no_url.is_valid().is_err());

        let mut no_user = base;
        no_user.user_id.clear();
        assert!(no_user.is_valid().is_err());
    }

    /// What: Settings load from a real file, with defaults on a missing one.
    ///
    /// - Input: Temp file with one key; then a path that does not exist
    /// - Output: Parsed value, then defaults
    #[test]
    fn settings_from_file_and_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "server_url = https://s.example.com\nuser_id = u\n")
            .expect("write");
        let s = settings_from(&path);
        assert_eq!(s.server_url, "https://s.example.com");

        let missing = settings_from(&dir.path().join("nope.conf"));
        assert_eq!(missing, Settings::default());
    }
}
