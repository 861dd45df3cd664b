//! Command-line argument definition.

use clap::Parser;

use crate::config::Settings;

/// Cloudside - a terminal sidebar for watching and protecting your cloud installations
#[derive(Parser, Debug)]
#[command(name = "cloudside")]
#[command(version)]
#[command(
    about = "A terminal sidebar for watching and protecting your cloud installations",
    long_about = None
)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print your installations as pretty JSON and exit
    #[arg(short, long)]
    pub list: bool,

    /// Print an installation status table and exit
    #[arg(short, long)]
    pub status: bool,

    /// Override the server URL from settings.conf
    #[arg(long)]
    pub server_url: Option<String>,

    /// Override the user id from settings.conf
    #[arg(long)]
    pub user: Option<String>,
}

impl Args {
    /// Log level after applying the `--verbose` shorthand.
    #[must_use]
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            self.log_level.as_str()
        }
    }

    /// Fold CLI overrides into settings loaded from disk.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.server_url {
            settings.server_url.clone_from(url);
        }
        if let Some(user) = &self.user {
            settings.user_id.clone_from(user);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: `--verbose` wins over the explicit log level.
    ///
    /// - Input: Args with verbose set and a non-debug level
    /// - Output: Effective level is debug
    #[test]
    fn verbose_forces_debug() {
        let args = Args::parse_from(["cloudside", "--log-level", "warn", "--verbose"]);
        assert_eq!(args.effective_log_level(), "debug");
        let args = Args::parse_from(["cloudside", "--log-level", "warn"]);
        assert_eq!(args.effective_log_level(), "warn");
    }

    /// What: CLI overrides replace only the fields they name.
    ///
    /// - Input: Settings from disk plus a `--user` override
    /// - Output: User replaced, server URL untouched
    #[test]
    fn overrides_apply_selectively() {
        let args = Args::parse_from(["cloudside", "--user", "u-override"]);
        let mut settings = Settings {
            server_url: "https://s.example.com".to_string(),
            user_id: "u-disk".to_string(),
            ..Default::default()
        };
        args.apply_overrides(&mut settings);
        assert_eq!(settings.user_id, "u-override");
        assert_eq!(settings.server_url, "https://s.example.com");
    }
}
