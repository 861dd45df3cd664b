//! Local client configuration: paths and `settings.conf` handling.

mod paths;
mod settings;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{SKELETON_CONFIG_CONTENT, Settings, parse_settings, settings, settings_from};
