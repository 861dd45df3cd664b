//! Application state: wire types plus the central [`AppState`] container.

mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{DnsRecord, Installation, PluginConfiguration};
