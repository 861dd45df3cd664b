//! Plugin server API: the injected action bundle the panel drives, plus the
//! reqwest-backed implementation.

mod client;

pub use client::CloudClient;

use crate::state::{Installation, PluginConfiguration};

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Actions the panel performs against the plugin server.
///
/// The runtime holds this as `Arc<dyn CloudApi>` so workers can share one
/// client and tests can substitute a recording stub.
#[async_trait::async_trait]
pub trait CloudApi: Send + Sync {
    /// Fetch the full installation list for a user.
    async fn installs_for_user(&self, user_id: &str) -> Result<Vec<Installation>>;

    /// Fetch the plugin configuration (carries the lock allowance).
    async fn plugin_configuration(&self) -> Result<PluginConfiguration>;

    /// Enable deletion protection for one installation.
    async fn deletion_lock(&self, installation_id: &str) -> Result<()>;

    /// Disable deletion protection for one installation.
    async fn deletion_unlock(&self, installation_id: &str) -> Result<()>;
}
