//! reqwest implementation of [`CloudApi`] speaking the plugin's JSON routes.

use serde_json::json;
use tracing::{debug, info, warn};

use super::{CloudApi, Result};
use crate::config::Settings;
use crate::state::{Installation, PluginConfiguration};

/// HTTP client for the cloud plugin's `/api/v1` surface.
pub struct CloudClient {
    /// Shared reqwest client with connection pooling.
    http: reqwest::Client,
    /// Server base URL without a trailing slash.
    base_url: String,
    /// User identity sent as the `Mattermost-User-ID` header.
    user_id: String,
    /// Optional bearer token for deployments behind an auth proxy.
    token: String,
}

impl CloudClient {
    /// Build a client from validated settings.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.server_url.trim_end_matches('/').to_string(),
            user_id: settings.user_id.clone(),
            token: settings.token.clone(),
        }
    }

    /// Assemble a request with the identity header and optional bearer token.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut req = self
            .http
            .request(method, url)
            .header("Mattermost-User-ID", &self.user_id);
        if !self.token.is_empty() {
            req = req.bearer_auth(&self.token);
        }
        req
    }
}

/// Map a non-success response to an error string carrying status and body.
async fn check_status(resp: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let preview: String = body.chars().take(200).collect();
    warn!(
        status = status.as_u16(),
        preview = preview,
        "{what} returned non-success status"
    );
    Err(format!("{what} failed with status {status}").into())
}

#[async_trait::async_trait]
impl CloudApi for CloudClient {
    async fn installs_for_user(&self, user_id: &str) -> Result<Vec<Installation>> {
        let resp = self
            .request(reqwest::Method::POST, "/api/v1/userinstalls")
            .json(&json!({ "user_id": user_id }))
            .send()
            .await?;
        let resp = check_status(resp, "userinstalls").await?;
        // The server marshals a nil slice as JSON null.
        let installs: Option<Vec<Installation>> = resp.json().await?;
        let installs = installs.unwrap_or_default();
        info!(count = installs.len(), "fetched installations");
        Ok(installs)
    }

    async fn plugin_configuration(&self) -> Result<PluginConfiguration> {
        let resp = self
            .request(reqwest::Method::GET, "/api/v1/config")
            .send()
            .await?;
        let resp = check_status(resp, "config").await?;
        let cfg: PluginConfiguration = resp.json().await?;
        debug!(
            max_locked = ?cfg.max_locked_installations(),
            "fetched plugin configuration"
        );
        Ok(cfg)
    }

    async fn deletion_lock(&self, installation_id: &str) -> Result<()> {
        let resp = self
            .request(reqwest::Method::POST, "/api/v1/deletion-lock")
            .json(&json!({ "installation_id": installation_id }))
            .send()
            .await?;
        check_status(resp, "deletion-lock").await?;
        info!(installation = installation_id, "deletion lock requested");
        Ok(())
    }

    async fn deletion_unlock(&self, installation_id: &str) -> Result<()> {
        let resp = self
            .request(reqwest::Method::POST, "/api/v1/deletion-unlock")
            .json(&json!({ "installation_id": installation_id }))
            .send()
            .await?;
        check_status(resp, "deletion-unlock").await?;
        info!(installation = installation_id, "deletion unlock requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: A null installation list body decodes as an empty list.
    ///
    /// - Input: JSON `null` and a one-element array
    /// - Output: Empty vec, then one decoded installation
    #[test]
    fn null_install_list_decodes_empty() {
        let none: Option<Vec<Installation>> = serde_json::from_str("null").expect("decode");
        assert!(none.unwrap_or_default().is_empty());

        let some: Option<Vec<Installation>> =
            serde_json::from_str(r#"[{"ID": "inst-1"}]"#).expect("decode");
        assert_eq!(some.unwrap_or_default().len(), 1);
    }

    /// What: The base URL loses its trailing slash so paths join cleanly.
    ///
    /// - Input: Settings with a trailing slash on the server URL
    /// - Output: Stored base URL has no trailing slash
    #[test]
    fn base_url_trailing_slash_stripped() {
        let settings = Settings {
            server_url: "https://chat.example.com/plugins/cloud/".to_string(),
            user_id: "u1".to_string(),
            ..Default::default()
        };
        let client = CloudClient::new(&settings);
        assert_eq!(client.base_url, "https://chat.example.com/plugins/cloud");
    }
}
