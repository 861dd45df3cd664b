//! Core data types for cloud installations, mirrored from the plugin's JSON
//! wire format (PascalCase field names).

use serde::{Deserialize, Serialize};

/// One DNS record attached to an installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Fully qualified domain name for the record.
    #[serde(rename = "DomainName", default)]
    pub domain_name: String,
}

/// One provisioned cloud installation owned by a user.
///
/// Created and updated only by a fetch from the plugin server; the lock
/// toggle never mutates this locally, its effect is observed on the next
/// re-fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Installation {
    /// Unique installation identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Human-readable installation name.
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Provisioner state string; only `stable` vs. anything-else matters
    /// for the status badge.
    #[serde(rename = "State", default)]
    pub state: String,
    /// Whether automated deletion/cleanup is currently blocked.
    #[serde(rename = "DeletionLocked", default)]
    pub deletion_locked: bool,
    /// Ordered DNS records; may be empty.
    #[serde(rename = "DNSRecords", default)]
    pub dns_records: Vec<DnsRecord>,
    /// Container image the installation runs.
    #[serde(rename = "Image", default)]
    pub image: String,
    /// Image tag; mutually exclusive with `version` for display.
    #[serde(rename = "Tag", default)]
    pub tag: String,
    /// Product version; shown only when `tag` is empty.
    #[serde(rename = "Version", default)]
    pub version: String,
    /// Backing database description.
    #[serde(rename = "Database", default)]
    pub database: String,
    /// Backing filestore description.
    #[serde(rename = "Filestore", default)]
    pub filestore: String,
    /// Installation size class.
    #[serde(rename = "Size", default)]
    pub size: String,
    /// Link to the installation's log viewer; may be empty.
    #[serde(rename = "InstallationLogsURL", default)]
    pub installation_logs_url: String,
    /// Link to the provisioner's log viewer; may be empty.
    #[serde(rename = "ProvisionerLogsURL", default)]
    pub provisioner_logs_url: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(rename = "CreateAt", default)]
    pub create_at: i64,
}

/// Plugin configuration as served by the config endpoint.
///
/// The lock allowance arrives as either a JSON number or a string depending
/// on the server version, so it is kept raw and parsed on demand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginConfiguration {
    /// Maximum number of concurrently deletion-locked installations per
    /// person. Raw value; see [`PluginConfiguration::max_locked_installations`].
    #[serde(rename = "DeletionLockInstallationsAllowedPerPerson", default)]
    pub deletion_lock_installations_allowed_per_person: serde_json::Value,
}

impl PluginConfiguration {
    /// Parse the lock allowance into a number.
    ///
    /// Accepts a JSON number or a numeric string. A missing, null, or
    /// non-numeric value yields `None`, which the lock gating treats as
    /// "never disabled" (the webapp's `parseInt` produced `NaN` there and
    /// the `>=` comparison never fired).
    #[must_use]
    pub fn max_locked_installations(&self) -> Option<u32> {
        match &self.deletion_lock_installations_allowed_per_person {
            serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            serde_json::Value::String(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Installations decode from the server's PascalCase JSON.
    ///
    /// - Input: JSON object with all wire field names set
    /// - Output: Struct fields populated, DNS records in order
    #[test]
    fn installation_decodes_wire_json() {
        let raw = r#"{
            "ID": "inst-1",
            "Name": "alpha",
            "State": "stable",
            "DeletionLocked": true,
            "DNSRecords": [{"DomainName": "alpha.cloud.example.com"}],
            "Image": "enterprise",
            "Tag": "",
            "Version": "5.30.0",
            "Database": "aws-multitenant-rds",
            "Filestore": "aws-s3",
            "Size": "miniSingleton",
            "InstallationLogsURL": "https://logs.example.com/inst-1",
            "ProvisionerLogsURL": "https://logs.example.com/prov/inst-1",
            "CreateAt": 1691000000000
        }"#;
        let inst: Installation = serde_json::from_str(raw).expect("decode");
        assert_eq!(inst.id, "inst-1");
        assert!(inst.deletion_locked);
        assert_eq!(inst.dns_records[0].domain_name, "alpha.cloud.example.com");
        assert_eq!(inst.version, "5.30.0");
        assert_eq!(inst.create_at, 1_691_000_000_000);
    }

    /// What: Missing optional fields fall back to defaults.
    ///
    /// - Input: JSON with only the ID present
    /// - Output: Empty strings, empty DNS records, unlocked
    #[test]
    fn installation_decodes_sparse_json() {
        let inst: Installation = serde_json::from_str(r#"{"ID": "inst-2"}"#).expect("decode");
        assert_eq!(inst.id, "inst-2");
        assert!(inst.dns_records.is_empty());
        assert!(!inst.deletion_locked);
        assert!(inst.installation_logs_url.is_empty());
    }

    /// What: Lock allowance parses from number, string, and garbage forms.
    ///
    /// - Input: Configurations with numeric, stringy, absent, and junk values
    /// - Output: `Some(n)` for numeric forms, `None` otherwise
    #[test]
    fn plugin_configuration_parses_lock_allowance() {
        let from = |v: serde_json::Value| PluginConfiguration {
            deletion_lock_installations_allowed_per_person: v,
        };
        assert_eq!(from(serde_json::json!(3)).max_locked_installations(), Some(3));
        assert_eq!(from(serde_json::json!("2")).max_locked_installations(), Some(2));
        assert_eq!(from(serde_json::json!(" 4 ")).max_locked_installations(), Some(4));
        assert_eq!(from(serde_json::json!("lots")).max_locked_installations(), None);
        assert_eq!(from(serde_json::Value::Null).max_locked_installations(), None);
        assert_eq!(from(serde_json::json!(-1)).max_locked_installations(), None);
    }

    /// What: A config object without the field decodes and yields `None`.
    ///
    /// - Input: Empty JSON object
    /// - Output: `max_locked_installations()` is `None`
    #[test]
    fn plugin_configuration_decodes_empty_object() {
        let cfg: PluginConfiguration = serde_json::from_str("{}").expect("decode");
        assert_eq!(cfg.max_locked_installations(), None);
    }
}
