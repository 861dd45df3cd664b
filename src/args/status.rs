//! `--status` one-shot mode: print an installation status table.

use crate::api::{CloudApi, Result};
use crate::logic;
use crate::state::Installation;
use crate::util::millis_to_date;

/// Header row of the status table.
const TABLE_HEADER: &str = "\
| Installation | DNS | Size | Version | State | Created |
| -- | -- | -- | -- | -- | -- |";

/// Render the status table for a list of installations.
///
/// One row per installation, in input order. The DNS column shows the first
/// record's domain or the "No URL!" placeholder; the version column follows
/// the tag-over-version display rule.
#[must_use]
pub fn format_status_table(installs: &[Installation]) -> String {
    let mut out = String::from(TABLE_HEADER);
    for install in installs {
        let (_, version) = logic::version_display(install);
        out.push_str(&format!(
            "\n| `{}` | {} | {} | {} | {} | {} |",
            install.id,
            logic::dns_display(install),
            install.size,
            version,
            install.state,
            millis_to_date(install.create_at),
        ));
    }
    out
}

/// What: Fetch the user's installations and print the status table.
///
/// Inputs:
/// - `api`: Plugin server client.
/// - `user_id`: User whose installations are tabulated.
///
/// Output:
/// - `Ok(())` after printing; `Err` when the fetch fails.
pub async fn handle_status(api: &dyn CloudApi, user_id: &str) -> Result<()> {
    let installs = api.installs_for_user(user_id).await?;
    println!("{}", format_status_table(&installs));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DnsRecord;

    /// What: The table has one row per installation with derived columns.
    ///
    /// - Input: One installation with DNS and a version, one with neither
    /// - Output: Header plus two rows; placeholder DNS on the second
    #[test]
    fn status_table_shape() {
        let installs = vec![
            Installation {
                id: "inst-1".to_string(),
                dns_records: vec![DnsRecord {
                    domain_name: "one.example.com".to_string(),
                }],
                size: "miniSingleton".to_string(),
                version: "5.30.0".to_string(),
                state: "stable".to_string(),
                create_at: 1_691_366_400_000,
                ..Default::default()
            },
            Installation {
                id: "inst-2".to_string(),
                tag: "release-1".to_string(),
                version: "ignored".to_string(),
                ..Default::default()
            },
        ];
        let table = format_status_table(&installs);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("| Installation | DNS |"));
        assert_eq!(
            lines[2],
            "| `inst-1` | one.example.com | miniSingleton | 5.30.0 | stable | Aug-07-2023 |"
        );
        assert!(lines[3].contains("No URL!"));
        assert!(lines[3].contains("release-1"));
        assert!(!lines[3].contains("ignored"));
    }

    /// What: An empty list renders as just the header.
    ///
    /// - Input: No installations
    /// - Output: Two header lines only
    #[test]
    fn status_table_empty() {
        let table = format_status_table(&[]);
        assert_eq!(table.lines().count(), 2);
    }
}
