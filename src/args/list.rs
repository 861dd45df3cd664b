//! `--list` one-shot mode: print the user's installations as pretty JSON.

use crate::api::{CloudApi, Result};

/// Message printed when the user owns no installations.
const NO_INSTALLATIONS: &str = "No installations found.";

/// What: Fetch and print the user's installations as pretty JSON.
///
/// Inputs:
/// - `api`: Plugin server client.
/// - `user_id`: User whose installations are listed.
///
/// Output:
/// - `Ok(())` after printing; `Err` when the fetch or serialization fails.
pub async fn handle_list(api: &dyn CloudApi, user_id: &str) -> Result<()> {
    let installs = api.installs_for_user(user_id).await?;
    if installs.is_empty() {
        println!("{NO_INSTALLATIONS}");
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(&installs)?);
    Ok(())
}
