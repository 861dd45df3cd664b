//! Command-line argument handling and one-shot modes.

mod definition;
mod list;
mod status;

pub use definition::Args;
pub use status::format_status_table;

use crate::api::{CloudApi, Result};

/// What: Handle one-shot flags that print and exit instead of starting the TUI.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `api`: Plugin server client.
/// - `user_id`: User whose installations are queried.
///
/// Output:
/// - `Ok(true)` when a one-shot mode ran and the process should exit;
///   `Ok(false)` when the TUI should start; `Err` on a failed fetch.
pub async fn process_args(args: &Args, api: &dyn CloudApi, user_id: &str) -> Result<bool> {
    if args.list {
        list::handle_list(api, user_id).await?;
        return Ok(true);
    }
    if args.status {
        status::handle_status(api, user_id).await?;
        return Ok(true);
    }
    Ok(false)
}
