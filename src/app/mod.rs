//! Application shell: terminal lifecycle plus the runtime event loop.

mod runtime;
mod terminal;

pub use runtime::background::{Channels, FetchOutcome, ToggleRequest, perform_toggle};
pub use runtime::run;
