//! Handlers for messages arriving on the runtime's channels.

use crate::state::AppState;

use super::background::FetchOutcome;

/// Apply a fetch outcome to the application state.
///
/// A fresh list replaces the old one wholesale and clears any prior server
/// error; a failure stores its message, which preempts list rendering. Late
/// refreshes from overlapping toggles are applied in arrival order.
pub fn handle_installs_result(app: &mut AppState, outcome: FetchOutcome) {
    match outcome {
        Ok(installs) => app.apply_installs(installs),
        Err(msg) => app.server_error = msg,
    }
}

/// Record the lock allowance from the configuration fetch.
pub fn handle_config_result(app: &mut AppState, max: Option<u32>) {
    app.max_locked_installations = max;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Installation;

    fn inst(id: &str) -> Installation {
        Installation {
            id: id.to_string(),
            ..Default::default()
        }
    }

    /// What: A successful fetch replaces the list and clears the error.
    ///
    /// - Input: State with an error, then an Ok outcome
    /// - Output: New list present, error gone
    #[test]
    fn ok_outcome_replaces_list() {
        let mut app = AppState {
            server_error: "old failure".to_string(),
            ..Default::default()
        };
        handle_installs_result(&mut app, Ok(vec![inst("a")]));
        assert_eq!(app.installs.len(), 1);
        assert!(app.server_error.is_empty());
    }

    /// What: A failed fetch stores the error and keeps the stale list.
    ///
    /// - Input: State with one installation, then an Err outcome
    /// - Output: Error set; the list is untouched (the error view hides it)
    #[test]
    fn err_outcome_sets_server_error() {
        let mut app = AppState {
            installs: vec![inst("a")],
            ..Default::default()
        };
        handle_installs_result(&mut app, Err("userinstalls failed with status 500".to_string()));
        assert_eq!(app.server_error, "userinstalls failed with status 500");
        assert_eq!(app.installs.len(), 1);
    }

    /// What: Config results land in the lock allowance field.
    ///
    /// - Input: `Some(2)` then `None`
    /// - Output: Field tracks the latest value
    #[test]
    fn config_result_recorded() {
        let mut app = AppState::default();
        handle_config_result(&mut app, Some(2));
        assert_eq!(app.max_locked_installations, Some(2));
        handle_config_result(&mut app, None);
        assert_eq!(app.max_locked_installations, None);
    }
}
