//! Reducer - the single state update entry point
//!
//! `fn(state: &mut AppState, action: Action) -> DispatchResult`
//! - All state mutations happen here
//! - Effects are declared, not executed
//! - No async, no I/O - just data transformation

use tracing::debug;

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::state::{AppState, WeatherPayload};

/// Handle a state transition.
///
/// Returns whether the UI should re-render and any effects for the main
/// loop to execute.
pub fn reduce(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== Search =====
        Action::QueryChange(value) => {
            state.query = value;
            DispatchResult::changed()
        }

        Action::QuerySubmit(city) => {
            // Submitted as-is: no trimming, no validation, buffer kept
            state.is_loading = true;
            state.error = None;
            let request = state.next_request();
            DispatchResult::changed_with(Effect::FetchWeather { request, city })
        }

        // ===== Weather results =====
        // Responses apply in arrival order. A response for an older
        // request that lands after a newer one still wins the slot.
        Action::WeatherDidLoad { request, payload } => {
            if let Some(last) = state.last_applied
                && request < last
            {
                debug!(
                    request = request.0,
                    last = last.0,
                    "applying response for superseded request"
                );
            }
            merge(&mut state.conditions, payload);
            state.last_applied = Some(request);
            state.is_loading = false;
            state.error = None;
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, message } => {
            debug!(request = request.0, %message, "weather fetch failed");
            state.is_loading = false;
            state.error = Some(message);
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.is_loading {
                // re-render for spinner animation
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => {
            // Quit is handled in the main loop, not here
            DispatchResult::unchanged()
        }
    }
}

/// Shallow-merge `incoming` into `current`.
///
/// Every top-level key of `incoming` overwrites the same key in
/// `current`; keys present only in `current` are preserved.
pub fn merge(current: &mut WeatherPayload, incoming: WeatherPayload) {
    for (key, value) in incoming {
        current.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RequestId;
    use serde_json::{Value, json};

    fn payload(value: Value) -> WeatherPayload {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    fn sydney() -> WeatherPayload {
        payload(json!({
            "name": "Sydney",
            "weather": [{"main": "Clear"}],
            "main": {"temp": 300.0, "pressure": 1012},
            "wind": {"speed": 5}
        }))
    }

    #[test]
    fn test_merge_into_empty_yields_payload() {
        let mut current = WeatherPayload::new();
        merge(&mut current, sydney());
        assert_eq!(current, sydney());
    }

    #[test]
    fn test_merge_preserves_unrelated_keys() {
        let mut current = payload(json!({"name": "Perth", "visibility": 10000}));
        merge(&mut current, payload(json!({"name": "Sydney"})));

        assert_eq!(current["name"], json!("Sydney"));
        assert_eq!(current["visibility"], json!(10000));
    }

    #[test]
    fn test_merge_overwrites_whole_top_level_values() {
        // Shallow merge: nested objects are replaced, not merged
        let mut current = payload(json!({"main": {"temp": 300.0, "pressure": 1012}}));
        merge(&mut current, payload(json!({"main": {"temp": 280.0}})));

        assert_eq!(current["main"], json!({"temp": 280.0}));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut once = WeatherPayload::new();
        merge(&mut once, sydney());

        let mut twice = WeatherPayload::new();
        merge(&mut twice, sydney());
        merge(&mut twice, sydney());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_query_change_replaces_buffer() {
        let mut state = AppState::default();

        let result = reduce(&mut state, Action::QueryChange("Melb".into()));

        assert!(result.changed);
        assert_eq!(state.query, "Melb");
    }

    #[test]
    fn test_submit_sets_loading_and_emits_fetch() {
        let mut state = AppState {
            query: "Melbourne".into(),
            error: Some("stale".into()),
            ..Default::default()
        };

        let result = reduce(&mut state, Action::QuerySubmit("Melbourne".into()));

        assert!(result.changed);
        assert!(state.is_loading);
        assert_eq!(state.error, None);
        // Buffer kept for editing after submit
        assert_eq!(state.query, "Melbourne");
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request: RequestId(1),
                city: "Melbourne".into(),
            }]
        );
    }

    #[test]
    fn test_submit_does_not_clear_conditions() {
        let mut state = AppState {
            conditions: sydney(),
            ..Default::default()
        };

        reduce(&mut state, Action::QuerySubmit("Perth".into()));

        assert_eq!(state.conditions, sydney());
    }

    #[test]
    fn test_empty_submission_still_fetches() {
        let mut state = AppState::default();

        let result = reduce(&mut state, Action::QuerySubmit(String::new()));

        assert!(matches!(
            result.effects.as_slice(),
            [Effect::FetchWeather { city, .. }] if city.is_empty()
        ));
    }

    #[test]
    fn test_request_ids_increase_per_submit() {
        let mut state = AppState::default();

        let first = reduce(&mut state, Action::QuerySubmit("Sydney".into()));
        let second = reduce(&mut state, Action::QuerySubmit("Perth".into()));

        let id = |result: &DispatchResult| match result.effects.as_slice() {
            [Effect::FetchWeather { request, .. }] => *request,
            other => panic!("expected one fetch effect, got {other:?}"),
        };
        assert!(id(&first) < id(&second));
    }

    #[test]
    fn test_did_load_merges_and_clears_loading() {
        let mut state = AppState {
            is_loading: true,
            error: Some("stale".into()),
            ..Default::default()
        };

        let result = reduce(
            &mut state,
            Action::WeatherDidLoad {
                request: RequestId(1),
                payload: sydney(),
            },
        );

        assert!(result.changed);
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.last_applied, Some(RequestId(1)));
        assert_eq!(state.report().map(|r| r.city), Some("Sydney".into()));
    }

    #[test]
    fn test_out_of_order_response_wins_slot() {
        let mut state = AppState::default();

        // Two rapid submissions: Sydney first, Perth second
        let first = reduce(&mut state, Action::QuerySubmit("Sydney".into()));
        let second = reduce(&mut state, Action::QuerySubmit("Perth".into()));
        let id = |result: &DispatchResult| match result.effects.as_slice() {
            [Effect::FetchWeather { request, .. }] => *request,
            other => panic!("expected one fetch effect, got {other:?}"),
        };
        let (sydney_req, perth_req) = (id(&first), id(&second));

        // Perth resolves first, the slower Sydney response lands last
        reduce(
            &mut state,
            Action::WeatherDidLoad {
                request: perth_req,
                payload: payload(json!({
                    "name": "Perth",
                    "weather": [{"main": "Sunny"}],
                    "main": {"temp": 295.0, "pressure": 1015},
                    "wind": {"speed": 3}
                })),
            },
        );
        reduce(
            &mut state,
            Action::WeatherDidLoad {
                request: sydney_req,
                payload: sydney(),
            },
        );

        assert_eq!(state.report().map(|r| r.city), Some("Sydney".into()));
        assert_eq!(state.last_applied, Some(sydney_req));
    }

    #[test]
    fn test_did_error_records_message() {
        let mut state = AppState {
            is_loading: true,
            ..Default::default()
        };

        let result = reduce(
            &mut state,
            Action::WeatherDidError {
                request: RequestId(1),
                message: "connection refused".into(),
            },
        );

        assert!(result.changed);
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_error_does_not_discard_conditions() {
        let mut state = AppState {
            conditions: sydney(),
            ..Default::default()
        };

        reduce(
            &mut state,
            Action::WeatherDidError {
                request: RequestId(2),
                message: "503".into(),
            },
        );

        assert_eq!(state.conditions, sydney());
    }

    #[test]
    fn test_tick_only_rerenders_when_loading() {
        let mut state = AppState::default();

        let changed = reduce(&mut state, Action::Tick).changed;
        assert!(!changed);
        assert_eq!(state.tick_count, 1);

        state.is_loading = true;
        let changed = reduce(&mut state, Action::Tick).changed;
        assert!(changed);
        assert_eq!(state.tick_count, 2);
    }

    #[test]
    fn test_quit_is_a_noop_here() {
        let mut state = AppState::default();

        let result = reduce(&mut state, Action::Quit);

        assert!(!result.changed);
        assert!(!result.has_effects());
    }
}
