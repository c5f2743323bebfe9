//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and executed by the main loop.
//! This keeps the reducer pure while making async work explicit.

use tokio::sync::mpsc;
use tracing::debug;

use crate::action::Action;
use crate::api::WeatherApi;
use crate::state::RequestId;

/// Side effects that can be triggered by actions
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch current conditions for a city
    FetchWeather { request: RequestId, city: String },
}

/// Result of dispatching an action.
///
/// Carries the re-render indicator and any effects to execute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchResult {
    /// Whether the state was modified by this action
    pub changed: bool,
    /// Effects to be processed after dispatch
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    /// No state change and no effects
    #[inline]
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// State changed, no effects
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed with a single effect
    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Returns true if there are any effects to process
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// Execute one effect by spawning a detached task.
///
/// Fetch tasks are never keyed or cancelled. Rapid submissions race and
/// the last response to arrive wins the merge; the request id on the
/// result action exists so the log can tell those races apart.
pub fn handle_effect(effect: Effect, api: &WeatherApi, action_tx: &mpsc::UnboundedSender<Action>) {
    match effect {
        Effect::FetchWeather { request, city } => {
            debug!(request = request.0, %city, "spawning weather fetch");
            let api = api.clone();
            let tx = action_tx.clone();
            tokio::spawn(async move {
                let action = match api.fetch_current(&city).await {
                    Ok(payload) => Action::WeatherDidLoad { request, payload },
                    Err(e) => Action::WeatherDidError {
                        request,
                        message: e.to_string(),
                    },
                };
                // Send result action - ignore error if receiver dropped
                let _ = tx.send(action);
            });
        }
    }
}
