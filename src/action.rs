//! Actions - every input to the store
//!
//! "Did" variants are results posted back by async fetch tasks.

use crate::state::{RequestId, WeatherPayload};

/// Application actions
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Search =====
    /// The search buffer changed (every keystroke)
    QueryChange(String),

    /// Submit the current buffer as a city lookup
    QuerySubmit(String),

    // ===== Weather results =====
    /// Result: provider payload arrived for the given request
    WeatherDidLoad {
        request: RequestId,
        payload: WeatherPayload,
    },

    /// Result: fetch failed (transport, status or decode)
    WeatherDidError { request: RequestId, message: String },

    // ===== Global =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}

impl Action {
    /// Short name for dispatch logging
    pub fn name(&self) -> &'static str {
        match self {
            Action::QueryChange(_) => "QueryChange",
            Action::QuerySubmit(_) => "QuerySubmit",
            Action::WeatherDidLoad { .. } => "WeatherDidLoad",
            Action::WeatherDidError { .. } => "WeatherDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
