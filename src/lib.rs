//! Terminal weather client for Australian cities.
//!
//! State flows one way: terminal events become actions, the reducer
//! folds each action into [`AppState`] and reports the effects to run,
//! effects fetch weather on background tasks and post result actions
//! back through the same channel, and components render from the state
//! they are handed.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod event;
pub mod reducer;
pub mod state;
pub mod store;
pub mod testing;

pub use action::Action;
pub use api::{DEFAULT_BASE_URL, FetchError, WeatherApi};
pub use effect::{DispatchResult, Effect, handle_effect};
pub use event::{EventKind, RawEvent, process_raw_event, spawn_event_poller, spawn_tick_timer};
pub use reducer::{merge, reduce};
pub use state::{AppState, RequestId, WeatherPayload, WeatherReport};
pub use store::Store;
