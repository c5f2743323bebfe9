//! Store - owns the state and routes every action through the reducer

use tracing::debug;

use crate::action::Action;
use crate::effect::DispatchResult;
use crate::state::AppState;

/// A reducer: mutate state, report the change and any effects
pub type Reducer = fn(&mut AppState, Action) -> DispatchResult;

/// Holds the application state. `dispatch` is the only way to change it.
pub struct Store {
    state: AppState,
    reducer: Reducer,
}

impl Store {
    /// Create a store with the given initial state and reducer
    pub fn new(state: AppState, reducer: Reducer) -> Self {
        Self { state, reducer }
    }

    /// Get a reference to the current state
    #[inline]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a mutable reference to the state.
    ///
    /// Use sparingly - prefer dispatching actions. Mainly useful for
    /// initialization.
    #[inline]
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Dispatch an action to the store
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let name = action.name();
        let result = (self.reducer)(&mut self.state, action);
        debug!(
            action = name,
            changed = result.changed,
            effects = result.effects.len(),
            "dispatch"
        );
        result
    }
}
