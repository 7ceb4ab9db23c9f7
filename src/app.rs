//! Global session and layout state.
//!
//! One record per running client: the authentication flag and email written
//! by the auth flow, and the chrome heights written by layout measurement.
//! The state holds only the outcome of authentication; the flow itself lives
//! elsewhere.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use serde::{Deserialize, Serialize};

use crate::store::{Store, Subscription};

/// Session and layout state shared across the whole client.
///
/// By convention `email` is non-empty only while `is_authenticated` is true;
/// the auth flow upholds this, the store does not check it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Whether the current session is authenticated.
    pub is_authenticated: bool,
    /// The authenticated user's email; empty when unauthenticated.
    pub email: String,
    /// Measured height of the page header, in pixels.
    pub header_height: u32,
    /// Measured height of the control panel, in pixels.
    pub control_panel_height: u32,
}

/// Shared observable handle to the global session/layout state.
#[derive(Clone)]
pub struct AppStore {
    store: Store<AppState>,
}

impl AppStore {
    /// Create a store seeded with the default record.
    #[must_use]
    pub fn new() -> Self {
        Self { store: Store::new(AppState::default()) }
    }

    /// Register an observer; invoked immediately with the current record and
    /// again after every update.
    pub fn subscribe(
        &self,
        observer: impl FnMut(&AppState) + 'static,
    ) -> Subscription<AppState> {
        self.store.subscribe(observer)
    }

    /// Replace the whole record and notify subscribers.
    pub fn set(&self, state: AppState) {
        self.store.set(state);
    }

    /// Mutate the record in place and notify subscribers.
    pub fn update(&self, mutator: impl FnOnce(&mut AppState)) {
        self.store.update(mutator);
    }

    /// A clone of the current record, without subscribing.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.store.snapshot()
    }

    /// Whether the current session is authenticated, read from the latest
    /// record. Pure, no side effects.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.with(|state| state.is_authenticated)
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
