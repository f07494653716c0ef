//! Global Application State Store
//!
//! Wraps [`AppState`] in a reactive_stores `Store` so components subscribe
//! field by field while every change still goes through the reducer.

use reactive_stores::Store;
use leptos::prelude::*;

use crate::controller::StateHandle;
use crate::state::{Action, AppState, Effect};

/// Type alias for the store
pub type AppStore = Store<AppState>;

impl StateHandle for AppStore {
    fn apply(&self, action: Action) -> Vec<Effect> {
        self.try_update(|state| state.apply(action)).unwrap_or_default()
    }

    fn snapshot<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}
