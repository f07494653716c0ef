//! Application Context
//!
//! The store and the controller driving it, provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{ApiClient, FetchTransport};
use crate::config::AppConfig;
use crate::controller::{Controller, StateHandle};
use crate::session::{BrowserStorage, SessionStorage};
use crate::state::{Action, AppState, Effect, FormEdit};
use crate::store::AppStore;

pub type AppController = Controller<FetchTransport, BrowserStorage, AppStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    controller: StoredValue<AppController>,
    /// Resolved backend base URL
    pub api_url: StoredValue<String>,
}

impl AppContext {
    /// Restore the persisted session and provide the context to all children
    pub fn provide() -> Self {
        let config = AppConfig::from_env();
        tracing::info!(api_url = %config.api_url, "starting");

        let storage = BrowserStorage;
        let session = storage.load();
        if session.is_some() {
            tracing::info!("restored persisted session");
        }
        let store = Store::new(AppState::restore(session));
        let controller = Controller::new(ApiClient::new(&config.api_url, FetchTransport), storage, store);

        let ctx = Self {
            store,
            controller: StoredValue::new(controller),
            api_url: StoredValue::new(config.api_url),
        };
        provide_context(ctx);
        ctx
    }

    /// Run a controller operation in the background
    pub fn spawn<F, Fut>(&self, operation: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(operation(self.controller.get_value()));
    }

    /// Apply an action from the view; its effects run in the background
    pub fn apply(&self, action: Action) {
        let effects = self.store.apply(action);
        self.run(effects);
    }

    pub fn edit(&self, edit: FormEdit) {
        self.apply(Action::Edit(edit));
    }

    pub fn run(&self, effects: Vec<Effect>) {
        if !effects.is_empty() {
            self.spawn(move |ctl| async move { ctl.run(effects).await });
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
