//! Session Persistence
//!
//! Durable token/email storage so a page reload resumes the session.

use crate::models::Session;

pub const TOKEN_KEY: &str = "zakupai_token";
pub const USER_KEY: &str = "zakupai_user";

/// Durable key/value home of the session
pub trait SessionStorage {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// `window.localStorage` backend
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage is unavailable, session will not survive a reload");
        }
        storage
    }
}

impl SessionStorage for BrowserStorage {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())?;
        let email = storage.get_item(USER_KEY).ok().flatten().unwrap_or_default();
        Some(Session { token, email })
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else { return };
        if storage.set_item(TOKEN_KEY, &session.token).is_err() || storage.set_item(USER_KEY, &session.email).is_err() {
            tracing::warn!("failed to persist session");
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else { return };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
