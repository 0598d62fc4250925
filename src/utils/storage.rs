// ============================================================================
// TOKEN STORAGE - where the credential survives page reloads
// ============================================================================

use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
use serde::{de::DeserializeOwned, Serialize};

use crate::models::AuthUser;
#[cfg(target_arch = "wasm32")]
use crate::utils::constants::{ACCESS_TOKEN_KEY, AUTH_USER_KEY};

/// Persistence for the access token and user.
pub trait TokenStore {
    fn load_token(&self) -> Option<String>;
    fn save_token(&self, token: &str);
    fn load_user(&self) -> Option<AuthUser>;
    fn save_user(&self, user: &AuthUser);
    fn clear(&self);
}

/// In-memory store, used natively and in tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
    user: RefCell<Option<AuthUser>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save_token(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn load_user(&self) -> Option<AuthUser> {
        self.user.borrow().clone()
    }

    fn save_user(&self, user: &AuthUser) {
        *self.user.borrow_mut() = Some(user.clone());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
        self.user.borrow_mut().take();
    }
}

/// `localStorage` through `gloo-storage`; values are JSON-encoded.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(target_arch = "wasm32")]
impl LocalTokenStore {
    fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::get(key).ok()
    }

    fn save<T: Serialize>(key: &str, value: &T) {
        use gloo_storage::{LocalStorage, Storage};
        if let Err(e) = LocalStorage::set(key, value) {
            log::warn!("⚠️ Could not persist {}: {}", key, e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalTokenStore {
    fn load_token(&self) -> Option<String> {
        Self::load::<String>(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn save_token(&self, token: &str) {
        Self::save(ACCESS_TOKEN_KEY, &token);
    }

    fn load_user(&self) -> Option<AuthUser> {
        Self::load(AUTH_USER_KEY)
    }

    fn save_user(&self, user: &AuthUser) {
        Self::save(AUTH_USER_KEY, user);
    }

    fn clear(&self) {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        LocalStorage::delete(AUTH_USER_KEY);
    }
}
