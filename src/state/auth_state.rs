// ============================================================================
// AUTH STATE - access token + signed-in user
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::AuthUser;
use crate::services::CredentialProvider;
use crate::utils::TokenStore;

/// Credential holder. Reads the persisted token once at construction and
/// writes through to the store on every change.
pub struct AuthState {
    token: RefCell<String>,
    user: RefCell<Option<AuthUser>>,
    store: Rc<dyn TokenStore>,
}

impl AuthState {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        let token = store.load_token().unwrap_or_default();
        let user = store.load_user();
        Self {
            token: RefCell::new(token),
            user: RefCell::new(user),
            store,
        }
    }

    /// Current token, empty when signed out
    pub fn get_token(&self) -> String {
        self.token.borrow().clone()
    }

    pub fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = token.to_string();
        self.store.save_token(token);
    }

    pub fn get_user(&self) -> Option<AuthUser> {
        self.user.borrow().clone()
    }

    pub fn set_user(&self, user: Option<AuthUser>) {
        if let Some(user) = &user {
            self.store.save_user(user);
        }
        *self.user.borrow_mut() = user;
    }

    /// Stores a fresh sign-in
    pub fn set_session(&self, token: &str, user: AuthUser) {
        self.set_token(token);
        self.set_user(Some(user));
    }

    /// Logout - drop token and user everywhere
    pub fn clear(&self) {
        self.token.borrow_mut().clear();
        self.user.borrow_mut().take();
        self.store.clear();
    }
}

impl CredentialProvider for AuthState {
    fn access_token(&self) -> Option<String> {
        let token = self.token.borrow();
        (!token.is_empty()).then(|| token.clone())
    }

    fn reset(&self) {
        log::info!("🔒 Credential reset");
        self.clear();
    }

    fn is_authenticated(&self) -> bool {
        !self.token.borrow().is_empty() || self.user.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryTokenStore;

    fn user() -> AuthUser {
        AuthUser {
            account_no: "7".to_string(),
            user_id: "ops@example.com".to_string(),
            role: vec!["admin".to_string()],
            exp: 0,
        }
    }

    #[test]
    fn picks_up_persisted_token() {
        let state = AuthState::new(Rc::new(MemoryTokenStore::with_token("kept")));
        assert_eq!(state.access_token().as_deref(), Some("kept"));
        assert!(state.is_authenticated());
    }

    #[test]
    fn empty_token_is_no_token() {
        let state = AuthState::new(Rc::new(MemoryTokenStore::default()));
        assert_eq!(state.access_token(), None);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn reset_clears_memory_and_store() {
        let store = Rc::new(MemoryTokenStore::default());
        let state = AuthState::new(store.clone());
        state.set_session("tok", user());
        assert_eq!(store.load_token().as_deref(), Some("tok"));

        state.reset();
        assert!(!state.is_authenticated());
        assert_eq!(state.get_user(), None);
        assert_eq!(store.load_token(), None);
    }
}
