// ============================================================================
// AUTH STORE - sign-in / sign-out on top of the credential holder
// ============================================================================

use std::rc::Rc;

use crate::error::{AppError, ErrorInfo, FormErrors};
use crate::forms::SignInForm;
use crate::models::AuthUser;
use crate::services::{AuthService, CredentialProvider};
use crate::state::{AuthState, ReactiveState, SubscriptionId};

/// What the sign-in screen renders from.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthSnapshot {
    pub user: Option<AuthUser>,
    pub authenticated: bool,
    pub signing_in: bool,
    pub error: Option<ErrorInfo>,
    pub form_errors: Option<FormErrors>,
}

#[derive(Clone, PartialEq, Debug, Default)]
struct SignInStatus {
    signing_in: bool,
    error: Option<ErrorInfo>,
    form_errors: Option<FormErrors>,
}

struct Inner {
    credentials: Rc<AuthState>,
    service: AuthService,
    status: ReactiveState<SignInStatus>,
}

#[derive(Clone)]
pub struct AuthStore {
    inner: Rc<Inner>,
}

impl PartialEq for AuthStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl AuthStore {
    pub fn new(credentials: Rc<AuthState>, service: AuthService) -> Self {
        Self {
            inner: Rc::new(Inner {
                credentials,
                service,
                status: ReactiveState::new(SignInStatus::default()),
            }),
        }
    }

    /// Credential holder shared with the API client.
    pub fn credentials(&self) -> Rc<AuthState> {
        self.inner.credentials.clone()
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        let status = self.inner.status.snapshot();
        AuthSnapshot {
            user: self.inner.credentials.get_user(),
            authenticated: self.is_authenticated(),
            signing_in: status.signing_in,
            error: status.error,
            form_errors: status.form_errors,
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.inner.status.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.status.unsubscribe(id);
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.credentials.is_authenticated()
    }

    /// Validates the form, signs in with the hashed password and stores the
    /// returned token and user.
    pub async fn login(&self, form: &SignInForm) -> Result<AuthUser, AppError> {
        let credentials = match form.to_credentials() {
            Ok(credentials) => credentials,
            Err(errors) => {
                self.inner.status.set(SignInStatus {
                    form_errors: Some(errors.clone()),
                    ..SignInStatus::default()
                });
                return Err(errors.into());
            }
        };

        self.inner.status.set(SignInStatus {
            signing_in: true,
            ..SignInStatus::default()
        });

        match self.inner.service.login(&credentials).await {
            Ok(response) => {
                log::info!("✅ Signed in as {}", response.user.user_id);
                self.inner
                    .credentials
                    .set_session(&response.access_token, response.user.clone());
                self.inner.status.set(SignInStatus::default());
                Ok(response.user)
            }
            Err(e) => {
                log::error!("❌ Sign-in failed: {}", e);
                self.inner.status.set(SignInStatus {
                    error: Some(ErrorInfo::from(&e)),
                    ..SignInStatus::default()
                });
                Err(e.into())
            }
        }
    }

    pub fn logout(&self) {
        log::info!("👋 Signed out");
        self.inner.credentials.clear();
        self.inner.status.set(SignInStatus::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::MockTransport;
    use crate::utils::{MemoryTokenStore, TokenStore};
    use futures::executor::block_on;
    use serde_json::json;

    fn store(transport: &Rc<MockTransport>, tokens: &Rc<MemoryTokenStore>) -> AuthStore {
        let credentials = Rc::new(AuthState::new(tokens.clone()));
        let service = AuthService::with_url(transport.clone(), "http://api.test/api/auth/signin");
        AuthStore::new(credentials, service)
    }

    fn form() -> SignInForm {
        SignInForm {
            user_id: "ops@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn login_stores_token_and_user() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(
            200,
            json!({
                "accessToken": "jwt-1",
                "user": { "accountNo": "A1", "userId": "ops@example.com", "role": ["admin"], "exp": 1700000000 }
            }),
        );
        let tokens = Rc::new(MemoryTokenStore::default());
        let auth = store(&transport, &tokens);

        let user = block_on(auth.login(&form())).unwrap();

        assert!(user.has_role("admin"));
        assert!(auth.is_authenticated());
        assert_eq!(tokens.load_token().as_deref(), Some("jwt-1"));
        let body = transport.last_request().unwrap().body.unwrap();
        assert!(!body.contains("\"secret\""));
        let snapshot = auth.snapshot();
        assert!(!snapshot.signing_in);
        assert_eq!(snapshot.user, Some(user));
    }

    #[test]
    fn invalid_form_never_reaches_the_backend() {
        let transport = Rc::new(MockTransport::default());
        let tokens = Rc::new(MemoryTokenStore::default());
        let auth = store(&transport, &tokens);

        let err = block_on(auth.login(&SignInForm::default())).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(transport.request_count(), 0);
        assert!(auth.snapshot().form_errors.is_some());
    }

    #[test]
    fn rejected_sign_in_is_reported() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(401, json!({ "message": "bad credentials" }));
        let tokens = Rc::new(MemoryTokenStore::default());
        let auth = store(&transport, &tokens);

        let err = block_on(auth.login(&form())).unwrap_err();

        assert_eq!(
            err,
            AppError::Api(ApiError::RequestFailed {
                status: 401,
                message: "bad credentials".to_string()
            })
        );
        assert!(!auth.is_authenticated());
        assert_eq!(auth.snapshot().error.unwrap().status, Some(401));
    }

    #[test]
    fn logout_forgets_everything() {
        let tokens = Rc::new(MemoryTokenStore::with_token("jwt-0"));
        let transport = Rc::new(MockTransport::default());
        let auth = store(&transport, &tokens);
        assert!(auth.is_authenticated());

        auth.logout();
        assert!(!auth.is_authenticated());
        assert_eq!(tokens.load_token(), None);
    }
}
