use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{LoginCredentials, LoginResponse};
use crate::services::api_client::error_message;
use crate::services::transport::{HttpMethod, HttpRequest, HttpTransport};

/// Sign-in endpoint. Lives outside the versioned API and has no 401
/// redirect: a 401 here just means wrong credentials.
#[derive(Clone)]
pub struct AuthService {
    transport: Rc<dyn HttpTransport>,
    signin_url: String,
}

impl AuthService {
    pub fn new(transport: Rc<dyn HttpTransport>) -> Self {
        let signin_url = format!(
            "{}/{}",
            CONFIG.api_base_url.trim_end_matches('/'),
            CONFIG.auth_signin_path.trim_start_matches('/')
        );
        Self::with_url(transport, signin_url)
    }

    pub fn with_url(transport: Rc<dyn HttpTransport>, signin_url: impl Into<String>) -> Self {
        Self {
            transport,
            signin_url: signin_url.into(),
        }
    }

    /// Perform login with user id and hashed password
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        let body =
            serde_json::to_string(credentials).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = HttpRequest::new(HttpMethod::Post, self.signin_url.as_str())
            .with_header("Content-Type", "application/json")
            .with_body(body);

        log::info!("🔐 Signing in as {}", credentials.user_id);
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let message =
                error_message(&response.body).unwrap_or_else(|| "Sign-in failed".to_string());
            log::warn!("⚠️ Sign-in rejected ({}): {}", response.status, message);
            return Err(ApiError::RequestFailed {
                status: response.status,
                message,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn credentials() -> LoginCredentials {
        LoginCredentials {
            user_id: "admin@example.com".to_string(),
            password: "hashed".to_string(),
        }
    }

    #[test]
    fn login_posts_credentials_and_decodes_session() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(
            200,
            json!({
                "accessToken": "tok",
                "user": { "accountNo": "1", "userId": "admin@example.com", "role": ["admin"], "exp": 99 }
            }),
        );
        let service = AuthService::with_url(transport.clone(), "http://api.test/api/auth/signin");

        let response = block_on(service.login(&credentials())).unwrap();
        assert_eq!(response.access_token, "tok");
        assert!(response.user.has_role("admin"));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "http://api.test/api/auth/signin");
        assert_eq!(sent.header("Authorization"), None);
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userId"], "admin@example.com");
    }

    #[test]
    fn rejected_login_surfaces_backend_message() {
        let transport = Rc::new(MockTransport::default());
        transport.respond_json(401, json!({ "message": "bad password" }));
        let service = AuthService::with_url(transport, "http://api.test/api/auth/signin");

        let err = block_on(service.login(&credentials())).unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 401,
                message: "bad password".to_string()
            }
        );
    }
}
