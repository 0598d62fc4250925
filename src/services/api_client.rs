// ============================================================================
// API CLIENT - authenticated JSON over HTTP (stateless)
// ============================================================================
// Prefixes base URL + API version, injects the bearer token, turns 401 into
// a forced sign-in and every other failure into an ApiError. No business
// logic lives here.
// ============================================================================

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::services::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Read access to the current credential. Lifecycle belongs to the auth
/// side; the client only reads it and resets it on 401.
pub trait CredentialProvider {
    /// Bearer token, `None` or empty when signed out
    fn access_token(&self) -> Option<String>;
    fn reset(&self);
    fn is_authenticated(&self) -> bool;
}

/// Forces navigation, e.g. back to the sign-in screen.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.location().set_href(path).is_err() {
                    log::error!("❌ Could not navigate to {}", path);
                }
            }
            None => log::error!("❌ No window, cannot navigate to {}", path),
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    version: String,
    sign_in_route: String,
    transport: Rc<dyn HttpTransport>,
    credentials: Rc<dyn CredentialProvider>,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        transport: Rc<dyn HttpTransport>,
        credentials: Rc<dyn CredentialProvider>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: CONFIG.api_base_url.clone(),
            version: CONFIG.api_version.clone(),
            sign_in_route: CONFIG.sign_in_route.clone(),
            transport,
            credentials,
            navigator,
        }
    }

    pub fn with_base_url(mut self, base_url: &str, version: &str) -> Self {
        self.base_url = base_url.to_string();
        self.version = version.to_string();
        self
    }

    /// `{base}/{version}/{path}`
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let version = self.version.trim_matches('/');
        let path = path.trim_start_matches('/');
        if version.is_empty() {
            format!("{}/{}", base, path)
        } else {
            format!("{}/{}/{}", base, version, path)
        }
    }

    /// Sends a JSON request and returns the decoded body. 204 and empty
    /// bodies come back as `Value::Null`.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(method, path, body).await
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let value = self.send(HttpMethod::Get, path, None).await?;
        decode(value)
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let value = self.send(HttpMethod::Post, path, Some(encode(body)?)).await?;
        decode(value)
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let value = self.send(HttpMethod::Put, path, Some(encode(body)?)).await?;
        decode(value)
    }

    /// DELETE; whatever the body holds is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(HttpMethod::Delete, path, None).await.map(|_| ())
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<Value, ApiError> {
        let url = self.url_for(path);
        let mut request = HttpRequest::new(method, url.as_str())
            .with_header("Content-Type", "application/json")
            .with_header("Accept", "application/json");

        if let Some(token) = self.credentials.access_token().filter(|t| !t.is_empty()) {
            request = request.with_header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.with_body(body);
        }

        log::debug!("➡️ {} {}", method, url);
        let response = self.transport.send(request).await?;
        self.handle_response(method, &url, response)
    }

    fn handle_response(
        &self,
        method: HttpMethod,
        url: &str,
        response: HttpResponse,
    ) -> Result<Value, ApiError> {
        if response.status == 401 {
            log::warn!("🔒 {} {} -> 401, session expired", method, url);
            self.credentials.reset();
            self.navigator.redirect(&self.sign_in_route);
            return Err(ApiError::AuthExpired);
        }

        if !response.is_success() {
            let message = error_message(&response.body)
                .unwrap_or_else(|| format!("Request failed: {}", response.status));
            log::error!("❌ {} {} -> {}: {}", method, url, response.status, message);
            return Err(ApiError::RequestFailed {
                status: response.status,
                message,
            });
        }

        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// `message` field of a JSON error body, if there is one.
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
