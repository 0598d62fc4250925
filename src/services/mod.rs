pub mod api_client;
pub mod auth_service;
pub mod kiosk_service;
pub mod transport;

pub use api_client::{ApiClient, CredentialProvider, Navigator};
pub use auth_service::AuthService;
pub use kiosk_service::KioskService;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

#[cfg(target_arch = "wasm32")]
pub use api_client::BrowserNavigator;
#[cfg(target_arch = "wasm32")]
pub use transport::GlooTransport;
