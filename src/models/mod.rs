pub mod auth;
pub mod kiosk;
pub mod list;
pub mod query;

pub use auth::{AuthUser, LoginCredentials, LoginResponse};
pub use kiosk::{Kiosk, KioskDraft, KioskStatus, KioskType};
pub use list::{page_count, KioskListResponse, ListResult, ListTotal};
pub use query::{FilterPatch, QueryParams, SortOrder};
