pub mod auth_store;
pub mod kiosk_store;

pub use auth_store::{AuthSnapshot, AuthStore};
pub use kiosk_store::KioskStore;
