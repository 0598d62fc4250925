//! Form definitions backing the kiosk screens. Forms hold raw input strings
//! and convert into typed values only after validation passes.

pub mod filter_form;
pub mod kiosk_form;
pub mod sign_in_form;

pub use filter_form::KioskFilterForm;
pub use kiosk_form::KioskForm;
pub use sign_in_form::SignInForm;

/// Select value meaning "no restriction".
pub const ALL_OPTION: &str = "all";
