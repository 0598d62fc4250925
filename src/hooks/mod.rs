// ============================================================================
// HOOKS - Yew bindings over the stores
// ============================================================================
// Each hook subscribes the component to one store, re-renders on change and
// hands out `Callback`s that spawn the store transitions.
// ============================================================================

pub mod app_context;
pub mod use_auth;
pub mod use_dialogs;
pub mod use_kiosk_list;

pub use app_context::AppContext;
pub use use_auth::{use_auth, UseAuthHandle};
pub use use_dialogs::{use_dialogs, UseDialogsHandle};
pub use use_kiosk_list::{use_kiosk_list, UseKioskListHandle};
