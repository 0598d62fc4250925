// ============================================================================
// STATE MODULE - reactive containers with Rc<RefCell> + notifications
// ============================================================================

pub mod auth_state;
pub mod dialog_state;
pub mod list_state;
pub mod reactivity;

pub use auth_state::AuthState;
pub use dialog_state::{DialogKind, DialogState, KioskDialogs};
pub use list_state::{ListState, LoadState};
pub use reactivity::{ReactiveState, SubscriptionId};
