// ============================================================================
// KIOSK ADMIN - kiosk inventory dashboard (Rust + Yew)
// ============================================================================
// Layers:
// - Services: HTTP only (transport, API client, kiosk + auth endpoints)
// - Models: shapes exchanged with the backend and the list query
// - State/Stores: Rc<RefCell> state with subscriptions and the list cycle
// - Forms: raw input -> validated values
// - Hooks/Components: Yew bindings (wasm32 only)
// ============================================================================

pub mod config;
pub mod error;
pub mod forms;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod hooks;

#[cfg(test)]
mod testing;
