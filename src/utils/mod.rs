// Shared helpers

pub mod constants;
pub mod storage;
pub mod timer;

pub use constants::*;
pub use storage::{MemoryTokenStore, TokenStore};
pub use timer::Sleeper;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalTokenStore;
#[cfg(target_arch = "wasm32")]
pub use timer::GlooSleeper;
