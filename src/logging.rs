// ============================================================================
// LOGGING - `log` facade, routed to the browser console on wasm32
// ============================================================================

use log::Level;

use crate::config::CONFIG;

/// Console level: everything from `Debug` up when logging is enabled,
/// warnings and errors only otherwise.
pub fn level_for(enabled: bool) -> Level {
    if enabled {
        Level::Debug
    } else {
        Level::Warn
    }
}

pub fn configured_level() -> Level {
    level_for(CONFIG.is_logging_enabled())
}

/// Installs the panic hook and the console logger. Call once at startup.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(configured_level()));
}
