use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_version: String,
    pub auth_signin_path: String,
    pub sign_in_route: String,
    pub enable_logging: bool,
    pub list_config: ListConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8051".to_string(),
            api_version: "v1".to_string(),
            auth_signin_path: "api/auth/signin".to_string(),
            sign_in_route: "/sign-in".to_string(),
            enable_logging: true,
            list_config: ListConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    pub default_page_size: u32,
    pub default_sort_by: String,
    pub filter_debounce_ms: u64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            default_sort_by: "kioskId".to_string(),
            filter_debounce_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIConfig {
    pub dialog_clear_delay_ms: u64,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            dialog_clear_delay_ms: 300,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    /// (see build.rs for the `.env` bridge).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url),
            api_version: option_env!("API_VERSION")
                .map(str::to_string)
                .unwrap_or(defaults.api_version),
            auth_signin_path: option_env!("AUTH_SIGNIN_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.auth_signin_path),
            sign_in_route: option_env!("SIGN_IN_ROUTE")
                .map(str::to_string)
                .unwrap_or(defaults.sign_in_route),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            list_config: ListConfig {
                default_page_size: option_env!("DEFAULT_PAGE_SIZE")
                    .unwrap_or("10").parse::<u32>().ok()
                    .filter(|size| *size > 0)
                    .unwrap_or(10),
                default_sort_by: option_env!("DEFAULT_SORT_BY")
                    .map(str::to_string)
                    .unwrap_or(defaults.list_config.default_sort_by),
                filter_debounce_ms: option_env!("FILTER_DEBOUNCE_MS")
                    .unwrap_or("300").parse().unwrap_or(300),
            },
            ui_config: UIConfig {
                dialog_clear_delay_ms: option_env!("DIALOG_CLEAR_DELAY_MS")
                    .unwrap_or("300").parse().unwrap_or(300),
            },
        }
    }

    /// Quiet window before a filter change triggers a fetch
    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.list_config.filter_debounce_ms)
    }

    /// Delay between closing a dialog and clearing its selected kiosk
    pub fn dialog_clear_delay(&self) -> Duration {
        Duration::from_millis(self.ui_config.dialog_clear_delay_ms)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
