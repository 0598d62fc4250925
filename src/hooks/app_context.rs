// ============================================================================
// APP CONTEXT - stores shared through Yew context
// ============================================================================

use std::rc::Rc;

use crate::services::{ApiClient, AuthService, BrowserNavigator, GlooTransport, HttpTransport, KioskService};
use crate::state::{AuthState, KioskDialogs};
use crate::stores::{AuthStore, KioskStore};
use crate::utils::{GlooSleeper, LocalTokenStore, Sleeper};

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub kiosks: KioskStore,
    pub dialogs: KioskDialogs,
    pub auth: AuthStore,
}

impl AppContext {
    /// Wires the stores to the browser: fetch, timers, localStorage and
    /// `window.location`.
    pub fn browser() -> Self {
        let transport: Rc<dyn HttpTransport> = Rc::new(GlooTransport);
        let sleeper: Rc<dyn Sleeper> = Rc::new(GlooSleeper);
        let credentials = Rc::new(AuthState::new(Rc::new(LocalTokenStore)));

        let client = ApiClient::new(
            transport.clone(),
            credentials.clone(),
            Rc::new(BrowserNavigator),
        );

        Self {
            kiosks: KioskStore::from_config(KioskService::new(client), sleeper.clone()),
            dialogs: KioskDialogs::from_config(sleeper),
            auth: AuthStore::new(credentials, AuthService::new(transport)),
        }
    }
}
