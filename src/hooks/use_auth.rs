use yew::prelude::*;

use crate::forms::SignInForm;
use crate::stores::{AuthSnapshot, AuthStore};

pub struct UseAuthHandle {
    pub state: AuthSnapshot,
    pub login: Callback<SignInForm>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth(auth: &AuthStore) -> UseAuthHandle {
    let trigger = use_force_update();

    use_effect_with(auth.clone(), move |auth| {
        let id = auth.subscribe(move || trigger.force_update());
        let auth = auth.clone();
        move || auth.unsubscribe(id)
    });

    let login = {
        let auth = auth.clone();
        Callback::from(move |form: SignInForm| {
            let auth = auth.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = auth.login(&form).await {
                    log::warn!("⚠️ Sign-in not completed: {}", e);
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_| auth.logout())
    };

    UseAuthHandle {
        state: auth.snapshot(),
        login,
        logout,
    }
}
