use yew::prelude::*;

use super::{KiosksPage, SignIn};
use crate::hooks::{use_auth, AppContext};

#[function_component(App)]
pub fn app() -> Html {
    let context = use_memo((), |_| AppContext::browser());
    let auth = use_auth(&context.auth);

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            if auth.state.authenticated {
                <KiosksPage on_logout={auth.logout.clone()} />
            } else {
                <SignIn
                    on_login={auth.login.clone()}
                    signing_in={auth.state.signing_in}
                    form_errors={auth.state.form_errors.clone()}
                    error={auth.state.error.clone()}
                />
            }
        </ContextProvider<AppContext>>
    }
}
