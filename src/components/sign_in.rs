use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::error::{ErrorInfo, FormErrors};
use crate::forms::SignInForm;

#[derive(Properties, PartialEq)]
pub struct SignInProps {
    pub on_login: Callback<SignInForm>,
    pub signing_in: bool,
    pub form_errors: Option<FormErrors>,
    pub error: Option<ErrorInfo>,
}

#[function_component(SignIn)]
pub fn sign_in(props: &SignInProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let (Some(email), Some(password)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                on_login.emit(SignInForm {
                    user_id: email.value(),
                    password: password.value(),
                });
            }
        })
    };

    let field_error = |field: &str| -> Html {
        match props.form_errors.as_ref().and_then(|errors| errors.get(field)) {
            Some(message) => html! { <p class="field-error">{message.to_string()}</p> },
            None => html! {},
        }
    };

    html! {
        <div class="sign-in">
            <h1>{"Sign in"}</h1>
            <form class="sign-in-form" onsubmit={on_submit}>
                <label for="email">{"Email"}</label>
                <input type="email" id="email" placeholder="name@example.com" ref={email_ref} />
                {field_error("user_id")}

                <label for="password">{"Password"}</label>
                <input type="password" id="password" ref={password_ref} />
                {field_error("password")}

                if let Some(error) = &props.error {
                    <p class="form-error">{error.to_string()}</p>
                }

                <button type="submit" disabled={props.signing_in}>
                    {if props.signing_in { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
