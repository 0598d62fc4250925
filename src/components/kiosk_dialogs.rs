// ============================================================================
// KIOSK DIALOGS - add / edit / view / delete
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::error::{ErrorInfo, FormErrors};
use crate::forms::KioskForm;
use crate::models::{Kiosk, KioskStatus, KioskType};
use crate::state::{DialogKind, DialogState};

#[derive(Properties, PartialEq)]
pub struct KioskDialogsProps {
    pub state: DialogState,
    pub on_close: Callback<()>,
    pub on_submit: Callback<KioskForm>,
    pub on_confirm_delete: Callback<()>,
}

#[function_component(KioskDialogsView)]
pub fn kiosk_dialogs_view(props: &KioskDialogsProps) -> Html {
    let state = &props.state;
    let Some(kind) = state.open else {
        return html! {};
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    let body = match (kind, &state.current) {
        (DialogKind::View, Some(kiosk)) => html! { <KioskDetails kiosk={kiosk.clone()} /> },
        (DialogKind::Delete, Some(kiosk)) => html! {
            <div class="confirm-delete">
                <p>
                    {"Delete "}<strong>{kiosk.name.clone()}</strong>{format!(" ({})?", kiosk.id)}
                    <br />{"This cannot be undone."}
                </p>
                if let Some(error) = &state.error {
                    <p class="form-error">{error.to_string()}</p>
                }
                <button class="danger" disabled={state.submitting}
                    onclick={props.on_confirm_delete.reform(|_: MouseEvent| ())}>
                    {if state.submitting { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        },
        (DialogKind::Add, _) | (DialogKind::Edit, _) => {
            let editing = if kind == DialogKind::Edit { state.current.clone() } else { None };
            let key = editing.as_ref().map(|k| k.id.clone()).unwrap_or_else(|| "new".to_string());
            html! {
                <KioskFormDialog
                    key={key}
                    editing={editing}
                    submitting={state.submitting}
                    form_errors={state.form_errors.clone()}
                    error={state.error.clone()}
                    on_submit={props.on_submit.clone()}
                />
            }
        }
        // View/Delete without a row: nothing to show
        _ => html! {},
    };

    let title = match kind {
        DialogKind::Add => "Add kiosk",
        DialogKind::Edit => "Edit kiosk",
        DialogKind::View => "Kiosk details",
        DialogKind::Delete => "Delete kiosk",
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog">
                <header>
                    <h3>{title}</h3>
                    <button class="close" onclick={on_close}>{"×"}</button>
                </header>
                {body}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct KioskDetailsProps {
    kiosk: Kiosk,
}

#[function_component(KioskDetails)]
fn kiosk_details(props: &KioskDetailsProps) -> Html {
    let kiosk = &props.kiosk;
    let row = |label: &str, value: String| {
        html! { <><dt>{label.to_string()}</dt><dd>{value}</dd></> }
    };
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    html! {
        <dl class="kiosk-details">
            {row("ID", kiosk.id.clone())}
            {row("Name", kiosk.name.clone())}
            {row("Type", kiosk.kiosk_type.label().to_string())}
            {row("Status", kiosk.status.to_string())}
            {row("Location", kiosk.location.clone())}
            {row("Info", optional(&kiosk.info))}
            {row("Installed", kiosk.installed_at.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()))}
            {row("Last seen", kiosk.last_seen_at.map(|t| t.to_rfc3339()).unwrap_or_else(|| "-".to_string()))}
            {row("Registered", optional(&kiosk.reg_dt))}
            {row("Registered by", optional(&kiosk.reg_user_id))}
            {row("Modified", optional(&kiosk.mod_dt))}
            {row("Modified by", optional(&kiosk.mod_user_id))}
        </dl>
    }
}

#[derive(Properties, PartialEq)]
struct KioskFormDialogProps {
    editing: Option<Kiosk>,
    submitting: bool,
    form_errors: Option<FormErrors>,
    error: Option<ErrorInfo>,
    on_submit: Callback<KioskForm>,
}

type Setter = fn(&mut KioskForm, String);

#[function_component(KioskFormDialog)]
fn kiosk_form_dialog(props: &KioskFormDialogProps) -> Html {
    let draft = {
        let editing = props.editing.clone();
        use_state(move || editing.as_ref().map(KioskForm::from_kiosk).unwrap_or_default())
    };

    let bind_input = |set: Setter| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            set(&mut next, input.value());
            draft.set(next);
        })
    };
    let bind_select = |set: Setter| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            set(&mut next, select.value());
            draft.set(next);
        })
    };
    let on_info = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.info = area.value();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*draft).clone());
        })
    };

    let field_error = |field: &str| -> Html {
        match props.form_errors.as_ref().and_then(|e| e.get(field)) {
            Some(message) => html! { <p class="field-error">{message.to_string()}</p> },
            None => html! {},
        }
    };

    let current_type = KioskType::from_code(&draft.kiosk_type);
    let unlisted_type = (!current_type.is_known()).then(|| {
        html! {
            <option value={current_type.code().to_string()} selected=true>
                {current_type.label().to_string()}
            </option>
        }
    });
    let type_options = KioskType::ALL.into_iter().map(|kiosk_type| {
        html! {
            <option value={kiosk_type.code().to_string()} selected={current_type == kiosk_type}>
                {kiosk_type.label().to_string()}
            </option>
        }
    });
    let status_options = KioskStatus::ALL.into_iter().map(|status| {
        html! {
            <option value={status.as_str()} selected={draft.status.eq_ignore_ascii_case(status.as_str())}>
                {status.as_str()}
            </option>
        }
    });

    html! {
        <form class="kiosk-form" onsubmit={on_submit}>
            <label>
                {"Name"}
                <input type="text" value={draft.name.clone()} oninput={bind_input(|f, v| f.name = v)} />
                {field_error("name")}
            </label>
            <label>
                {"Type"}
                <select onchange={bind_select(|f, v| f.kiosk_type = v)}>
                    {for unlisted_type}
                    {for type_options}
                </select>
                {field_error("kiosk_type")}
            </label>
            <label>
                {"Location"}
                <input type="text" value={draft.location.clone()} oninput={bind_input(|f, v| f.location = v)} />
                {field_error("location")}
            </label>
            <label>
                {"Status"}
                <select onchange={bind_select(|f, v| f.status = v)}>{for status_options}</select>
                {field_error("status")}
            </label>
            <label>
                {"Info"}
                <textarea value={draft.info.clone()} oninput={on_info} />
            </label>

            if let Some(error) = &props.error {
                <p class="form-error">{error.to_string()}</p>
            }

            <button type="submit" disabled={props.submitting}>
                {if props.submitting { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}
