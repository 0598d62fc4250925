// ============================================================================
// KIOSK FILTER - keyword box + filter panel
// ============================================================================
// The keyword box feeds the store on every keystroke (the store debounces).
// The panel is validated as a whole on submit; reset clears every filter.
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::error::FormErrors;
use crate::forms::{KioskFilterForm, ALL_OPTION};
use crate::models::{FilterPatch, KioskStatus, KioskType, QueryParams};

#[derive(Properties, PartialEq)]
pub struct KioskFilterProps {
    pub params: QueryParams,
    pub is_loading: bool,
    pub on_filter: Callback<FilterPatch>,
}

type Setter = fn(&mut KioskFilterForm, String);

#[function_component(KioskFilter)]
pub fn kiosk_filter(props: &KioskFilterProps) -> Html {
    let draft = {
        let params = props.params.clone();
        use_state(move || KioskFilterForm::from_params(&params))
    };
    let errors = use_state(|| None::<FormErrors>);

    let on_keyword = props.on_filter.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        FilterPatch::keyword(input.value())
    });

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

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let on_filter = props.on_filter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let today = chrono::Local::now().date_naive();
            match draft.to_patch(today) {
                Ok(patch) => {
                    errors.set(None);
                    on_filter.emit(patch);
                }
                Err(invalid) => {
                    log::debug!("🔎 Filter rejected: {}", invalid);
                    errors.set(Some(invalid));
                }
            }
        })
    };

    let on_reset = {
        let draft = draft.clone();
        let errors = errors.clone();
        let on_filter = props.on_filter.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(KioskFilterForm {
                status: ALL_OPTION.to_string(),
                kiosk_type: ALL_OPTION.to_string(),
                ..KioskFilterForm::default()
            });
            errors.set(None);
            on_filter.emit(FilterPatch::cleared());
        })
    };

    let field_error = |field: &str| -> Html {
        match (*errors).as_ref().and_then(|e| e.get(field)) {
            Some(message) => html! { <p class="field-error">{message.to_string()}</p> },
            None => html! {},
        }
    };

    let status_options = KioskStatus::ALL.into_iter().map(|status| {
        html! {
            <option value={status.as_str()} selected={draft.status == status.as_str()}>
                {status.as_str()}
            </option>
        }
    });
    let type_options = KioskType::ALL.into_iter().map(|kiosk_type| {
        html! {
            <option value={kiosk_type.code().to_string()} selected={draft.kiosk_type == kiosk_type.code()}>
                {kiosk_type.label().to_string()}
            </option>
        }
    });

    html! {
        <section class="kiosk-filter">
            <input
                type="search"
                class="keyword"
                placeholder="Search kiosks..."
                value={props.params.keyword.clone()}
                oninput={on_keyword}
            />

            <form class="filter-panel" onsubmit={on_submit}>
                <label>
                    {"From"}
                    <input type="date" value={draft.start_date.clone()}
                        oninput={bind_input(|f, v| f.start_date = v)} />
                    {field_error("start_date")}
                </label>
                <label>
                    {"To"}
                    <input type="date" value={draft.end_date.clone()}
                        oninput={bind_input(|f, v| f.end_date = v)} />
                    {field_error("end_date")}
                </label>
                <label>
                    {"Status"}
                    <select onchange={bind_select(|f, v| f.status = v)}>
                        <option value={ALL_OPTION} selected={draft.status == ALL_OPTION}>{"All"}</option>
                        {for status_options}
                    </select>
                    {field_error("status")}
                </label>
                <label>
                    {"Type"}
                    <select onchange={bind_select(|f, v| f.kiosk_type = v)}>
                        <option value={ALL_OPTION} selected={draft.kiosk_type == ALL_OPTION}>{"All"}</option>
                        {for type_options}
                    </select>
                    {field_error("kiosk_type")}
                </label>
                <label>
                    {"Location"}
                    <input type="text" value={draft.location.clone()}
                        oninput={bind_input(|f, v| f.location = v)} />
                    {field_error("location")}
                </label>
                <label>
                    {"Search"}
                    <input type="text" value={draft.search.clone()}
                        oninput={bind_input(|f, v| f.search = v)} />
                    {field_error("search")}
                </label>

                <button type="submit" disabled={props.is_loading}>{"Apply"}</button>
                <button type="button" onclick={on_reset}>{"Reset"}</button>
            </form>
        </section>
    }
}
