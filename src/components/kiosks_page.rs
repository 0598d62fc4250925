// ============================================================================
// KIOSKS PAGE - list + filter + pagination + dialogs
// ============================================================================

use yew::prelude::*;

use super::{KioskDialogsView, KioskFilter, KioskPagination, KioskTable};
use crate::hooks::{use_dialogs, use_kiosk_list, AppContext};
use crate::models::Kiosk;
use crate::state::DialogKind;

#[derive(Properties, PartialEq)]
pub struct KiosksPageProps {
    pub on_logout: Callback<()>,
}

#[function_component(KiosksPage)]
pub fn kiosks_page(props: &KiosksPageProps) -> Html {
    match use_context::<AppContext>() {
        Some(context) => html! {
            <KiosksScreen context={context} on_logout={props.on_logout.clone()} />
        },
        None => {
            log::error!("❌ KiosksPage rendered outside the app context");
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
struct KiosksScreenProps {
    context: AppContext,
    on_logout: Callback<()>,
}

#[function_component(KiosksScreen)]
fn kiosks_screen(props: &KiosksScreenProps) -> Html {
    let list = use_kiosk_list(&props.context.kiosks);
    let dialogs = use_dialogs(&props.context.dialogs, &props.context.kiosks);

    let state = &list.state;
    let on_add = dialogs.open.reform(|_: MouseEvent| (DialogKind::Add, None));

    html! {
        <main class="kiosks-page">
            <header class="page-header">
                <div>
                    <h2>{"Kiosks"}</h2>
                    <p>{format!("{} kiosks registered", state.result.total_count)}</p>
                </div>
                <div class="page-actions">
                    <button onclick={on_add}>{"Add kiosk"}</button>
                    <button onclick={list.refetch.reform(|_: MouseEvent| ())}>{"Reload"}</button>
                    <button onclick={props.on_logout.reform(|_: MouseEvent| ())}>{"Sign out"}</button>
                </div>
            </header>

            <KioskFilter
                params={state.params.clone()}
                is_loading={state.load.is_loading}
                on_filter={list.change_filter.clone()}
            />

            if let Some(error) = &state.load.error {
                <p class="list-error">{error.to_string()}</p>
            }
            if let Some(error) = &state.mutation_error {
                <p class="list-error">{error.to_string()}</p>
            }

            <KioskTable
                items={state.result.items.clone()}
                params={state.params.clone()}
                is_loading={state.load.is_loading}
                on_sort={list.change_sort.clone()}
                on_action={dialogs
                    .open
                    .reform(|(kind, kiosk): (DialogKind, Kiosk)| (kind, Some(kiosk)))}
            />

            <KioskPagination
                result={state.result.clone()}
                page={state.params.page}
                on_page={list.change_page.clone()}
            />

            <KioskDialogsView
                state={dialogs.state.clone()}
                on_close={dialogs.close.clone()}
                on_submit={dialogs.submit.clone()}
                on_confirm_delete={dialogs.confirm_delete.clone()}
            />
        </main>
    }
}
