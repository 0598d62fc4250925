use yew::prelude::*;

use crate::models::{Kiosk, ListResult};

#[derive(Properties, PartialEq)]
pub struct KioskPaginationProps {
    pub result: ListResult<Kiosk>,
    pub page: u32,
    pub on_page: Callback<u32>,
}

#[function_component(KioskPagination)]
pub fn kiosk_pagination(props: &KioskPaginationProps) -> Html {
    let last = props.result.page_count;
    if last == 0 {
        return html! {};
    }
    let page = props.page;

    let go = |target: u32| props.on_page.reform(move |_: MouseEvent| target);

    let buttons = props.result.page_window(page).into_iter().map(|slot| match slot {
        Some(n) => html! {
            <button class={classes!("page", (n == page).then_some("current"))} onclick={go(n)}>
                {n.to_string()}
            </button>
        },
        None => html! { <span class="gap">{"…"}</span> },
    });

    html! {
        <nav class="pagination">
            <button disabled={page <= 1} onclick={go(page.saturating_sub(1).max(1))}>{"‹"}</button>
            {for buttons}
            <button disabled={page >= last} onclick={go((page + 1).min(last))}>{"›"}</button>
            <span class="page-info">{format!("Page {} of {}", page, last)}</span>
        </nav>
    }
}
