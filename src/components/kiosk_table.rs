use yew::prelude::*;

use crate::models::{Kiosk, QueryParams, SortOrder};
use crate::state::DialogKind;

/// Sortable columns: (wire key, header)
const COLUMNS: [(&str, &str); 5] = [
    ("kioskId", "ID"),
    ("kioskNm", "Name"),
    ("kioskTp", "Type"),
    ("status", "Status"),
    ("position", "Location"),
];

#[derive(Properties, PartialEq)]
pub struct KioskTableProps {
    pub items: Vec<Kiosk>,
    pub params: QueryParams,
    pub is_loading: bool,
    pub on_sort: Callback<(String, SortOrder)>,
    pub on_action: Callback<(DialogKind, Kiosk)>,
}

#[function_component(KioskTable)]
pub fn kiosk_table(props: &KioskTableProps) -> Html {
    let headers = COLUMNS.iter().map(|(key, label)| {
        let active = props.params.sort_by == *key;
        // Same column flips the order, a new column starts ascending
        let next = if active {
            props.params.sort_order.toggled()
        } else {
            SortOrder::Asc
        };
        let marker = match (active, props.params.sort_order) {
            (false, _) => "",
            (true, SortOrder::Asc) => " ▲",
            (true, SortOrder::Desc) => " ▼",
        };
        let key = key.to_string();
        let onclick = props.on_sort.reform(move |_: MouseEvent| (key.clone(), next));
        html! {
            <th class="sortable" {onclick}>{format!("{}{}", label, marker)}</th>
        }
    });

    let rows = props.items.iter().map(|kiosk| {
        let action = |kind: DialogKind| {
            let kiosk = kiosk.clone();
            props.on_action.reform(move |_: MouseEvent| (kind, kiosk.clone()))
        };
        html! {
            <tr key={kiosk.id.clone()}>
                <td>{kiosk.id.clone()}</td>
                <td>{kiosk.name.clone()}</td>
                <td>{kiosk.kiosk_type.label().to_string()}</td>
                <td><span class={classes!("status", kiosk.status.as_str())}>{kiosk.status.as_str()}</span></td>
                <td>{kiosk.location.clone()}</td>
                <td class="row-actions">
                    <button onclick={action(DialogKind::View)}>{"View"}</button>
                    <button onclick={action(DialogKind::Edit)}>{"Edit"}</button>
                    <button class="danger" onclick={action(DialogKind::Delete)}>{"Delete"}</button>
                </td>
            </tr>
        }
    });

    html! {
        <table class={classes!("kiosk-table", props.is_loading.then_some("loading"))}>
            <thead>
                <tr>
                    {for headers}
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                if props.items.is_empty() {
                    <tr>
                        <td colspan="6" class="empty">
                            {if props.is_loading { "Loading..." } else { "No kiosks found" }}
                        </td>
                    </tr>
                } else {
                    {for rows}
                }
            </tbody>
        </table>
    }
}
