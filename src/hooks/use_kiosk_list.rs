use yew::prelude::*;

use crate::models::{FilterPatch, Kiosk, SortOrder};
use crate::state::ListState;
use crate::stores::KioskStore;

pub struct UseKioskListHandle {
    pub state: ListState<Kiosk>,
    pub change_page: Callback<u32>,
    pub change_sort: Callback<(String, SortOrder)>,
    pub change_filter: Callback<FilterPatch>,
    pub refetch: Callback<()>,
}

/// Binds a component to the kiosk list and loads the first page on mount.
#[hook]
pub fn use_kiosk_list(store: &KioskStore) -> UseKioskListHandle {
    let trigger = use_force_update();

    // Re-render on every store change
    use_effect_with(store.clone(), move |store| {
        let id = store.subscribe(move || trigger.force_update());
        let store = store.clone();
        move || store.unsubscribe(id)
    });

    // Initial load
    use_effect_with(store.clone(), |store| {
        let store = store.clone();
        wasm_bindgen_futures::spawn_local(async move {
            store.fetch().await;
        });
        || ()
    });

    let change_page = {
        let store = store.clone();
        Callback::from(move |page: u32| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.change_page(page).await;
            });
        })
    };

    let change_sort = {
        let store = store.clone();
        Callback::from(move |(sort_by, order): (String, SortOrder)| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.change_sort(&sort_by, order).await;
            });
        })
    };

    let change_filter = {
        let store = store.clone();
        Callback::from(move |patch: FilterPatch| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.change_filter(patch).await;
            });
        })
    };

    let refetch = {
        let store = store.clone();
        Callback::from(move |_| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.refetch().await;
            });
        })
    };

    UseKioskListHandle {
        state: store.snapshot(),
        change_page,
        change_sort,
        change_filter,
        refetch,
    }
}
