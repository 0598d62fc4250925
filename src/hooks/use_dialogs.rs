use yew::prelude::*;

use crate::forms::KioskForm;
use crate::models::Kiosk;
use crate::state::{DialogKind, DialogState, KioskDialogs};
use crate::stores::KioskStore;

pub struct UseDialogsHandle {
    pub state: DialogState,
    pub open: Callback<(DialogKind, Option<Kiosk>)>,
    pub close: Callback<()>,
    pub submit: Callback<KioskForm>,
    pub confirm_delete: Callback<()>,
}

#[hook]
pub fn use_dialogs(dialogs: &KioskDialogs, store: &KioskStore) -> UseDialogsHandle {
    let trigger = use_force_update();

    use_effect_with(dialogs.clone(), move |dialogs| {
        let id = dialogs.subscribe(move || trigger.force_update());
        let dialogs = dialogs.clone();
        move || dialogs.unsubscribe(id)
    });

    let open = {
        let dialogs = dialogs.clone();
        Callback::from(move |(kind, kiosk): (DialogKind, Option<Kiosk>)| {
            dialogs.open(kind, kiosk);
        })
    };

    let close = {
        let dialogs = dialogs.clone();
        Callback::from(move |_| {
            wasm_bindgen_futures::spawn_local(dialogs.close());
        })
    };

    let submit = {
        let dialogs = dialogs.clone();
        let store = store.clone();
        Callback::from(move |form: KioskForm| {
            let dialogs = dialogs.clone();
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Errors are kept in the dialog state and rendered there
                if let Err(e) = dialogs.submit(&store, &form).await {
                    log::warn!("⚠️ Kiosk not saved: {}", e);
                }
            });
        })
    };

    let confirm_delete = {
        let dialogs = dialogs.clone();
        let store = store.clone();
        Callback::from(move |_| {
            let dialogs = dialogs.clone();
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = dialogs.confirm_delete(&store).await {
                    log::warn!("⚠️ Kiosk not deleted: {}", e);
                }
            });
        })
    };

    UseDialogsHandle {
        state: dialogs.snapshot(),
        open,
        close,
        submit,
        confirm_delete,
    }
}
