// ============================================================================
// DIALOG STATE - which kiosk dialog is open and for which row
// ============================================================================
// Closing hides the dialog at once; the selected row is cleared a moment
// later so the closing animation still has data. Opening another dialog in
// that window cancels the pending clear.
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::config::CONFIG;
use crate::error::{ApiError, AppError, ErrorInfo, FormErrors};
use crate::forms::KioskForm;
use crate::models::Kiosk;
use crate::state::{ReactiveState, SubscriptionId};
use crate::stores::KioskStore;
use crate::utils::Sleeper;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogKind {
    Add,
    Edit,
    Delete,
    View,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct DialogState {
    pub open: Option<DialogKind>,
    /// Row the dialog works on; `None` for Add
    pub current: Option<Kiosk>,
    pub submitting: bool,
    pub form_errors: Option<FormErrors>,
    pub error: Option<ErrorInfo>,
}

impl DialogState {
    pub fn is_open(&self, kind: DialogKind) -> bool {
        self.open == Some(kind)
    }
}

struct Inner {
    state: ReactiveState<DialogState>,
    sleeper: Rc<dyn Sleeper>,
    clear_delay: Duration,
    epoch: Cell<u64>,
}

#[derive(Clone)]
pub struct KioskDialogs {
    inner: Rc<Inner>,
}

impl PartialEq for KioskDialogs {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl KioskDialogs {
    pub fn new(sleeper: Rc<dyn Sleeper>, clear_delay: Duration) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: ReactiveState::new(DialogState::default()),
                sleeper,
                clear_delay,
                epoch: Cell::new(0),
            }),
        }
    }

    pub fn from_config(sleeper: Rc<dyn Sleeper>) -> Self {
        Self::new(sleeper, CONFIG.dialog_clear_delay())
    }

    pub fn snapshot(&self) -> DialogState {
        self.inner.state.snapshot()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.inner.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.state.unsubscribe(id);
    }

    pub fn open(&self, kind: DialogKind, kiosk: Option<Kiosk>) {
        self.bump_epoch();
        log::debug!("🪟 Open {:?} dialog", kind);
        self.inner.state.set(DialogState {
            open: Some(kind),
            current: kiosk,
            ..DialogState::default()
        });
    }

    /// Hides the dialog now. The returned future clears the selected row
    /// after the configured delay; drop it to keep the row.
    pub fn close(&self) -> impl Future<Output = ()> + 'static {
        let epoch = self.bump_epoch();
        self.inner.state.update(|s| {
            s.open = None;
            s.submitting = false;
        });

        let this = self.clone();
        async move {
            this.inner.sleeper.sleep(this.inner.clear_delay).await;
            if this.inner.epoch.get() == epoch {
                this.inner.state.update(|s| {
                    s.current = None;
                    s.form_errors = None;
                    s.error = None;
                });
            }
        }
    }

    /// Saves the add/edit form: updates the selected row when editing,
    /// creates otherwise. On success the dialog closes; on failure it stays
    /// open with the errors recorded.
    pub async fn submit(
        &self,
        store: &KioskStore,
        form: &KioskForm,
    ) -> Result<Option<Kiosk>, AppError> {
        let editing = {
            let state = self.inner.state.get();
            match state.open {
                Some(DialogKind::Edit) => state.current.clone(),
                _ => None,
            }
        };

        self.inner.state.update(|s| {
            s.submitting = true;
            s.form_errors = None;
            s.error = None;
        });

        let outcome = self.save(store, form, editing).await;

        match outcome {
            Ok(saved) => {
                self.close().await;
                Ok(saved)
            }
            Err(e) => {
                self.inner.state.update(|s| {
                    s.submitting = false;
                    match &e {
                        AppError::Validation(errors) => s.form_errors = Some(errors.clone()),
                        AppError::Api(api) => s.error = Some(ErrorInfo::from(api)),
                    }
                });
                Err(e)
            }
        }
    }

    /// Deletes the selected row. Does nothing when no row is selected.
    pub async fn confirm_delete(&self, store: &KioskStore) -> Result<(), ApiError> {
        let Some(kiosk) = self.inner.state.get().current.clone() else {
            log::warn!("⚠️ Delete confirmed without a selected kiosk");
            return Ok(());
        };

        self.inner.state.update(|s| {
            s.submitting = true;
            s.error = None;
        });

        match store.delete(&kiosk.id).await {
            Ok(()) => {
                self.close().await;
                Ok(())
            }
            Err(e) => {
                self.inner.state.update(|s| {
                    s.submitting = false;
                    s.error = Some(ErrorInfo::from(&e));
                });
                Err(e)
            }
        }
    }

    async fn save(
        &self,
        store: &KioskStore,
        form: &KioskForm,
        editing: Option<Kiosk>,
    ) -> Result<Option<Kiosk>, AppError> {
        match editing {
            Some(kiosk) => {
                let record = form.apply_to(&kiosk)?;
                Ok(Some(store.update(&record).await?))
            }
            None => {
                let draft = form.to_draft()?;
                Ok(store.create(&draft).await?)
            }
        }
    }

    fn bump_epoch(&self) -> u64 {
        let epoch = self.inner.epoch.get() + 1;
        self.inner.epoch.set(epoch);
        epoch
    }
}
