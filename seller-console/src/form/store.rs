//! Form store - single source of truth for the registration form
//!
//! A mutable document with subscribers: every committed write bumps the
//! revision and publishes a [`FormChange`] on a broadcast channel, so computed
//! views (combination table headers, submit button state) can refresh.
//!
//! ```text
//! action ──► update(field, f) ──► clone ─► f(&mut draft) ─► commit
//!                                                   │
//!                                  broadcast::Sender<FormChange>
//!                                     │          │          │
//!                                   view       view      logger
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::broadcast;

use super::model::ProductForm;

/// Default broadcast buffer; slow subscribers see `Lagged` past this
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Which part of the form a write touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Product,
    OptionGroups,
    OptionCombinations,
}

/// Change notification published after a committed write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormChange {
    pub field: FormField,
    pub revision: u64,
    /// Unix millis
    pub at: i64,
}

#[derive(Debug)]
struct StoreInner {
    form: ProductForm,
    revision: u64,
}

#[derive(Debug, Clone)]
pub struct FormStore {
    inner: Arc<RwLock<StoreInner>>,
    tx: broadcast::Sender<FormChange>,
}

impl FormStore {
    pub fn new(form: ProductForm) -> Self {
        Self::with_capacity(form, DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(form: ProductForm, capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            inner: Arc::new(RwLock::new(StoreInner { form, revision: 0 })),
            tx,
        }
    }

    /// Clone of the current document
    pub fn snapshot(&self) -> ProductForm {
        self.inner.read().form.clone()
    }

    /// Read without cloning
    pub fn read<R>(&self, f: impl FnOnce(&ProductForm) -> R) -> R {
        f(&self.inner.read().form)
    }

    pub fn revision(&self) -> u64 {
        self.inner.read().revision
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FormChange> {
        self.tx.subscribe()
    }

    /// Apply `f` to a draft copy and commit it only if `f` succeeds.
    ///
    /// A failed action leaves the document and revision untouched and
    /// publishes nothing.
    pub fn update<R, E>(
        &self,
        field: FormField,
        f: impl FnOnce(&mut ProductForm) -> Result<R, E>,
    ) -> Result<R, E> {
        let change = {
            let mut inner = self.inner.write();
            let mut draft = inner.form.clone();
            let out = f(&mut draft)?;
            inner.form = draft;
            inner.revision += 1;
            (
                out,
                FormChange {
                    field,
                    revision: inner.revision,
                    at: shared::util::now_millis(),
                },
            )
        };

        let (out, change) = change;
        tracing::trace!(field = ?change.field, revision = change.revision, "Form updated");
        // No subscribers is fine
        let _ = self.tx.send(change);
        Ok(out)
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new(ProductForm::default())
    }
}
