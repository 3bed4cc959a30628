//! The shared prescription store.
//!
//! A [`StoreProvider`] owns the live list for the lifetime of a session.
//! Every consumer receives a [`StoreHandle`]; a handle only works while its
//! provider is alive, so reaching the store from outside the session that
//! owns it fails with [`AppError::OutsideScope`] instead of reading nothing.

use crate::errors::{AppError, AppResult};
use crate::models::{Prescription, PrescriptionPatch};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, info};

type Shared = RefCell<Vec<Prescription>>;

pub struct StoreProvider {
    inner: Rc<Shared>,
}

impl StoreProvider {
    pub fn new(initial: Vec<Prescription>) -> Self {
        debug!(records = initial.len(), "store provider created");
        Self {
            inner: Rc::new(RefCell::new(initial)),
        }
    }

    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Cheap, clonable access to the store. `Default` gives a handle that was
/// never attached to a provider.
#[derive(Clone, Default)]
pub struct StoreHandle {
    inner: Weak<Shared>,
}

impl StoreHandle {
    fn with<R>(&self, f: impl FnOnce(&mut Vec<Prescription>) -> R) -> AppResult<R> {
        let shared = self.inner.upgrade().ok_or(AppError::OutsideScope)?;
        let mut list = shared.borrow_mut();
        Ok(f(&mut list))
    }

    /// Snapshot of the current list, in the order it was last set.
    pub fn get_all(&self) -> AppResult<Vec<Prescription>> {
        self.with(|list| list.clone())
    }

    /// Replace the whole working set. Id uniqueness is the caller's concern.
    pub fn replace_all(&self, list: Vec<Prescription>) -> AppResult<()> {
        self.with(|current| {
            debug!(from = current.len(), to = list.len(), "store replaced");
            *current = list;
        })
    }

    /// Merge `updates` into the record with the given id.
    ///
    /// Returns `false` and leaves the list untouched when no record matches.
    pub fn patch(&self, id: &str, updates: &PrescriptionPatch) -> AppResult<bool> {
        self.with(|list| match list.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.apply(updates);
                info!(id, name = %p.name, "prescription patched");
                true
            }
            None => {
                debug!(id, "patch ignored, no such prescription");
                false
            }
        })
    }

    pub fn find(&self, id: &str) -> AppResult<Option<Prescription>> {
        self.with(|list| list.iter().find(|p| p.id == id).cloned())
    }

    pub fn len(&self) -> AppResult<usize> {
        self.with(|list| list.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        self.with(|list| list.is_empty())
    }
}
