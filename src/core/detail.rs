//! Detail view over one prescription.
//!
//! Only the id is kept; the record is looked up in the live store every time
//! it is needed so the view never shows a stale copy.

use crate::core::store::StoreHandle;
use crate::errors::{AppError, AppResult};
use crate::models::{Prescription, PrescriptionPatch};
use crate::ui::Notifier;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct DetailView {
    selected: Option<String>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, store: &StoreHandle, id: &str) -> AppResult<Prescription> {
        let p = store
            .find(id)?
            .ok_or_else(|| AppError::PrescriptionNotFound(id.to_string()))?;
        debug!(id, "detail view opened");
        self.selected = Some(p.id.clone());
        Ok(p)
    }

    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            debug!("detail view closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected record as the store has it now. `None` when closed or
    /// when the record has since left the store.
    pub fn current(&self, store: &StoreHandle) -> AppResult<Option<Prescription>> {
        match &self.selected {
            Some(id) => store.find(id),
            None => Ok(None),
        }
    }

    /// Set auto-refill on the selected record. Returns whether the store was
    /// patched.
    pub fn toggle_auto_refill(
        &self,
        store: &StoreHandle,
        notifier: &mut dyn Notifier,
        on: bool,
    ) -> AppResult<bool> {
        let id = self.selected.as_deref().ok_or(AppError::NoSelection)?;

        let Some(p) = store.find(id)? else {
            notifier.error("Failed to update auto-refill status");
            return Ok(false);
        };

        if !p.auto_refill_eligible {
            warn!(id, name = %p.name, "auto-refill toggle refused");
            notifier.warning(&AppError::NotEligible(p.name).to_string());
            return Ok(false);
        }

        if !store.patch(id, &PrescriptionPatch::auto_refill(on))? {
            notifier.error("Failed to update auto-refill status");
            return Ok(false);
        }

        let state = if on { "enabled" } else { "disabled" };
        notifier.info(&format!("Auto-refill {state} for {}", p.name));
        Ok(true)
    }
}
