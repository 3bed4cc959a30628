//! Two-phase removal: nothing leaves the store until the request is confirmed.

use crate::core::detail::DetailView;
use crate::core::store::StoreHandle;
use crate::errors::{AppError, AppResult};
use crate::models::Prescription;
use crate::ui::Notifier;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletionState {
    #[default]
    Idle,
    PendingConfirmation { id: String },
    Deleted { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted(Prescription),
    /// The record was already gone when the request was confirmed.
    Missing(String),
}

#[derive(Debug, Default)]
pub struct DeletionWorkflow {
    state: DeletionState,
}

impl DeletionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    pub fn pending_id(&self) -> Option<&str> {
        match &self.state {
            DeletionState::PendingConfirmation { id } => Some(id),
            _ => None,
        }
    }

    /// Ask for confirmation. A newer request replaces a pending one.
    pub fn request_delete(&mut self, id: &str) {
        self.state = DeletionState::PendingConfirmation { id: id.to_string() };
    }

    pub fn cancel(&mut self) -> AppResult<()> {
        if self.pending_id().is_none() {
            return Err(AppError::NoPendingDeletion);
        }
        self.state = DeletionState::Idle;
        Ok(())
    }

    /// Remove the pending record and close the detail view.
    ///
    /// A record that vanished in the meantime is reported through the
    /// notifier, not as an error.
    pub fn confirm(
        &mut self,
        store: &StoreHandle,
        detail: &mut DetailView,
        notifier: &mut dyn Notifier,
    ) -> AppResult<DeletionOutcome> {
        let id = self
            .pending_id()
            .map(str::to_string)
            .ok_or(AppError::NoPendingDeletion)?;

        let mut list = store.get_all()?;
        let Some(pos) = list.iter().position(|p| p.id == id) else {
            warn!(id = %id, "delete confirmed for a missing prescription");
            detail.close();
            notifier.error("Failed to delete prescription");
            self.state = DeletionState::Idle;
            return Ok(DeletionOutcome::Missing(id));
        };

        let removed = list.remove(pos);
        store.replace_all(list)?;
        detail.close();

        info!(id = %id, name = %removed.name, "prescription deleted");
        notifier.success(
            "Prescription deleted",
            &format!("{} has been removed from your cabinet", removed.name),
        );
        self.state = DeletionState::Deleted {
            name: removed.name.clone(),
        };
        Ok(DeletionOutcome::Deleted(removed))
    }
}
