//! One-shot low-quantity alert.

use crate::core::store::StoreHandle;
use crate::errors::AppResult;
use crate::models::Prescription;
use crate::ui::{NoticeHandle, NoticeKind, NoticeOptions, Notifier};
use tracing::{debug, info};

pub const DEFAULT_THRESHOLD: u32 = 5;
pub const ALERT_TITLE: &str = "Low Quantity Alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlertState {
    NotShown,
    Shown,
}

/// Active records with fewer than `threshold` units left, in list order.
pub fn low_quantity(list: &[Prescription], threshold: u32) -> Vec<&Prescription> {
    list.iter().filter(|p| p.is_low(threshold)).collect()
}

pub struct LowQuantityNotifier {
    threshold: u32,
    state: AlertState,
}

impl LowQuantityNotifier {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            state: AlertState::NotShown,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn has_run(&self) -> bool {
        self.state == AlertState::Shown
    }

    /// Evaluate the store once per session.
    ///
    /// An empty store does not count as an evaluation. The first evaluation
    /// over a non-empty store consumes the guard whether or not anything
    /// qualified; later calls never raise again.
    pub fn check(
        &mut self,
        store: &StoreHandle,
        notifier: &mut dyn Notifier,
    ) -> AppResult<Option<NoticeHandle>> {
        if self.state == AlertState::Shown {
            return Ok(None);
        }

        let list = store.get_all()?;
        if list.is_empty() {
            debug!("low quantity check deferred, no data yet");
            return Ok(None);
        }
        self.state = AlertState::Shown;

        let low: Vec<String> = low_quantity(&list, self.threshold)
            .into_iter()
            .map(|p| format!("{}: {}", p.name, p.quantity))
            .collect();
        if low.is_empty() {
            debug!(threshold = self.threshold, "no prescriptions low on supply");
            return Ok(None);
        }

        info!(count = low.len(), "low quantity alert raised");
        let handle = notifier.notify(NoticeKind::Warning, ALERT_TITLE, NoticeOptions::sticky(low));
        Ok(Some(handle))
    }
}

impl Default for LowQuantityNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
