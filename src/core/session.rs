//! Composition root: one session owns the store and wires every component
//! to it. Each public method is one interaction turn.

use crate::config::Config;
use crate::core::deletion::{DeletionOutcome, DeletionWorkflow};
use crate::core::detail::DetailView;
use crate::core::filter::FilterEngine;
use crate::core::log::ActivityLog;
use crate::core::notifier::LowQuantityNotifier;
use crate::core::store::{StoreHandle, StoreProvider};
use crate::errors::{AppError, AppResult};
use crate::models::seed::seed_prescriptions;
use crate::models::{CategoryFilter, Prescription, StatusFilter};
use crate::ui::{NoticeHandle, Notifier};
use tracing::info;

pub struct Session<N: Notifier> {
    config: Config,
    // Dropping the provider invalidates every handle given out below.
    _provider: StoreProvider,
    store: StoreHandle,
    filters: FilterEngine,
    alerts: LowQuantityNotifier,
    detail: DetailView,
    deletion: DeletionWorkflow,
    notifier: N,
    log: ActivityLog,
}

impl<N: Notifier> Session<N> {
    pub fn new(config: Config, notifier: N) -> AppResult<Self> {
        Self::with_dataset(config, notifier, seed_prescriptions())
    }

    /// Start a session over an arbitrary dataset instead of the seed.
    pub fn with_dataset(config: Config, notifier: N, seed: Vec<Prescription>) -> AppResult<Self> {
        let provider = StoreProvider::new(seed.clone());
        let store = provider.handle();
        let filters = FilterEngine::new(&seed, store.clone());

        let mut session = Self {
            alerts: LowQuantityNotifier::new(config.low_quantity_threshold),
            config,
            _provider: provider,
            store,
            filters,
            detail: DetailView::new(),
            deletion: DeletionWorkflow::new(),
            notifier,
            log: ActivityLog::new(),
        };

        // the alert sees the data as loaded, before the first sort
        if session.config.low_quantity_alert {
            session.check_alerts()?;
        }
        session.filters.reset()?;
        info!(records = session.store.len()?, "session started");
        Ok(session)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub fn filters(&self) -> &FilterEngine {
        &self.filters
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn deletion(&self) -> &DeletionWorkflow {
        &self.deletion
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn visible(&self) -> AppResult<Vec<Prescription>> {
        self.store.get_all()
    }

    pub fn check_alerts(&mut self) -> AppResult<Option<NoticeHandle>> {
        let handle = self.alerts.check(&self.store, &mut self.notifier)?;
        if handle.is_some() {
            self.log.record("alert", "", "low quantity alert raised");
        }
        Ok(handle)
    }

    pub fn dismiss_alerts(&mut self) -> usize {
        self.notifier.dismiss_all()
    }

    pub fn filter_category(&mut self, input: &str) -> AppResult<()> {
        let category = CategoryFilter::from_input(input);
        self.filters.set_category(category, &mut self.notifier)?;
        self.record_filters();
        Ok(())
    }

    pub fn filter_status(&mut self, status: StatusFilter) -> AppResult<()> {
        self.filters.set_status(status, &mut self.notifier)?;
        self.record_filters();
        Ok(())
    }

    pub fn reset_filters(&mut self) -> AppResult<()> {
        self.filters.reset()?;
        self.log.record("reset", "", "filters reset");
        Ok(())
    }

    pub fn show(&mut self, id: &str) -> AppResult<Prescription> {
        self.detail.open(&self.store, id)
    }

    pub fn close(&mut self) {
        self.detail.close();
    }

    /// The record in the detail view, re-read from the store.
    pub fn selected(&self) -> AppResult<Option<Prescription>> {
        self.detail.current(&self.store)
    }

    pub fn set_auto_refill(&mut self, on: bool) -> AppResult<bool> {
        let patched = self
            .detail
            .toggle_auto_refill(&self.store, &mut self.notifier, on)?;
        if let (true, Some(id)) = (patched, self.detail.selected_id()) {
            let state = if on { "on" } else { "off" };
            self.log.record("patch", id, &format!("auto-refill {state}"));
        }
        Ok(patched)
    }

    /// Start a deletion for `id`, or for the record in the detail view.
    pub fn request_delete(&mut self, id: Option<&str>) -> AppResult<String> {
        let id = match id {
            Some(id) => id.to_string(),
            None => self
                .detail
                .selected_id()
                .map(str::to_string)
                .ok_or(AppError::NoSelection)?,
        };
        self.deletion.request_delete(&id);
        Ok(id)
    }

    pub fn confirm_delete(&mut self) -> AppResult<DeletionOutcome> {
        let outcome = self
            .deletion
            .confirm(&self.store, &mut self.detail, &mut self.notifier)?;
        match &outcome {
            DeletionOutcome::Deleted(p) => self.log.record("delete", &p.id, &p.name),
            DeletionOutcome::Missing(id) => self.log.record("delete", id, "not found"),
        }
        Ok(outcome)
    }

    pub fn cancel_delete(&mut self) -> AppResult<()> {
        self.deletion.cancel()
    }

    fn record_filters(&mut self) {
        let message = format!(
            "category={} status={}",
            self.filters.category(),
            self.filters.status().label()
        );
        self.log.record("filter", "", &message);
    }
}
