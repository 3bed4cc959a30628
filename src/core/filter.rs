//! Derives the visible list from the category and status predicates.
//!
//! The engine works on a baseline that starts as the seed dataset and is
//! reconciled with the live store before every recompute, so patches and
//! deletions made since the last recompute are carried over instead of
//! being overwritten by the seed.

use crate::core::store::StoreHandle;
use crate::errors::{AppError, AppResult};
use crate::models::filters::ALL_CATEGORIES;
use crate::models::{CategoryFilter, Prescription, StatusFilter};
use crate::ui::Notifier;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

pub struct FilterEngine {
    store: StoreHandle,
    baseline: Vec<Prescription>,
    emitted: HashSet<String>,
    categories: Vec<String>,
    category: CategoryFilter,
    status: StatusFilter,
}

impl FilterEngine {
    pub fn new(seed: &[Prescription], store: StoreHandle) -> Self {
        Self {
            store,
            baseline: seed.to_vec(),
            emitted: seed.iter().map(|p| p.id.clone()).collect(),
            categories: categories_of(seed),
            category: CategoryFilter::All,
            status: StatusFilter::Any,
        }
    }

    /// "All" followed by the distinct seed categories in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn set_category(
        &mut self,
        category: CategoryFilter,
        notifier: &mut dyn Notifier,
    ) -> AppResult<()> {
        self.category = category;
        self.apply(notifier)
    }

    pub fn set_status(&mut self, status: StatusFilter, notifier: &mut dyn Notifier) -> AppResult<()> {
        self.status = status;
        self.apply(notifier)
    }

    /// Recompute the visible list and write it into the store.
    ///
    /// Operational failures fall back to [`FilterEngine::reset`] after an
    /// error notice; scope errors propagate.
    pub fn apply(&mut self, notifier: &mut dyn Notifier) -> AppResult<()> {
        self.reconcile()?;

        match self.compute() {
            Ok(list) => {
                debug!(
                    category = %self.category,
                    status = self.status.label(),
                    visible = list.len(),
                    "filters applied"
                );
                self.emit(list)
            }
            Err(e) if !e.is_fatal() => {
                warn!(error = %e, "filter failed, resetting");
                notifier.error(&format!("Failed to apply filters: {e}"));
                self.reset()
            }
            Err(e) => Err(e),
        }
    }

    /// Back to "All" / any status, showing the whole baseline sorted by name.
    pub fn reset(&mut self) -> AppResult<()> {
        self.reconcile()?;
        self.category = CategoryFilter::All;
        self.status = StatusFilter::Any;

        let mut list = self.baseline.clone();
        sort_by_name(&mut list);
        debug!(visible = list.len(), "filters reset");
        self.emit(list)
    }

    fn compute(&self) -> AppResult<Vec<Prescription>> {
        if let CategoryFilter::Exact(c) = &self.category
            && !self.categories.iter().skip(1).any(|known| known == c)
        {
            return Err(AppError::UnknownCategory(c.clone()));
        }

        let mut list: Vec<Prescription> = self
            .baseline
            .iter()
            .filter(|p| self.category.matches(&p.category))
            .filter(|p| self.status.matches(p.active))
            .cloned()
            .collect();
        sort_by_name(&mut list);
        Ok(list)
    }

    /// Fold the store's current contents back into the baseline.
    fn reconcile(&mut self) -> AppResult<()> {
        let live = self.store.get_all()?;
        let mut by_id: HashMap<&str, &Prescription> =
            live.iter().map(|p| (p.id.as_str(), p)).collect();

        let emitted = &self.emitted;
        self.baseline.retain_mut(|p| match by_id.remove(p.id.as_str()) {
            Some(current) => {
                *p = current.clone();
                true
            }
            // shown last time but gone now: removed from the store
            None => !emitted.contains(&p.id),
        });

        // records the store gained from elsewhere
        for p in &live {
            if by_id.contains_key(p.id.as_str()) {
                self.baseline.push(p.clone());
            }
        }
        Ok(())
    }

    fn emit(&mut self, list: Vec<Prescription>) -> AppResult<()> {
        self.emitted = list.iter().map(|p| p.id.clone()).collect();
        self.store.replace_all(list)
    }
}

/// Locale-style ordering: case-insensitive first, raw text as tie-break.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn sort_by_name(list: &mut [Prescription]) {
    list.sort_by(|a, b| compare_names(&a.name, &b.name));
}

pub fn categories_of(list: &[Prescription]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for p in list {
        if !out.iter().skip(1).any(|c| c == &p.category) {
            out.push(p.category.clone());
        }
    }
    out
}
