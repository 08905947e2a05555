//! The coordinator re-runs the whole filter → aggregate → render pipeline
//! on every external event. No partial updates: at this data scale a full
//! synchronous recompute is cheaper than tracking invalidation.

use crate::debounce::Debouncer;
use crate::sinks::{CampaignRow, ViewSinks};
use ads_core::types::{FilterCriteria, Surface};
use ads_reporting::{cost_per_result, filter, render, summarize};
use ads_store::RecordStore;
use tracing::debug;

/// Holds only the last applied criteria and surface size; everything else
/// is re-derived from the store on demand.
pub struct ViewCoordinator {
    criteria: FilterCriteria,
    surface: Surface,
    query_debounce: Debouncer<String>,
}

impl ViewCoordinator {
    pub fn new(surface: Surface, debounce_quiet: u64) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            surface,
            query_debounce: Debouncer::new(debounce_quiet),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Replace the criteria wholesale (media/date selectors apply
    /// immediately, unlike keystrokes) and recompute.
    pub fn set_criteria(&mut self, criteria: FilterCriteria, store: &RecordStore, sinks: &mut dyn ViewSinks) {
        self.query_debounce.cancel();
        self.criteria = criteria;
        self.refresh(store, sinks);
    }

    /// A record was created, updated, or deleted.
    pub fn on_records_changed(&mut self, store: &RecordStore, sinks: &mut dyn ViewSinks) {
        self.refresh(store, sinks);
    }

    /// The drawing surface changed size; recompute against the current
    /// record set.
    pub fn on_surface_resized(&mut self, surface: Surface, store: &RecordStore, sinks: &mut dyn ViewSinks) {
        self.surface = surface;
        self.refresh(store, sinks);
    }

    /// Buffer a free-text query keystroke. Nothing recomputes until the
    /// quiet window elapses without further input; each call restarts the
    /// window.
    pub fn on_query_input(&mut self, now: u64, query: impl Into<String>) {
        self.query_debounce.schedule(now, query.into());
    }

    /// Advance the debounce clock. Applies a matured query and recomputes;
    /// returns whether a recompute ran.
    pub fn tick(&mut self, now: u64, store: &RecordStore, sinks: &mut dyn ViewSinks) -> bool {
        match self.query_debounce.poll(now) {
            Some(query) => {
                self.criteria.query = query;
                self.refresh(store, sinks);
                true
            }
            None => false,
        }
    }

    /// One full pipeline pass: filter, summarize, chart, hand off.
    pub fn refresh(&self, store: &RecordStore, sinks: &mut dyn ViewSinks) {
        let filtered = filter(store.list(), &self.criteria);
        debug!(
            total = store.len(),
            filtered = filtered.len(),
            "Recomputing view"
        );

        let rows: Vec<CampaignRow> = filtered
            .iter()
            .map(|record| CampaignRow {
                cost_per_result: cost_per_result(record),
                record: record.clone(),
            })
            .collect();
        let summary = summarize(&filtered);
        let items: Vec<(String, _)> = filtered
            .iter()
            .map(|r| (r.name.clone(), r.cost))
            .collect();
        let commands = render(&items, self.surface);

        sinks.table(&rows);
        sinks.summary(&summary);
        sinks.chart(&commands);
    }
}
