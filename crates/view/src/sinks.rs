//! External render sinks. The coordinator computes; implementations of
//! [`ViewSinks`] (terminal table, summary display, chart canvas) apply.

use ads_core::types::{CampaignRecord, DrawCommand, SummaryStatistics};
use rust_decimal::Decimal;

/// One table row: a filtered record plus its derived efficiency metric.
/// `cost_per_result` is `None` when the campaign has no results.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRow {
    pub record: CampaignRecord,
    pub cost_per_result: Option<Decimal>,
}

/// Consumers of a completed recompute pass. All three methods are called
/// on every pass, in this order.
pub trait ViewSinks {
    fn table(&mut self, rows: &[CampaignRow]);
    fn summary(&mut self, summary: &SummaryStatistics);
    fn chart(&mut self, commands: &[DrawCommand]);
}
