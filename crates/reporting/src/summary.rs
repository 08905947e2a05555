//! Aggregate statistics over a (usually filtered) record view, plus the
//! per-record cost-per-result efficiency metric.

use ads_core::types::{CampaignRecord, SummaryStatistics};
use rust_decimal::Decimal;

/// Sum cost, results, and reach. Cost accumulates in `Decimal`, so totals
/// carry no floating rounding drift. Empty input yields an all-zero
/// summary; order of the input does not matter.
pub fn summarize(records: &[CampaignRecord]) -> SummaryStatistics {
    let mut summary = SummaryStatistics::default();
    for record in records {
        summary.total_cost += record.cost;
        summary.total_results += record.results;
        summary.total_reach += record.reach;
    }
    summary
}

/// Cost divided by results, rounded to 2 decimal places. `None` when the
/// campaign has no results; callers render that as a "no data" placeholder
/// rather than a zero or an infinity.
pub fn cost_per_result(record: &CampaignRecord) -> Option<Decimal> {
    if record.results == 0 {
        return None;
    }
    Some((record.cost / Decimal::from(record.results)).round_dp(2))
}

/// Currency display formatting, always two decimal places.
pub fn format_currency(value: Decimal) -> String {
    let mut value = value.round_dp(2);
    value.rescale(2);
    format!("R$ {value}")
}
