use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One advertising campaign's tracked metrics and date range.
///
/// Identities are positive integers assigned by the record store
/// (max existing + 1) and never reused within a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: u64,
    pub name: String,
    pub media: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub cost: Decimal,
    pub results: u64,
    pub reach: u64,
}

/// A campaign as produced by the create/edit form, before the store
/// has assigned (or re-attached) an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub name: String,
    pub media: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub cost: Decimal,
    pub results: u64,
    pub reach: u64,
}

impl CampaignDraft {
    pub fn into_record(self, id: u64) -> CampaignRecord {
        CampaignRecord {
            id,
            name: self.name,
            media: self.media,
            start: self.start,
            end: self.end,
            cost: self.cost,
            results: self.results,
            reach: self.reach,
        }
    }
}

/// The active combination of text/media/date constraints narrowing the
/// displayed record set. All fields optional; default matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against name or media channel.
    #[serde(default)]
    pub query: String,
    /// Exact (case-sensitive) media channel match.
    #[serde(default)]
    pub media: Option<String>,
    /// Inclusive lower bound compared against the campaign start date.
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound compared against the campaign end date.
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

/// Totals over the currently filtered view, not the full store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_cost: Decimal,
    pub total_results: u64,
    pub total_reach: u64,
}

/// Drawing surface dimensions, in abstract pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

/// An abstract drawing instruction consumed by a rendering adapter,
/// independent of any specific graphics API. Colors are CSS-style hex
/// strings; geometry is display-only f64.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &'static str,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        fill: &'static str,
    },
}
