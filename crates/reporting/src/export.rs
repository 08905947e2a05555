//! CSV export of the full (unfiltered) record collection.

use ads_core::types::CampaignRecord;

/// Suggested file name for the exported CSV.
pub const EXPORT_FILE_NAME: &str = "campaigns_export.csv";

const HEADER: &str = "id,name,media,start,end,cost,results,reach";

/// One row per record, in store order, preceded by the header row.
///
/// Fields are joined with bare commas; commas or quotes inside text fields
/// are not escaped. Known limitation carried over from the original
/// format.
pub fn export_csv(records: &[CampaignRecord]) -> String {
    let mut lines = vec![HEADER.to_string()];
    for r in records {
        lines.push(format!(
            "{},{},{},{},{},{},{},{}",
            r.id, r.name, r.media, r.start, r.end, r.cost, r.results, r.reach
        ));
    }
    lines.join("\n")
}
