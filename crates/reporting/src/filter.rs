//! Pure record filtering. Stable: output is a subsequence of the input
//! in original order, never a sort.

use ads_core::types::{CampaignRecord, FilterCriteria};

/// Apply the criteria to a record sequence. All active constraints are
/// ANDed; absent fields constrain nothing, so an empty criteria returns
/// the input unchanged. There are no error conditions.
pub fn filter(records: &[CampaignRecord], criteria: &FilterCriteria) -> Vec<CampaignRecord> {
    let query = criteria.query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            let match_query = query.is_empty()
                || r.name.to_lowercase().contains(&query)
                || r.media.to_lowercase().contains(&query);
            let match_media = criteria.media.as_ref().is_none_or(|m| &r.media == m);
            let match_from = criteria.from.is_none_or(|from| r.start >= from);
            let match_to = criteria.to.is_none_or(|to| r.end <= to);
            match_query && match_media && match_from && match_to
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ads_store::sample_campaigns;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn names(records: &[CampaignRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    // 1. Identity law -------------------------------------------------------

    #[test]
    fn test_empty_criteria_returns_all_in_order() {
        let records = sample_campaigns();
        let filtered = filter(&records, &FilterCriteria::default());
        assert_eq!(filtered, records);
    }

    // 2. Text query ---------------------------------------------------------

    #[test]
    fn test_query_is_case_insensitive_on_name() {
        let records = sample_campaigns();
        let criteria = FilterCriteria {
            query: "CAMPANHA".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter(&records, &criteria)), vec!["Campanha institucional"]);
    }

    #[test]
    fn test_query_matches_media_channel_too() {
        let records = sample_campaigns();
        let criteria = FilterCriteria {
            query: "google".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter(&records, &criteria)), vec!["Promo Black Friday"]);
    }

    #[test]
    fn test_query_without_match_yields_empty() {
        let records = sample_campaigns();
        let criteria = FilterCriteria {
            query: "does not exist".to_string(),
            ..Default::default()
        };
        assert!(filter(&records, &criteria).is_empty());
    }

    // 3. Media filter -------------------------------------------------------

    #[test]
    fn test_media_filter_is_exact_match() {
        let records = sample_campaigns();
        let criteria = FilterCriteria {
            media: Some("Facebook".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&filter(&records, &criteria)), vec!["Lançamento produto A"]);
    }

    #[test]
    fn test_media_filter_is_case_sensitive() {
        let records = sample_campaigns();
        let criteria = FilterCriteria {
            media: Some("facebook".to_string()),
            ..Default::default()
        };
        assert!(filter(&records, &criteria).is_empty());
    }

    // 4. Date bounds --------------------------------------------------------

    #[test]
    fn test_date_window_is_inclusive() {
        let records = sample_campaigns();
        let criteria = FilterCriteria {
            from: Some(d("2025-10-01")),
            to: Some(d("2025-10-31")),
            ..Default::default()
        };
        // Start 2025-10-01 and end 2025-10-15 both fall within the bounds.
        assert_eq!(names(&filter(&records, &criteria)), vec!["Lançamento produto A"]);
    }

    #[test]
    fn test_from_bound_compares_start_date() {
        let records = sample_campaigns();
        let criteria = FilterCriteria {
            from: Some(d("2025-10-02")),
            ..Default::default()
        };
        assert_eq!(names(&filter(&records, &criteria)), vec!["Promo Black Friday"]);
    }

    #[test]
    fn test_to_bound_compares_end_date() {
        let records = sample_campaigns();
        let criteria = FilterCriteria {
            to: Some(d("2025-09-30")),
            ..Default::default()
        };
        assert_eq!(
            names(&filter(&records, &criteria)),
            vec!["Campanha institucional", "Awareness Instagram"]
        );
    }

    // 5. Combined constraints -----------------------------------------------

    #[test]
    fn test_constraints_are_anded() {
        let records = sample_campaigns();
        let criteria = FilterCriteria {
            query: "a".to_string(),
            media: Some("TV".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&filter(&records, &criteria)), vec!["Campanha institucional"]);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let records = sample_campaigns();
        let criteria = FilterCriteria {
            query: "o".to_string(),
            ..Default::default()
        };
        let filtered = filter(&records, &criteria);
        let ids: Vec<u64> = filtered.iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert!(filtered.iter().all(|f| records.contains(f)));
    }
}
