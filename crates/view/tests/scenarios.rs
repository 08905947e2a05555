//! End-to-end scenarios over the seeded sample set: repository-backed
//! store driving the coordinator pipeline.

use ads_core::types::{CampaignDraft, DrawCommand, FilterCriteria, Surface, SummaryStatistics};
use ads_store::{CampaignRepository, MemoryStore};
use ads_view::{CampaignRow, ViewCoordinator, ViewSinks};
use rust_decimal_macros::dec;

const SURFACE: Surface = Surface {
    width: 800.0,
    height: 300.0,
};

#[derive(Default)]
struct LastPass {
    rows: Vec<CampaignRow>,
    summary: SummaryStatistics,
    commands: Vec<DrawCommand>,
}

impl ViewSinks for LastPass {
    fn table(&mut self, rows: &[CampaignRow]) {
        self.rows = rows.to_vec();
    }

    fn summary(&mut self, summary: &SummaryStatistics) {
        self.summary = summary.clone();
    }

    fn chart(&mut self, commands: &[DrawCommand]) {
        self.commands = commands.to_vec();
    }
}

fn open_seeded() -> CampaignRepository {
    CampaignRepository::open(Box::new(MemoryStore::new()), "ads_control_v1").unwrap()
}

#[test]
fn scenario_media_filter_facebook() {
    let repo = open_seeded();
    let mut sinks = LastPass::default();
    let mut coordinator = ViewCoordinator::new(SURFACE, 250);

    coordinator.set_criteria(
        FilterCriteria {
            media: Some("Facebook".to_string()),
            ..Default::default()
        },
        repo.records(),
        &mut sinks,
    );

    assert_eq!(sinks.rows.len(), 1);
    assert_eq!(sinks.rows[0].record.name, "Lançamento produto A");
    assert_eq!(sinks.summary.total_cost, dec!(12500.00));
    assert_eq!(sinks.summary.total_results, 320);
    assert_eq!(sinks.summary.total_reach, 45000);
}

#[test]
fn scenario_case_insensitive_query() {
    let repo = open_seeded();
    let mut sinks = LastPass::default();
    let mut coordinator = ViewCoordinator::new(SURFACE, 250);

    coordinator.set_criteria(
        FilterCriteria {
            query: "campanha".to_string(),
            ..Default::default()
        },
        repo.records(),
        &mut sinks,
    );

    assert_eq!(sinks.rows.len(), 1);
    assert_eq!(sinks.rows[0].record.name, "Campanha institucional");
}

#[test]
fn scenario_create_then_delete_restores_store() {
    let mut repo = open_seeded();
    let before: Vec<_> = repo.records().list().to_vec();

    let created = repo
        .create(CampaignDraft {
            name: "Teste".to_string(),
            media: "Email".to_string(),
            start: "2025-12-01".parse().unwrap(),
            end: "2025-12-15".parse().unwrap(),
            cost: dec!(1000.00),
            results: 50,
            reach: 9000,
        })
        .unwrap();
    assert_eq!(created.id, 5);
    assert_eq!(repo.records().len(), 5);

    assert!(repo.delete(5).unwrap());
    assert_eq!(repo.records().list(), &before[..]);
}

#[test]
fn scenario_date_window_october() {
    let repo = open_seeded();
    let mut sinks = LastPass::default();
    let mut coordinator = ViewCoordinator::new(SURFACE, 250);

    coordinator.set_criteria(
        FilterCriteria {
            from: Some("2025-10-01".parse().unwrap()),
            to: Some("2025-10-31".parse().unwrap()),
            ..Default::default()
        },
        repo.records(),
        &mut sinks,
    );

    assert_eq!(sinks.rows.len(), 1);
    assert_eq!(sinks.rows[0].record.name, "Lançamento produto A");
    // One bar filling the whole plot height: it is the only (and max) value.
    assert!(matches!(
        sinks.commands[0],
        DrawCommand::FillRect { height, .. } if height == 220.0
    ));
}

#[test]
fn scenario_mutations_rerun_pipeline_under_active_filter() {
    let mut repo = open_seeded();
    let mut sinks = LastPass::default();
    let mut coordinator = ViewCoordinator::new(SURFACE, 250);

    coordinator.set_criteria(
        FilterCriteria {
            media: Some("Instagram".to_string()),
            ..Default::default()
        },
        repo.records(),
        &mut sinks,
    );
    assert_eq!(sinks.rows.len(), 1);

    repo.create(CampaignDraft {
        name: "Stories push".to_string(),
        media: "Instagram".to_string(),
        start: "2025-12-01".parse().unwrap(),
        end: "2025-12-10".parse().unwrap(),
        cost: dec!(2400.00),
        results: 0,
        reach: 12000,
    })
    .unwrap();
    coordinator.on_records_changed(repo.records(), &mut sinks);

    assert_eq!(sinks.rows.len(), 2);
    // Zero results -> the derived metric is the "no data" sentinel.
    assert_eq!(sinks.rows[1].cost_per_result, None);
    assert_eq!(sinks.summary.total_cost, dec!(7200.00));
    assert_eq!(sinks.commands.len(), 6);
}
