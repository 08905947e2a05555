//! In-memory record store and the repository that keeps it persisted.
//!
//! The store is an ordered sequence: filtering and rendering preserve
//! insertion order, so the store never reorders records.

use crate::persist::KeyValueStore;
use ads_core::types::{CampaignDraft, CampaignRecord};
use ads_core::AdsResult;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tracing::{info, warn};

/// Ordered in-memory campaign collection. Owns identity assignment:
/// max existing id + 1, or 1 when empty; ids are never reused while
/// higher ids remain.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<CampaignRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CampaignRecord>) -> Self {
        Self { records }
    }

    pub fn list(&self) -> &[CampaignRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&CampaignRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Append a new record, assigning its identity.
    pub fn create(&mut self, draft: CampaignDraft) -> CampaignRecord {
        let record = draft.into_record(self.next_id());
        info!(id = record.id, name = %record.name, "Campaign created");
        self.records.push(record.clone());
        record
    }

    /// Full replace by identity; the record keeps its position in the
    /// sequence. Returns false if the id is unknown.
    pub fn update(&mut self, id: u64, draft: CampaignDraft) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = draft.into_record(id);
                info!(id, "Campaign updated");
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() < before;
        if removed {
            info!(id, "Campaign deleted");
        }
        removed
    }

    /// Distinct media channels in first-appearance order. Feeds the
    /// media-filter selector.
    pub fn media_channels(&self) -> Vec<String> {
        let mut channels: Vec<String> = Vec::new();
        for record in &self.records {
            if !channels.contains(&record.media) {
                channels.push(record.media.clone());
            }
        }
        channels
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

/// The fixed sample set the store is seeded with on first run.
pub fn sample_campaigns() -> Vec<CampaignRecord> {
    vec![
        CampaignRecord {
            id: 1,
            name: "Lançamento produto A".to_string(),
            media: "Facebook".to_string(),
            start: date(2025, 10, 1),
            end: date(2025, 10, 15),
            cost: dec!(12500.00),
            results: 320,
            reach: 45000,
        },
        CampaignRecord {
            id: 2,
            name: "Promo Black Friday".to_string(),
            media: "Google".to_string(),
            start: date(2025, 11, 15),
            end: date(2025, 11, 30),
            cost: dec!(22000.50),
            results: 910,
            reach: 150000,
        },
        CampaignRecord {
            id: 3,
            name: "Campanha institucional".to_string(),
            media: "TV".to_string(),
            start: date(2025, 9, 1),
            end: date(2025, 9, 30),
            cost: dec!(50000.00),
            results: 120,
            reach: 800000,
        },
        CampaignRecord {
            id: 4,
            name: "Awareness Instagram".to_string(),
            media: "Instagram".to_string(),
            start: date(2025, 8, 10),
            end: date(2025, 8, 31),
            cost: dec!(4800.00),
            results: 60,
            reach: 34000,
        },
    ]
}

/// A record store kept in sync with a key-value backend. The full
/// collection is written back after every mutation; at this data scale
/// incremental diffing buys nothing.
pub struct CampaignRepository {
    store: RecordStore,
    backend: Box<dyn KeyValueStore>,
    namespace: String,
}

impl CampaignRepository {
    /// Load the collection from the backend, seeding with the sample set
    /// on first run (no stored value, or a value that no longer parses).
    pub fn open(backend: Box<dyn KeyValueStore>, namespace: impl Into<String>) -> AdsResult<Self> {
        let namespace = namespace.into();
        let records = match backend.get(&namespace)? {
            Some(raw) => match serde_json::from_str::<Vec<CampaignRecord>>(&raw) {
                Ok(records) => Some(records),
                Err(e) => {
                    warn!(%namespace, error = %e, "Stored collection unparseable, reseeding");
                    None
                }
            },
            None => None,
        };

        match records {
            Some(records) => Ok(Self {
                store: RecordStore::from_records(records),
                backend,
                namespace,
            }),
            None => {
                let mut repo = Self {
                    store: RecordStore::from_records(sample_campaigns()),
                    backend,
                    namespace,
                };
                info!(count = repo.store.len(), "First run, seeded sample campaigns");
                repo.persist()?;
                Ok(repo)
            }
        }
    }

    pub fn records(&self) -> &RecordStore {
        &self.store
    }

    pub fn create(&mut self, draft: CampaignDraft) -> AdsResult<CampaignRecord> {
        let record = self.store.create(draft);
        self.persist()?;
        Ok(record)
    }

    pub fn update(&mut self, id: u64, draft: CampaignDraft) -> AdsResult<bool> {
        let updated = self.store.update(id, draft);
        if updated {
            self.persist()?;
        }
        Ok(updated)
    }

    pub fn delete(&mut self, id: u64) -> AdsResult<bool> {
        let removed = self.store.delete(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&mut self) -> AdsResult<()> {
        let raw = serde_json::to_string(self.store.list())?;
        self.backend.set(&self.namespace, &raw)
    }
}
