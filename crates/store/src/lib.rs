//! Campaign record storage — in-memory ordered store, identity assignment,
//! and the key-value persistence boundary.

pub mod persist;
pub mod store;

pub use persist::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::{sample_campaigns, CampaignRepository, RecordStore};
