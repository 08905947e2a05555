//! View orchestration — re-derives the filtered view, summary, and chart
//! on every store or criteria change and hands them to render sinks.

pub mod coordinator;
pub mod debounce;
pub mod sinks;

pub use coordinator::ViewCoordinator;
pub use debounce::Debouncer;
pub use sinks::{CampaignRow, ViewSinks};
