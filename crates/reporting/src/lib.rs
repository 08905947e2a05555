//! Campaign analytics — filtering, aggregate statistics, proportional
//! bar-chart rendering, and CSV export.

pub mod chart;
pub mod export;
pub mod filter;
pub mod summary;

pub use chart::{render, PADDING};
pub use export::{export_csv, EXPORT_FILE_NAME};
pub use filter::filter;
pub use summary::{cost_per_result, format_currency, summarize};
