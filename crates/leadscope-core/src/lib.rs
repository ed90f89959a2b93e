// ABOUTME: Core library for leadscope, containing the lead model and all pure data transforms.
// ABOUTME: Filtering, searching, sorting, score bucketing, and CSV export live here.

pub mod export;
pub mod filter;
pub mod insights;
pub mod lead;
pub mod sort;
pub mod view;

pub use export::export_csv;
pub use filter::LeadFilter;
pub use insights::{BucketCount, score_distribution};
pub use lead::{Lead, ScoreBand};
pub use sort::{SortKey, SortOrder, SortSpec};
pub use view::LeadView;
