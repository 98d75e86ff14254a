// Tracking statistics module
// Loads the tracker's per-frame CSV and derives run summaries

pub mod summary;
pub mod table;

pub use summary::StatsSummary;
pub use table::{
    load_table, StatsError, StatsResult, TrackingStatsRow, TrackingStatsTable, REQUIRED_COLUMNS,
};
