pub(crate) mod columns;
pub mod derived_metrics;
pub mod error;
pub mod gap_filler;
pub mod series_cache;
pub mod source_table;
