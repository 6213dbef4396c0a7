pub mod aggregator;
pub mod classifier;
pub mod criteria;
pub mod error;
pub mod summary_store;
pub mod thresholds;
