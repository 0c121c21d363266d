//! Orders domain - collects executive orders and summarizes them on demand

pub mod actions;

pub use actions::{summarize_order, Collector, SummarizeError};
