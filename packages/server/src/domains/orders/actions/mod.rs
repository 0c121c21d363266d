//! Orders domain actions - business logic functions
//!
//! The collector is a batch job run by the `collector` binary; summarization
//! is called per request by the HTTP layer.

mod collect;
mod summarize;

pub use collect::Collector;
pub use summarize::{summarize_order, SummarizeError};
