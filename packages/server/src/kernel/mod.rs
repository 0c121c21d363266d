//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod order_store;
pub mod test_dependencies;
pub mod traits;

pub use ai::{GroqSummarizer, SUMMARY_MAX_TOKENS, SUMMARY_SYSTEM_PROMPT, SUMMARY_TEMPERATURE};
pub use deps::ServerDeps;
pub use order_store::{OrderStore, StoreError};
pub use test_dependencies::MockSummarizer;
pub use traits::*;
