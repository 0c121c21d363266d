// Executive Orders - API Core
//
// Collects executive orders from the Federal Register into a JSON file and
// serves that file to the frontend, summarizing individual orders on demand.
//
// Domain actions live in domains/*; infrastructure (file store, LLM adapter)
// lives in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
