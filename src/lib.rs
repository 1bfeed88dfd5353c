pub mod config;
pub mod extractor;
pub mod search;
pub mod tracing;
