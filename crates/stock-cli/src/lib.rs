//! CLI library components for the warehouse report cleaner.

pub mod logging;
pub mod pipeline;
pub mod types;
