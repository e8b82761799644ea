//! Result query module
//!
//! Validation of results-lookup parameters and the engine that resolves
//! a task's results from storage.

mod config;
mod engine;
mod params;

pub use config::{QueryConfig, DEFAULT_WINDOW_DAYS};
pub use engine::ResultQueryEngine;
pub use params::{FilterSpec, QueryParam};
