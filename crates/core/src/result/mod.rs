//! Result module
//!
//! Recorded outcomes of task runs, their response shapes, and storage.

mod file_store;
mod model;
mod repository;

pub use file_store::FileResultStore;
pub use model::*;
pub use repository::{DateRange, ResultRepository};
