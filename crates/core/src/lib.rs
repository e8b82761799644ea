//! Core library for the accessibility results service
//!
//! This crate contains the core business logic, including:
//! - Task and result models
//! - Storage interfaces and their file-backed implementations
//! - Query parameter validation and the result query engine

pub mod error;
pub mod id;
pub mod query;
pub mod result;
pub mod task;

pub use error::Error;
pub use id::ObjectId;
pub type Result<T> = std::result::Result<T, Error>;
