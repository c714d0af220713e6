//! # Contents Infrastructure
//!
//! Concrete implementations of the storage port defined in `contents-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mysql` - MySQL storage via SeaORM

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "mysql")]
pub use database::{SeaOrmPostRepository, connect_and_bootstrap};
