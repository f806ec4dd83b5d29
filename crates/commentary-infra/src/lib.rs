//! # Commentary Infrastructure
//!
//! Concrete implementations of the ports defined in `commentary-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - In-memory store only

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::{InMemoryStore, InMemoryUnitOfWork};

#[cfg(feature = "postgres")]
pub use database::{PostgresUnitOfWork, PostgresUnitOfWorkFactory};
