//! # Commentary Core
//!
//! The domain layer: users, posts and comments, the ports the storage layer
//! implements, and the services that validate input and drive a unit of work.
//! This crate has no storage or HTTP dependencies.

pub mod domain;
pub mod error;
mod mapping;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
