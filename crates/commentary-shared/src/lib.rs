//! # Commentary Shared
//!
//! Types exchanged across the API boundary.
//! Nothing here knows about storage; entities are mapped into these shapes by `commentary-core`.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
