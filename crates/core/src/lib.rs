//! `videoclub-core` — shared foundation for the catalog client.
//!
//! This crate contains the error taxonomy and strongly-typed identifiers.
//! It is intentionally free of HTTP and storage concerns.

pub mod error;
pub mod id;

pub use error::{ApiError, ApiResult};
pub use id::EntryId;
