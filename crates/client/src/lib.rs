//! `videoclub-client` — typed HTTP access to the catalog service.
//!
//! Implements the wire side of the session layer (`AuthApi`) and the
//! catalog resource operations (`CatalogApi`) over `reqwest`. Every
//! response is resolved into the shared error taxonomy; raw transport
//! failures never escape.

pub mod auth_api;
pub mod catalog;
pub mod config;
pub mod http;

pub use auth_api::HttpAuthApi;
pub use catalog::{CatalogApi, CatalogClient};
pub use config::ClientConfig;
