//! `videoclub-session` — session and authorization lifecycle.
//!
//! This crate owns the resident Identity: how it is obtained, persisted,
//! attached to requests, and invalidated. It is intentionally decoupled from
//! HTTP; the wire lives behind the [`AuthApi`] trait.

pub mod guard;
pub mod identity;
pub mod manager;
pub mod store;

pub use guard::{AccessGuard, GuardState, decide};
pub use identity::{Identity, Profile, ProfilePatch, Role};
pub use manager::{AuthApi, SessionManager};
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
