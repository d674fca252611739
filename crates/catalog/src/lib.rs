//! `videoclub-catalog` — the catalog entry model and its constraints.
//!
//! Entries are ephemeral client-side projections of server state: the client
//! holds no authoritative copy, and every list refresh replaces the local
//! collection wholesale. Validation here is advisory; the server re-checks
//! everything it cares about.

pub mod entry;
pub mod input;
pub mod search;

pub use entry::{CatalogEntry, EntryDraft};
pub use search::SearchFilter;
