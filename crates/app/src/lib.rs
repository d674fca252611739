//! `videoclub-app` — the screens over the client stack, plus process setup.
//!
//! Controllers hold the state a screen renders and call into the session
//! and catalog layers through their traits; the binary in `main.rs` is a
//! thin shell mapping commands onto them.

pub mod controllers;
pub mod logging;

pub use controllers::{
    EntryFormController, FormMode, ListController, ProfileController, surface_error,
};
