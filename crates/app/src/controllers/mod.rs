//! View controllers: the state each screen holds and the operations it
//! invokes. Controllers consume only the session and catalog traits, so the
//! CLI shell and tests drive them the same way.

pub mod form;
pub mod list;
pub mod profile;

pub use form::{EntryFormController, FormMode};
pub use list::ListController;
pub use profile::ProfileController;

use videoclub_core::ApiError;

/// Reduce a failure to the single message a screen shows.
///
/// Server-supplied detail wins when present; transport failures and
/// detail-less responses fall back to the operation-specific default.
pub fn surface_error(err: &ApiError, default: &str) -> String {
    let detail = match err {
        ApiError::Transport(_) => "",
        ApiError::Validation(d)
        | ApiError::Authentication(d)
        | ApiError::Authorization(d)
        | ApiError::NotFound(d) => d.as_str(),
        ApiError::Server { message, .. } => message.as_str(),
    };
    if detail.trim().is_empty() {
        default.to_string()
    } else {
        detail.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_wins_over_default() {
        let err = ApiError::not_found("Movie not found");
        assert_eq!(surface_error(&err, "Failed to delete movie"), "Movie not found");
    }

    #[test]
    fn empty_detail_falls_back() {
        let err = ApiError::not_found("");
        assert_eq!(surface_error(&err, "Failed to delete movie"), "Failed to delete movie");
    }

    #[test]
    fn transport_is_always_generic() {
        let err = ApiError::transport("connection refused (os error 111)");
        assert_eq!(surface_error(&err, "Failed to load movies"), "Failed to load movies");
    }
}
