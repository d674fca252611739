//! Response-to-taxonomy resolution shared by the auth and catalog clients.

use serde::Deserialize;

use videoclub_core::ApiError;

/// Error body shape used by the service: either `{"message": ...}` or
/// `{"error": ...}` depending on the endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    pub(crate) fn detail(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|s| !s.trim().is_empty())
    }
}

/// Map a non-success status plus optional server detail onto the taxonomy.
///
/// The detail string may be empty when the server sent no body; callers
/// surfacing messages fall back to an operation-specific default then.
pub(crate) fn map_status(status: u16, detail: Option<String>) -> ApiError {
    let detail = detail.unwrap_or_default();
    match status {
        401 => ApiError::Authentication(detail),
        403 => ApiError::Authorization(detail),
        404 => ApiError::NotFound(detail),
        _ => ApiError::Server {
            status,
            message: detail,
        },
    }
}

/// Resolve a failed response, extracting any server-supplied detail text.
pub(crate) async fn error_from_response(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::detail);
    map_status(status, detail)
}

/// A send-level failure: the server was never reached, nothing was mutated.
pub(crate) fn transport(err: reqwest::Error) -> ApiError {
    ApiError::transport(err.to_string())
}

/// A success status with a body the client could not decode.
pub(crate) fn malformed(err: reqwest::Error) -> ApiError {
    ApiError::transport(format!("malformed response body: {err}"))
}
