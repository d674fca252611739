//! Session lifecycle operations over the credential store and the auth wire.

use std::sync::Arc;

use async_trait::async_trait;

use videoclub_core::{ApiError, ApiResult};

use crate::identity::{Identity, Profile, ProfilePatch};
use crate::store::CredentialStore;

/// The authentication wire, kept behind a trait so the session layer stays
/// transport-agnostic. The HTTP implementation lives in `videoclub-client`.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an Identity carrying a token.
    async fn login(&self, username: &str, password: &str) -> ApiResult<Identity>;

    /// Request account creation. Never establishes a session.
    async fn register(&self, username: &str, email: &str, password: &str) -> ApiResult<()>;

    /// Fetch the extended profile. `auth` is the derived Authorization header
    /// value, when one exists; the server decides whether "none" is acceptable.
    async fn fetch_profile(&self, auth: Option<&str>) -> ApiResult<Profile>;

    /// Apply a sparse profile update.
    async fn push_profile(&self, auth: Option<&str>, patch: &ProfilePatch) -> ApiResult<Profile>;
}

/// Wraps the credential store and exposes the session operations.
///
/// Exactly one Identity is resident at a time; login replaces it wholesale
/// and logout destroys it. All mutation of the store goes through here.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn CredentialStore>,
    api: Arc<dyn AuthApi>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn CredentialStore>, api: Arc<dyn AuthApi>) -> Self {
        Self { store, api }
    }

    /// Authenticate and persist the returned Identity.
    ///
    /// On any failure the store is left untouched.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Identity> {
        let identity = self.api.login(username, password).await?;
        if !identity.has_token() {
            return Err(ApiError::authentication("login response carried no token"));
        }
        self.store.save(&identity);
        tracing::info!(username = %identity.username, "session established");
        Ok(identity)
    }

    /// Create an account. Login remains a separate, required step.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> ApiResult<()> {
        self.api.register(username, email, password).await
    }

    /// Destroy the resident session. Idempotent.
    pub fn logout(&self) {
        self.store.clear();
        tracing::info!("session cleared");
    }

    /// The resident Identity, if any. Pure store read, no network.
    pub fn current_identity(&self) -> Option<Identity> {
        self.store.read()
    }

    /// Derive the Authorization header value, when a token is resident.
    ///
    /// `None` means requests proceed unauthenticated; the server is the
    /// authority on whether that is acceptable.
    pub fn authorization_header(&self) -> Option<String> {
        self.current_identity()
            .filter(Identity::has_token)
            .map(|identity| format!("Bearer {}", identity.token.trim()))
    }

    /// Fetch the extended profile from the server.
    pub async fn get_profile(&self) -> ApiResult<Profile> {
        self.api
            .fetch_profile(self.authorization_header().as_deref())
            .await
    }

    /// Apply a sparse profile update.
    ///
    /// The locally cached Identity's token and role are never touched; a
    /// subsequent `get_profile` is the way to refresh the view.
    pub async fn update_profile(&self, patch: &ProfilePatch) -> ApiResult<Profile> {
        self.api
            .push_profile(self.authorization_header().as_deref(), patch)
            .await
    }
}
