//! The profile screen: view and edit the extended identity fields.

use videoclub_catalog::input::non_empty;
use videoclub_session::{Profile, ProfilePatch, SessionManager};

use super::surface_error;

/// State behind the profile view.
///
/// Password changes require a matching confirmation before anything is
/// sent; a mismatch is a purely local failure. The patch is sparse: a
/// blank password field means "do not change the password".
pub struct ProfileController {
    session: SessionManager,
    profile: Option<Profile>,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    busy: bool,
    message: Option<String>,
}

/// Shown after a successful update.
const UPDATED: &str = "Profile updated successfully";

impl ProfileController {
    pub fn new(session: SessionManager) -> Self {
        Self {
            session,
            profile: None,
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            busy: false,
            message: None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Fetch the profile and pre-fill the email field.
    pub async fn load(&mut self) {
        match self.session.get_profile().await {
            Ok(profile) => {
                self.email = profile.email.clone().unwrap_or_default();
                self.profile = Some(profile);
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile load failed");
                self.message = Some(surface_error(&err, "Failed to load profile"));
            }
        }
    }

    /// Submit the edited fields as a sparse patch. Returns true on success.
    pub async fn submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        if self.password != self.confirm_password {
            self.message = Some("Passwords do not match".to_string());
            return false;
        }

        let patch = ProfilePatch {
            email: non_empty(&self.email),
            password: non_empty(&self.password),
        };

        self.busy = true;
        let result = self.session.update_profile(&patch).await;
        self.busy = false;

        match result {
            Ok(profile) => {
                self.email = profile.email.clone().unwrap_or_default();
                self.profile = Some(profile);
                self.password.clear();
                self.confirm_password.clear();
                self.message = Some(UPDATED.to_string());
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile update failed");
                self.message = Some(surface_error(&err, "Failed to update profile"));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use videoclub_core::ApiResult;
    use videoclub_session::{AuthApi, Identity, MemoryCredentialStore, Role};

    #[derive(Default)]
    struct FakeAuthApi {
        pushed: Mutex<Vec<ProfilePatch>>,
    }

    fn profile(email: &str) -> Profile {
        Profile {
            username: "alice".to_string(),
            email: Some(email.to_string()),
            role: Role::User,
            created_at: None,
        }
    }

    #[async_trait]
    impl AuthApi for FakeAuthApi {
        async fn login(&self, _u: &str, _p: &str) -> ApiResult<Identity> {
            unreachable!("profile tests never log in")
        }

        async fn register(&self, _u: &str, _e: &str, _p: &str) -> ApiResult<()> {
            unreachable!("profile tests never register")
        }

        async fn fetch_profile(&self, _auth: Option<&str>) -> ApiResult<Profile> {
            Ok(profile("alice@example.com"))
        }

        async fn push_profile(&self, _auth: Option<&str>, patch: &ProfilePatch) -> ApiResult<Profile> {
            self.pushed.lock().unwrap().push(patch.clone());
            Ok(profile(
                patch.email.as_deref().unwrap_or("alice@example.com"),
            ))
        }
    }

    fn controller(api: Arc<FakeAuthApi>) -> ProfileController {
        let session = SessionManager::new(Arc::new(MemoryCredentialStore::new()), api);
        ProfileController::new(session)
    }

    #[tokio::test]
    async fn load_prefills_email() {
        let mut ctl = controller(Arc::new(FakeAuthApi::default()));
        ctl.load().await;
        assert_eq!(ctl.email, "alice@example.com");
        assert_eq!(ctl.profile().unwrap().username, "alice");
    }

    #[tokio::test]
    async fn password_mismatch_is_local_and_sends_nothing() {
        let api = Arc::new(FakeAuthApi::default());
        let mut ctl = controller(api.clone());
        ctl.password = "x".to_string();
        ctl.confirm_password = "y".to_string();

        assert!(!ctl.submit().await);
        assert_eq!(ctl.message(), Some("Passwords do not match"));
        assert!(api.pushed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_password_is_omitted_from_the_patch() {
        let api = Arc::new(FakeAuthApi::default());
        let mut ctl = controller(api.clone());
        ctl.email = "new@example.com".to_string();

        assert!(ctl.submit().await);

        let pushed = api.pushed.lock().unwrap();
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].email, Some("new@example.com".to_string()));
        assert_eq!(pushed[0].password, None);
    }

    #[tokio::test]
    async fn success_clears_password_fields_and_reports() {
        let api = Arc::new(FakeAuthApi::default());
        let mut ctl = controller(api.clone());
        ctl.email = "new@example.com".to_string();
        ctl.password = "hunter2".to_string();
        ctl.confirm_password = "hunter2".to_string();

        assert!(ctl.submit().await);
        assert_eq!(ctl.message(), Some(UPDATED));
        assert_eq!(ctl.password, "");
        assert_eq!(ctl.confirm_password, "");
        assert_eq!(ctl.email, "new@example.com");

        let pushed = api.pushed.lock().unwrap();
        assert_eq!(pushed[0].password, Some("hunter2".to_string()));
    }
}
