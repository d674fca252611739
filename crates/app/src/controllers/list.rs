//! The catalog list screen: load, search, reset, delete.

use std::sync::Arc;

use videoclub_catalog::{CatalogEntry, SearchFilter};
use videoclub_client::CatalogApi;
use videoclub_core::EntryId;
use videoclub_session::SessionManager;

use super::surface_error;

/// State behind the collection view.
///
/// The rendered collection is an ephemeral projection of server state:
/// every successful load replaces it wholesale, and no failed operation
/// ever mutates it.
pub struct ListController {
    catalog: Arc<dyn CatalogApi>,
    session: SessionManager,
    entries: Vec<CatalogEntry>,
    filter: SearchFilter,
    message: Option<String>,
}

impl ListController {
    pub fn new(catalog: Arc<dyn CatalogApi>, session: SessionManager) -> Self {
        Self {
            catalog,
            session,
            entries: Vec::new(),
            filter: SearchFilter::default(),
            message: None,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    /// Whether create/edit/delete affordances are offered. Advisory only;
    /// the server re-enforces the role on every request.
    pub fn can_mutate(&self) -> bool {
        self.session
            .current_identity()
            .map(|identity| identity.role.is_admin())
            .unwrap_or(false)
    }

    /// Fetch the full collection. On failure the previously rendered
    /// entries stay as they were.
    pub async fn load(&mut self) {
        match self.catalog.list().await {
            Ok(entries) => {
                self.entries = entries;
                self.message = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "list load failed");
                self.message = Some(surface_error(&err, "Failed to load movies"));
            }
        }
    }

    /// Apply a search filter. An all-empty filter behaves like `load`.
    pub async fn search(&mut self, filter: SearchFilter) {
        match self.catalog.search(&filter).await {
            Ok(entries) => {
                self.entries = entries;
                self.filter = filter;
                self.message = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "search failed");
                self.message = Some(surface_error(&err, "Search failed"));
            }
        }
    }

    /// Drop the filter and reload the unconstrained collection.
    pub async fn reset(&mut self) {
        self.filter = SearchFilter::default();
        self.load().await;
    }

    /// Remove an entry. `confirmed` is the caller's acknowledgement of the
    /// destructive action; without it nothing is sent. The entry leaves the
    /// rendered collection only after the server confirms the delete.
    pub async fn delete(&mut self, id: EntryId, confirmed: bool) {
        if !confirmed {
            return;
        }
        match self.catalog.delete(id).await {
            Ok(()) => {
                self.entries.retain(|entry| entry.id != id);
                self.message = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, %id, "delete failed");
                self.message = Some(surface_error(&err, "Failed to delete movie"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use videoclub_catalog::EntryDraft;
    use videoclub_core::{ApiError, ApiResult};
    use videoclub_session::{
        AuthApi, CredentialStore, Identity, MemoryCredentialStore, Profile, ProfilePatch, Role,
    };

    struct FakeCatalog {
        entries: Mutex<Vec<CatalogEntry>>,
        fail_delete: Option<ApiError>,
        fail_list: Option<ApiError>,
    }

    impl FakeCatalog {
        fn with(entries: Vec<CatalogEntry>) -> Self {
            Self {
                entries: Mutex::new(entries),
                fail_delete: None,
                fail_list: None,
            }
        }
    }

    #[async_trait]
    impl CatalogApi for FakeCatalog {
        async fn list(&self) -> ApiResult<Vec<CatalogEntry>> {
            match &self.fail_list {
                Some(err) => Err(err.clone()),
                None => Ok(self.entries.lock().unwrap().clone()),
            }
        }

        async fn get(&self, id: EntryId) -> ApiResult<CatalogEntry> {
            self.entries
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or_else(|| ApiError::not_found("Movie not found"))
        }

        async fn create(&self, _draft: &EntryDraft) -> ApiResult<CatalogEntry> {
            unreachable!("list tests never create")
        }

        async fn update(&self, _id: EntryId, _draft: &EntryDraft) -> ApiResult<CatalogEntry> {
            unreachable!("list tests never update")
        }

        async fn delete(&self, id: EntryId) -> ApiResult<()> {
            if let Some(err) = &self.fail_delete {
                return Err(err.clone());
            }
            self.entries.lock().unwrap().retain(|e| e.id != id);
            Ok(())
        }

        async fn search(&self, filter: &SearchFilter) -> ApiResult<Vec<CatalogEntry>> {
            if filter.is_empty() {
                return self.list().await;
            }
            let needle = filter.title.clone().unwrap_or_default().to_lowercase();
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.title.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }
    }

    struct NeverAuthApi;

    #[async_trait]
    impl AuthApi for NeverAuthApi {
        async fn login(&self, _u: &str, _p: &str) -> ApiResult<Identity> {
            unreachable!()
        }
        async fn register(&self, _u: &str, _e: &str, _p: &str) -> ApiResult<()> {
            unreachable!()
        }
        async fn fetch_profile(&self, _auth: Option<&str>) -> ApiResult<Profile> {
            unreachable!()
        }
        async fn push_profile(&self, _auth: Option<&str>, _p: &ProfilePatch) -> ApiResult<Profile> {
            unreachable!()
        }
    }

    fn entry(id: i64, title: &str) -> CatalogEntry {
        CatalogEntry {
            id: EntryId::new(id),
            title: title.to_string(),
            description: None,
            genre: None,
            director: None,
            year_released: None,
            duration_minutes: None,
            rating: None,
            poster_url: None,
        }
    }

    fn session_with(role: Option<Role>) -> SessionManager {
        let store = Arc::new(MemoryCredentialStore::new());
        if let Some(role) = role {
            store.save(&Identity {
                username: "alice".to_string(),
                role,
                token: "tok".to_string(),
                email: None,
                created_at: None,
            });
        }
        SessionManager::new(store, Arc::new(NeverAuthApi))
    }

    fn controller(catalog: FakeCatalog, role: Option<Role>) -> ListController {
        ListController::new(Arc::new(catalog), session_with(role))
    }

    #[tokio::test]
    async fn load_replaces_collection_wholesale() {
        let mut ctl = controller(
            FakeCatalog::with(vec![entry(1, "Alien"), entry(2, "Solaris")]),
            Some(Role::User),
        );
        ctl.load().await;
        assert_eq!(ctl.entries().len(), 2);
        assert_eq!(ctl.message(), None);
    }

    #[tokio::test]
    async fn failed_load_keeps_prior_entries_and_sets_message() {
        let mut catalog = FakeCatalog::with(vec![entry(1, "Alien")]);
        let mut ctl = controller(FakeCatalog::with(vec![entry(1, "Alien")]), None);
        ctl.load().await;

        catalog.fail_list = Some(ApiError::server(500, ""));
        ctl.catalog = Arc::new(catalog);
        ctl.load().await;

        assert_eq!(ctl.entries().len(), 1);
        assert_eq!(ctl.message(), Some("Failed to load movies"));
    }

    #[tokio::test]
    async fn unconfirmed_delete_is_a_no_op() {
        let mut ctl = controller(FakeCatalog::with(vec![entry(1, "Alien")]), Some(Role::Admin));
        ctl.load().await;
        ctl.delete(EntryId::new(1), false).await;
        assert_eq!(ctl.entries().len(), 1);
        assert_eq!(ctl.message(), None);
    }

    #[tokio::test]
    async fn failed_delete_leaves_entry_rendered() {
        let mut catalog = FakeCatalog::with(vec![entry(42, "Stalker")]);
        catalog.fail_delete = Some(ApiError::not_found(""));
        let mut ctl = controller(catalog, Some(Role::Admin));
        ctl.load().await;

        ctl.delete(EntryId::new(42), true).await;

        assert_eq!(ctl.entries().len(), 1, "entry 42 must not disappear early");
        assert_eq!(ctl.message(), Some("Failed to delete movie"));
    }

    #[tokio::test]
    async fn confirmed_delete_removes_entry() {
        let mut ctl = controller(
            FakeCatalog::with(vec![entry(1, "Alien"), entry(2, "Solaris")]),
            Some(Role::Admin),
        );
        ctl.load().await;
        ctl.delete(EntryId::new(1), true).await;
        assert_eq!(ctl.entries().len(), 1);
        assert_eq!(ctl.entries()[0].id, EntryId::new(2));
    }

    #[tokio::test]
    async fn reset_clears_filter_and_reloads() {
        let mut ctl = controller(
            FakeCatalog::with(vec![entry(1, "Alien"), entry(2, "Solaris")]),
            Some(Role::User),
        );
        let filter = SearchFilter {
            title: Some("alien".to_string()),
            ..Default::default()
        };
        ctl.search(filter).await;
        assert_eq!(ctl.entries().len(), 1);
        assert!(!ctl.filter().is_empty());

        ctl.reset().await;
        assert!(ctl.filter().is_empty());
        assert_eq!(ctl.entries().len(), 2);
    }

    #[tokio::test]
    async fn mutation_affordances_are_admin_only() {
        let ctl = controller(FakeCatalog::with(vec![]), Some(Role::Admin));
        assert!(ctl.can_mutate());

        let ctl = controller(FakeCatalog::with(vec![]), Some(Role::User));
        assert!(!ctl.can_mutate());

        let ctl = controller(FakeCatalog::with(vec![]), None);
        assert!(!ctl.can_mutate());
    }
}
