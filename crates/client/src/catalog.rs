//! Catalog resource operations.

use async_trait::async_trait;

use videoclub_catalog::{CatalogEntry, EntryDraft, SearchFilter};
use videoclub_core::{ApiResult, EntryId};
use videoclub_session::SessionManager;

use crate::config::ClientConfig;
use crate::http::{error_from_response, malformed, transport};

/// Typed CRUD + search against the catalog resource.
///
/// The client attaches whatever authorization header the session derives,
/// including none; the server enforces the actual authorization.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// The full collection, in server order.
    async fn list(&self) -> ApiResult<Vec<CatalogEntry>>;

    /// A single entry; absence is a `NotFound` error, not an empty success.
    async fn get(&self, id: EntryId) -> ApiResult<CatalogEntry>;

    /// Submit a new entry. The draft is validated before transmission; the
    /// server assigns the id.
    async fn create(&self, draft: &EntryDraft) -> ApiResult<CatalogEntry>;

    /// Full replace of the mutable fields, same validation as `create`.
    async fn update(&self, id: EntryId, draft: &EntryDraft) -> ApiResult<CatalogEntry>;

    /// Remove by id. Destructive; callers confirm before invoking.
    async fn delete(&self, id: EntryId) -> ApiResult<()>;

    /// Entries matching all provided, non-empty criteria. An all-empty
    /// filter is equivalent to `list`.
    async fn search(&self, filter: &SearchFilter) -> ApiResult<Vec<CatalogEntry>>;
}

/// `CatalogApi` over `reqwest`.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: SessionManager,
}

impl CatalogClient {
    pub fn new(config: ClientConfig, session: SessionManager) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.authorization_header() {
            Some(value) => req.header(reqwest::header::AUTHORIZATION, value),
            None => req,
        }
    }

    async fn fetch_collection(&self, req: reqwest::RequestBuilder) -> ApiResult<Vec<CatalogEntry>> {
        let resp = self.authorized(req).send().await.map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Vec<CatalogEntry>>().await.map_err(malformed)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list(&self) -> ApiResult<Vec<CatalogEntry>> {
        self.fetch_collection(self.http.get(self.config.catalog_url("")))
            .await
    }

    async fn get(&self, id: EntryId) -> ApiResult<CatalogEntry> {
        let req = self.http.get(self.config.catalog_url(&format!("/{id}")));
        let resp = self.authorized(req).send().await.map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<CatalogEntry>().await.map_err(malformed)
    }

    async fn create(&self, draft: &EntryDraft) -> ApiResult<CatalogEntry> {
        draft.validate()?;

        let req = self.http.post(self.config.catalog_url("")).json(draft);
        let resp = self.authorized(req).send().await.map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<CatalogEntry>().await.map_err(malformed)
    }

    async fn update(&self, id: EntryId, draft: &EntryDraft) -> ApiResult<CatalogEntry> {
        draft.validate()?;

        let req = self
            .http
            .put(self.config.catalog_url(&format!("/{id}")))
            .json(draft);
        let resp = self.authorized(req).send().await.map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<CatalogEntry>().await.map_err(malformed)
    }

    async fn delete(&self, id: EntryId) -> ApiResult<()> {
        let req = self.http.delete(self.config.catalog_url(&format!("/{id}")));
        let resp = self.authorized(req).send().await.map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }

    async fn search(&self, filter: &SearchFilter) -> ApiResult<Vec<CatalogEntry>> {
        if filter.is_empty() {
            return self.list().await;
        }

        let req = self
            .http
            .get(self.config.catalog_url("/search"))
            .query(&filter.query_params());
        self.fetch_collection(req).await
    }
}
