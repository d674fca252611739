//! HTTP implementation of the session layer's `AuthApi`.

use async_trait::async_trait;
use serde_json::json;

use videoclub_core::{ApiError, ApiResult};
use videoclub_session::{AuthApi, Identity, Profile, ProfilePatch};

use crate::config::ClientConfig;
use crate::http::{error_from_response, malformed, transport};

/// Auth endpoints over `reqwest`.
#[derive(Clone)]
pub struct HttpAuthApi {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpAuthApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn with_auth(&self, req: reqwest::RequestBuilder, auth: Option<&str>) -> reqwest::RequestBuilder {
        match auth {
            Some(value) => req.header(reqwest::header::AUTHORIZATION, value),
            None => req,
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, username: &str, password: &str) -> ApiResult<Identity> {
        let resp = self
            .http
            .post(self.config.auth_url("/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(transport)?;

        if !resp.status().is_success() {
            // The service answers bad credentials with 400 as well as 401;
            // both are authentication failures from the caller's view.
            let err = error_from_response(resp).await;
            return Err(match err {
                ApiError::Server { status: 400, message } => ApiError::Authentication(message),
                other => other,
            });
        }

        resp.json::<Identity>().await.map_err(malformed)
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> ApiResult<()> {
        let resp = self
            .http
            .post(self.config.auth_url("/register"))
            .json(&json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .map_err(transport)?;

        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }

    async fn fetch_profile(&self, auth: Option<&str>) -> ApiResult<Profile> {
        let req = self.http.get(self.config.auth_url("/profile"));
        let resp = self.with_auth(req, auth).send().await.map_err(transport)?;

        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Profile>().await.map_err(malformed)
    }

    async fn push_profile(&self, auth: Option<&str>, patch: &ProfilePatch) -> ApiResult<Profile> {
        let req = self.http.put(self.config.auth_url("/profile")).json(patch);
        let resp = self.with_auth(req, auth).send().await.map_err(transport)?;

        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Profile>().await.map_err(malformed)
    }
}
