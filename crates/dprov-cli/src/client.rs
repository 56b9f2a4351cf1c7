use serde_json::{Value, json};

use dprov_core::schema::{CollectionSpec, FieldSpec, PermissionGrant};

use crate::error::{ApiError, AuthError};

/// Bearer session for one provisioning run. Write-once: obtained from
/// `login`, read by every subsequent call, never refreshed or
/// persisted.
#[derive(Debug)]
pub struct Session {
    token: String,
}

/// Thin client over the Directus schema API.
pub struct DirectusClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectusClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authed(
        &self,
        method: reqwest::Method,
        path: &str,
        session: &Session,
    ) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(&session.token)
    }

    /// Exchange admin credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(AuthError::Rejected { status, body });
        }

        let parsed: Value =
            serde_json::from_str(&body).map_err(|_| AuthError::MalformedResponse)?;
        let token = parsed
            .get("data")
            .and_then(|d| d.get("access_token"))
            .and_then(|t| t.as_str())
            .ok_or(AuthError::MalformedResponse)?;

        Ok(Session {
            token: token.to_string(),
        })
    }

    /// True only on a 2xx metadata read. Any error — 404 or otherwise
    /// — reads as "absent"; the status is logged so an expired token
    /// or transient failure is at least visible at debug level.
    pub async fn collection_exists(&self, name: &str, session: &Session) -> bool {
        let result = self
            .authed(reqwest::Method::GET, &format!("/collections/{name}"), session)
            .send()
            .await;
        match result {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) => {
                tracing::debug!(
                    collection = name,
                    status = %resp.status(),
                    "existence probe returned non-success, treating as absent"
                );
                false
            }
            Err(e) => {
                tracing::debug!(
                    collection = name,
                    error = %e,
                    "existence probe failed, treating as absent"
                );
                false
            }
        }
    }

    pub async fn create_collection(
        &self,
        spec: &CollectionSpec,
        session: &Session,
    ) -> Result<(), ApiError> {
        let resp = self
            .authed(reqwest::Method::POST, "/collections", session)
            .json(spec)
            .send()
            .await?;
        ok_or_status(resp).await
    }

    pub async fn update_field(
        &self,
        collection: &str,
        field: &FieldSpec,
        session: &Session,
    ) -> Result<(), ApiError> {
        let path = format!("/fields/{collection}/{}", field.name());
        let resp = self
            .authed(reqwest::Method::PATCH, &path, session)
            .json(field)
            .send()
            .await?;
        ok_or_status(resp).await
    }

    pub async fn create_field(
        &self,
        collection: &str,
        field: &FieldSpec,
        session: &Session,
    ) -> Result<(), ApiError> {
        let resp = self
            .authed(reqwest::Method::POST, &format!("/fields/{collection}"), session)
            .json(field)
            .send()
            .await?;
        ok_or_status(resp).await
    }

    pub async fn create_permission(
        &self,
        grant: &PermissionGrant,
        session: &Session,
    ) -> Result<(), ApiError> {
        let resp = self
            .authed(reqwest::Method::POST, "/permissions", session)
            .json(grant)
            .send()
            .await?;
        ok_or_status(resp).await
    }
}

async fn ok_or_status(resp: reqwest::Response) -> Result<(), ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}
