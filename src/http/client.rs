use std::time::Duration;

use anyhow::{Context, Result as AnyResult};
use log::{debug, warn};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::settings::ApiSettings;
use crate::errors::{Error, Result};
use crate::state::session::SessionStore;

const GENERIC_ERROR: &str = "An error occurred";

/// HTTP client for the festival backend. Attaches the stored admin token to
/// every request and drops the session as soon as the backend rejects it.
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings, session: SessionStore) -> AnyResult<Self> {
        let client = Self::build_client(settings)?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn build_client(settings: &ApiSettings) -> AnyResult<Client> {
        Client::builder()
            .user_agent(settings.user_agent)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::POST, path, None).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::PATCH, path, None).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::DELETE, path, None).await
    }

    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("{method} {url}");

        let request = self.prepare(method, &url, body);
        let response = request.send().await.map_err(Error::Network)?;

        self.read_json(response).await
    }

    fn prepare<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> RequestBuilder {
        let mut request = self.client.request(method, url);

        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Same move as the SPA's response interceptor: a rejected token
            // is gone, whatever the caller was doing.
            if let Err(e) = self.session.clear() {
                warn!("Failed to clear rejected session: {e}");
            }
            return Err(Error::SessionExpired);
        }

        if !status.is_success() {
            let detail = Self::extract_detail(response.text().await.ok());
            return Err(Error::Api {
                status: status.as_u16(),
                detail,
            });
        }

        response.json().await.map_err(Error::InvalidResponse)
    }

    /// Failure bodies carry a human-readable `detail` field when the
    /// backend has one; anything else falls back to a generic message.
    fn extract_detail(body: Option<String>) -> String {
        body.as_deref()
            .and_then(|text| serde_json::from_str::<Value>(text).ok())
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| GENERIC_ERROR.to_string())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_detail_prefers_the_server_message() {
        let detail =
            ApiClient::extract_detail(Some("{\"detail\":\"Registration is closed\"}".to_string()));
        assert_eq!(detail, "Registration is closed");
    }

    #[test]
    fn extract_detail_falls_back_on_missing_or_malformed_bodies() {
        assert_eq!(ApiClient::extract_detail(None), GENERIC_ERROR);
        assert_eq!(
            ApiClient::extract_detail(Some("not json".to_string())),
            GENERIC_ERROR
        );
        assert_eq!(
            ApiClient::extract_detail(Some("{\"error\":\"nope\"}".to_string())),
            GENERIC_ERROR
        );
    }
}
