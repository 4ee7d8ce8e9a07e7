use super::auth::AuthClient;
use super::constants::headers;
use super::page::Page;
use super::pagination::PageSource;
use crate::config::Config;
use crate::session::Session;
use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::Mutex;

const SESSION_EXPIRED: &str = "Session expired. Run 'avis-cli auth login' to log in again";

/// HTTP client for the feedback API.
///
/// Attaches the session's bearer token to every request. A 401 triggers one
/// token refresh followed by one retry of the original request; if the
/// refresh fails the session is cleared. Concurrent 401s share a single
/// refresh.
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
    session: Mutex<Session>,
    session_path: Option<PathBuf>,
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    pub fn new(config: &Config, session: Session) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(config.settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(headers::USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_custom_client(config.base_url.clone(), session, http_client))
    }

    /// Create a new client with custom HTTP client configuration
    pub fn with_custom_client(base_url: String, session: Session, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            session: Mutex::new(session),
            session_path: None,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Persist token refreshes and session clears to this file
    pub fn with_session_path(mut self, path: PathBuf) -> Self {
        self.session_path = Some(path);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get shared HTTP client for making requests (cheap clone)
    pub fn http_client(&self) -> reqwest::Client {
        self.http_client.clone()
    }

    /// Snapshot of the current session
    pub async fn session(&self) -> Session {
        self.session.lock().await.clone()
    }

    pub async fn replace_session(&self, session: Session) {
        *self.session.lock().await = session;
    }

    pub fn session_path(&self) -> Option<&Path> {
        self.session_path.as_deref()
    }

    /// Write the current session to the session file, if one is configured
    pub async fn persist_session(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.session_path {
            self.session.lock().await.save_to(path)?;
        }
        Ok(())
    }

    /// Drop the session in memory and on disk
    pub async fn logout(&self) -> anyhow::Result<()> {
        self.clear_session().await
    }

    /// Absolute URLs are used as-is, paths are joined onto the base URL
    pub fn resolve_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else if path_or_url.starts_with('/') {
            format!("{}{}", self.base_url, path_or_url)
        } else {
            format!("{}/{}", self.base_url, path_or_url)
        }
    }

    fn build_request(&self, method: &Method, url: &str, token: Option<&str>, body: Option<&Value>) -> reqwest::RequestBuilder {
        let mut request = self
            .http_client
            .request(method.clone(), url)
            .header("Accept", headers::CONTENT_TYPE_JSON);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }

    /// Send a request, refreshing the access token once on 401
    pub async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> anyhow::Result<reqwest::Response> {
        let url = self.resolve_url(path);
        let (access, refresh) = {
            let session = self.session.lock().await;
            (session.access_token.clone(), session.refresh_token.clone())
        };

        debug!("{} {}", method, url);
        let response = self
            .build_request(&method, &url, access.as_deref(), body)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;
        debug!("{} {} -> {}", method, url, response.status());

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        if refresh.is_none() {
            return Ok(response);
        }

        warn!("Access token rejected for {}", url);
        let new_access = self.fresh_access_token(access.as_deref()).await?;

        let response = self
            .build_request(&method, &url, Some(&new_access), body)
            .send()
            .await
            .with_context(|| format!("Retried request to {} failed", url))?;
        debug!("{} {} (retry) -> {}", method, url, response.status());

        Ok(response)
    }

    /// Token to retry with after `rejected` got a 401.
    ///
    /// Refreshes are serialised on `refresh_lock`. A caller that finds the
    /// access token already replaced reuses it instead of refreshing again,
    /// and one that finds the session cleared gives up.
    async fn fresh_access_token(&self, rejected: Option<&str>) -> anyhow::Result<String> {
        let _refreshing = self.refresh_lock.lock().await;

        let refresh = {
            let session = self.session.lock().await;
            match (&session.access_token, &session.refresh_token) {
                (Some(current), _) if Some(current.as_str()) != rejected => {
                    debug!("Access token already refreshed, reusing it");
                    return Ok(current.clone());
                }
                (_, Some(refresh)) => refresh.clone(),
                (_, None) => anyhow::bail!(SESSION_EXPIRED),
            }
        };

        info!("Refreshing access token");
        let auth = AuthClient::new(self.http_client.clone(), self.base_url.clone());
        let access = match auth.refresh(&refresh).await {
            Ok(access) => access,
            Err(e) => {
                warn!("Token refresh failed: {}", e);
                self.clear_session().await?;
                anyhow::bail!(SESSION_EXPIRED);
            }
        };

        let mut session = self.session.lock().await;
        if session.refresh_token.as_deref() != Some(refresh.as_str()) {
            // Logged out or replaced while the refresh was in flight
            return session.access_token.clone().context(SESSION_EXPIRED);
        }
        session.access_token = Some(access.clone());
        if let Some(path) = &self.session_path {
            session.save_to(path)?;
        }
        Ok(access)
    }

    async fn clear_session(&self) -> anyhow::Result<()> {
        self.session.lock().await.clear();
        if let Some(path) = &self.session_path {
            Session::remove_file(path)?;
        }
        Ok(())
    }

    /// Turn a non-success response into an error carrying status and body
    async fn check_status(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        anyhow::bail!("Request to {} failed with status {}: {}", url, status, error_text)
    }

    async fn send_json<T: DeserializeOwned>(&self, method: Method, path: &str, body: Option<&Value>) -> anyhow::Result<T> {
        let response = Self::check_status(self.send(method, path, body).await?).await?;
        let value: Value = response.json().await.context("Response body is not valid JSON")?;
        serde_json::from_value(value).with_context(|| format!("Unexpected response shape from {}", path))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        self.send_json(Method::GET, path, None).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let body = serde_json::to_value(body)?;
        self.send_json(Method::POST, path, Some(&body)).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let body = serde_json::to_value(body)?;
        self.send_json(Method::PUT, path, Some(&body)).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let body = serde_json::to_value(body)?;
        self.send_json(Method::PATCH, path, Some(&body)).await
    }

    /// POST where the response body is irrelevant
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<()> {
        let body = serde_json::to_value(body)?;
        Self::check_status(self.send(Method::POST, path, Some(&body)).await?).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<()> {
        Self::check_status(self.send(Method::DELETE, path, None).await?).await?;
        Ok(())
    }

    /// Fetch a list endpoint, accepting both envelopes and bare arrays
    pub async fn get_page<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<Page<T>> {
        let value: Value = self.get_json(path).await?;
        Page::from_json(value)
    }
}

#[async_trait]
impl<T> PageSource<T> for ApiClient
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, url: &str) -> anyhow::Result<Page<T>> {
        self.get_page(url).await
    }
}
