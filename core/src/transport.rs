//! HTTP collaborator: a thin reqwest wrapper that speaks envelopes.
//!
//! # Design
//! `Transport` holds the base URL, fixed 30-second timeouts, and the session
//! context for bearer-token injection. It never interprets failures for the
//! caller; it only classifies them into [`TransportError`] and hands them to
//! the safe-call adapter. Retries, caching, and cancellation are out of
//! scope — each call is a single shot.

use std::sync::Arc;
use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::envelope::Envelope;
use crate::error::TransportError;
use crate::session::SessionContext;

/// Connect and read timeout applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Envelope-speaking HTTP client with auth-token injection.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl Transport {
    pub fn new(base_url: &str, session: Arc<SessionContext>) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Unexpected(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Read the base URL from `KOS_API_URL`, defaulting to localhost.
    pub fn from_env(session: Arc<SessionContext>) -> Result<Self, TransportError> {
        let base_url =
            std::env::var("KOS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, TransportError> {
        self.execute(path, self.http.get(self.url(path))).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<Envelope<T>, TransportError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(path, self.http.get(self.url(path)).query(query))
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Envelope<T>, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(path, self.http.post(self.url(path)).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<T>, TransportError> {
        self.execute(path, self.http.delete(self.url(path))).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, TransportError> {
        let request = match self.session.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        let body = response.text().await.map_err(classify)?;
        if !status.is_success() {
            warn!(path, code = status.as_u16(), "request rejected");
            return Err(TransportError::Status {
                code: status.as_u16(),
                body,
            });
        }
        debug!(path, code = status.as_u16(), "request completed");
        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_connect() || err.is_timeout() {
        TransportError::Connectivity(err.to_string())
    } else {
        TransportError::Unexpected(err.to_string())
    }
}
