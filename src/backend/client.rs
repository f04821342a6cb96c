//! Backend REST API Client
//!
//! HTTP client for the login and trending audio endpoints.

use reqwest::{header, Client, Url};
use std::time::Duration;
use thiserror::Error;

use super::types::{Credentials, LoginResponse, TrendPayload, TrendQuery};
use crate::config::BackendConfig;
use crate::session::Session;

/// Backend REST API client
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    /// Create a new backend client with the given configuration
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base_url = Url::parse(&config.api_base)
            .map_err(|e| BackendError::InvalidBaseUrl(format!("{}: {}", config.api_base, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Origin every request is sent to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL, keeping any base path
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url.set_query(None);
        url
    }

    /// URL of the trending audio endpoint
    ///
    /// The `niche` parameter is only present for a non-empty niche.
    pub fn trending_audio_url(&self, niche: Option<&str>) -> Url {
        let mut url = self.endpoint("/v1/trends/audio");
        if let Some(niche) = niche.filter(|n| !n.is_empty()) {
            url.query_pairs_mut().append_pair("niche", niche);
        }
        url
    }

    /// Fetch trending audio, forwarding the session cookie when present
    ///
    /// The payload is returned exactly as the backend sent it. A non-2xx
    /// response is reported by status only; its body is never read.
    pub async fn get_trending_audio(
        &self,
        query: &TrendQuery,
        session: Option<&Session>,
    ) -> Result<TrendPayload, BackendError> {
        let url = self.trending_audio_url(query.niche());

        let mut request = self.client.get(url);
        if let Some(session) = session {
            request = request.header(header::COOKIE, session.cookie_header());
        }

        let response = request.send().await.map_err(BackendError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Trending audio request rejected");
            return Err(BackendError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<TrendPayload>().await.map_err(|e| {
            if e.is_decode() {
                BackendError::Decode(e.to_string())
            } else {
                BackendError::from_transport(e)
            }
        })
    }

    /// Submit credentials to the backend, forwarding any existing session
    ///
    /// Sends exactly one POST. The response body is ignored. Any HTTP
    /// response, whatever its status, is returned with its `Set-Cookie`
    /// headers; only transport failures are errors.
    pub async fn login(
        &self,
        credentials: &Credentials,
        session: Option<&Session>,
    ) -> Result<LoginResponse, BackendError> {
        let url = self.endpoint("/auth/login");

        let mut request = self.client.post(url).json(credentials);
        if let Some(session) = session {
            request = request.header(header::COOKIE, session.cookie_header());
        }

        let response = request.send().await.map_err(BackendError::from_transport)?;

        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect();

        Ok(LoginResponse {
            status: response.status().as_u16(),
            set_cookies,
        })
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when communicating with the backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned status {status}")]
    Status { status: u16 },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid backend URL: {0}")]
    InvalidBaseUrl(String),
}

impl BackendError {
    fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            BackendError::Timeout
        } else if e.is_connect() {
            BackendError::Unavailable
        } else {
            BackendError::Request(e)
        }
    }

    /// True when the request never got an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            BackendError::Unavailable | BackendError::Timeout | BackendError::Request(_)
        )
    }
}
