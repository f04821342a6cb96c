//! Test support: an in-process stand-in for the backend API
//!
//! Binds to an ephemeral local port and records every request it sees.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::web::{build_router, AppState};

pub const SESSION_COOKIE: &str = "access=tok123; Path=/; HttpOnly";

/// A request as received by the fake backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub cookie: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

struct FakeState {
    requests: Mutex<Vec<RecordedRequest>>,
    login_status: StatusCode,
    trends_status: StatusCode,
    trends_body: String,
}

pub struct FakeBackendBuilder {
    login_status: StatusCode,
    trends_status: StatusCode,
    trends_body: String,
}

impl FakeBackendBuilder {
    pub fn login_status(mut self, status: StatusCode) -> Self {
        self.login_status = status;
        self
    }

    pub fn trends_status(mut self, status: StatusCode) -> Self {
        self.trends_status = status;
        self
    }

    pub fn trends_body(mut self, body: impl Into<String>) -> Self {
        self.trends_body = body.into();
        self
    }

    pub async fn spawn(self) -> FakeBackend {
        let state = Arc::new(FakeState {
            requests: Mutex::new(Vec::new()),
            login_status: self.login_status,
            trends_status: self.trends_status,
            trends_body: self.trends_body,
        });

        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeBackend { addr, state }
    }
}

pub struct FakeBackend {
    addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeBackend {
    pub fn builder() -> FakeBackendBuilder {
        FakeBackendBuilder {
            login_status: StatusCode::OK,
            trends_status: StatusCode::OK,
            trends_body: r#"{"items": []}"#.to_string(),
        }
    }

    /// Backend that accepts every login and returns an empty trend list
    pub async fn start() -> Self {
        Self::builder().spawn().await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

async fn handle(
    State(state): State<Arc<FakeState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        cookie: header_text(header::COOKIE),
        content_type: header_text(header::CONTENT_TYPE),
        body,
    });

    match uri.path() {
        "/auth/login" if state.login_status.is_success() => (
            state.login_status,
            [(header::SET_COOKIE, SESSION_COOKIE)],
            r#"{"ok": true}"#,
        )
            .into_response(),
        "/auth/login" => (state.login_status, "invalid credentials").into_response(),
        "/v1/trends/audio" => Response::builder()
            .status(state.trends_status)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(state.trends_body.clone()))
            .unwrap(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Base URL of a port nothing is listening on
pub async fn closed_port_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Front-end router pointed at the given backend
pub fn test_app(api_base: &str) -> Router {
    let mut config = Config::default();
    config.backend.api_base = api_base.to_string();
    config.backend.request_timeout_secs = 5;

    build_router(AppState::new(config).unwrap())
}
