//! Session Context
//!
//! The session is the opaque cookie the backend sets on login. This
//! module reads it from incoming requests, hands it to protected pages,
//! and expires it on logout. Its value is never inspected.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;

use crate::web::AppState;

/// Where requests without a session are sent
pub const LOGIN_PATH: &str = "/login";

/// Session of the browser making the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    cookie_name: String,
    value: String,
}

impl Session {
    pub fn new(cookie_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            value: value.into(),
        }
    }

    /// Read the session cookie from a jar; empty values count as absent
    pub fn from_jar(jar: &CookieJar, cookie_name: &str) -> Option<Self> {
        jar.get(cookie_name)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
            .map(|value| Self::new(cookie_name, value))
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `Cookie` header value used to forward the session to the backend
    pub fn cookie_header(&self) -> String {
        format!("{}={}", self.cookie_name, self.value)
    }
}

/// Add a removal cookie (`Max-Age=0`, `Path=/`) for the session to the jar
pub fn expire(jar: CookieJar, cookie_name: &str) -> CookieJar {
    let mut removal = Cookie::new(cookie_name.to_string(), "");
    removal.set_path("/");
    removal.make_removal();
    jar.add(removal)
}

/// Protected pages take `Session` as an argument; requests without one
/// are redirected to the login page before the handler runs.
#[async_trait]
impl FromRequestParts<Arc<AppState>> for Session {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        Session::from_jar(&jar, &state.config.session.cookie_name).ok_or_else(|| {
            tracing::debug!(path = %parts.uri.path(), "No session, redirecting to login");
            Redirect::to(LOGIN_PATH)
        })
    }
}
