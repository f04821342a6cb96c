//! Login and logout
//!
//! - GET /login - Login form
//! - POST /login - Submit credentials to the backend
//! - POST /logout - Expire the session cookie

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use maud::{html, Markup};
use serde::Deserialize;
use std::sync::Arc;

use super::layout::root_layout;
use crate::backend::Credentials;
use crate::session::{self, Session, LOGIN_PATH};
use crate::web::state::AppState;

/// Where a successful login lands
pub const DASHBOARD_PATH: &str = "/dashboard";

const LOGIN_FAILED: &str = "Login failed";

/// Submitted login form
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// GET /login
pub async fn login_page() -> Markup {
    render_login(None, "")
}

/// POST /login
///
/// Calls the backend once, forwarding any session the browser already
/// holds. Any HTTP response navigates to the dashboard with the
/// backend's cookies relayed; the dashboard's session guard sends the
/// browser back here if no session cookie was set. Only a transport
/// failure re-renders the form.
pub async fn submit_login(
    State(state): State<Arc<AppState>>,
    session: Option<Session>,
    Form(form): Form<LoginForm>,
) -> Response {
    let credentials = Credentials::new(form.email, form.password);

    if let Err(reason) = credentials.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            render_login(Some(reason), &credentials.email),
        )
            .into_response();
    }

    match state.backend.login(&credentials, session.as_ref()).await {
        Ok(login) => {
            if login.is_success() {
                tracing::info!(cookies = login.set_cookies.len(), "Login succeeded");
            } else {
                tracing::warn!(status = login.status, "Login returned non-success status");
            }
            redirect_with_cookies(DASHBOARD_PATH, &login.set_cookies)
        }
        Err(e) => {
            tracing::error!(error = %e, "Login request failed");
            (
                StatusCode::BAD_GATEWAY,
                render_login(Some(LOGIN_FAILED), &credentials.email),
            )
                .into_response()
        }
    }
}

/// POST /logout
///
/// Expires the session cookie in the browser. The backend is not told.
pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    tracing::info!("Logging out");
    let jar = session::expire(jar, &state.config.session.cookie_name);
    (jar, Redirect::to(LOGIN_PATH))
}

/// Redirect and relay the backend's `Set-Cookie` headers to the browser
fn redirect_with_cookies(target: &str, set_cookies: &[String]) -> Response {
    let mut response = Redirect::to(target).into_response();

    for cookie in set_cookies {
        match HeaderValue::from_str(cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(_) => tracing::warn!("Dropping malformed Set-Cookie header from backend"),
        }
    }

    response
}

fn render_login(error: Option<&str>, email: &str) -> Markup {
    root_layout(
        "Login",
        false,
        html! {
            div class="max-w-md mx-auto p-6 mt-20 bg-white rounded shadow" {
                h2 class="text-xl font-semibold mb-4" { "Login" }
                @if let Some(error) = error {
                    div class="mb-4 p-2 rounded bg-red-100 text-red-700" role="alert" { (error) }
                }
                form method="post" action="/login" class="space-y-4" {
                    input type="email" name="email" value=(email) placeholder="Email"
                        class="w-full border p-2 rounded";
                    input type="password" name="password" placeholder="Password"
                        class="w-full border p-2 rounded";
                    button type="submit" class="w-full bg-blue-600 text-white p-2 rounded" { "Login" }
                }
            }
        },
    )
}
