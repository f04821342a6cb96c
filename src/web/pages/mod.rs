//! Pages
//!
//! Server-rendered HTML views built with maud.

pub mod dashboard;
pub mod home;
pub mod layout;
pub mod login;
pub mod trending;

use axum::http::StatusCode;
use maud::{html, Markup};

use layout::root_layout;

/// 404 Not Found page
pub async fn not_found() -> (StatusCode, Markup) {
    (
        StatusCode::NOT_FOUND,
        root_layout(
            "Not Found",
            false,
            html! {
                div class="p-8 text-center" {
                    h1 class="text-6xl font-bold mb-4" { "404" }
                    p class="text-xl text-gray-600 mb-8" { "Page not found" }
                    a href="/" class="text-blue-600 underline" { "Go back home" }
                }
            },
        ),
    )
}

/// Error page shown when a request fails
pub fn error_page(status: StatusCode, message: &str, request_id: &str) -> Markup {
    root_layout(
        "Error",
        false,
        html! {
            div class="p-8 text-center" {
                h1 class="text-4xl font-bold mb-4" { (status.as_u16()) }
                p class="text-lg text-gray-700 mb-2" { (message) }
                p class="text-sm text-gray-400 mb-8" { "Request ID: " (request_id) }
                a href="/dashboard" class="text-blue-600 underline" { "Back to dashboard" }
            }
        },
    )
}
