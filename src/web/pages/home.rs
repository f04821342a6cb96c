//! Landing page

use maud::{html, Markup};

use super::layout::{root_layout, SITE_TITLE};
use crate::session::Session;

/// GET /
pub async fn home(session: Option<Session>) -> Markup {
    root_layout(
        SITE_TITLE,
        session.is_some(),
        html! {
            div class="p-8" {
                h1 class="text-3xl font-bold mb-4" { "Creator Insights" }
                p class="mb-4" {
                    "Open "
                    a href="/login" class="text-blue-600" { "Login" }
                    " or "
                    a href="/dashboard" class="text-blue-600" { "Dashboard" }
                    "."
                }
            }
        },
    )
}
