//! Dashboard page

use maud::{html, Markup};

use super::layout::root_layout;
use crate::session::Session;

/// GET /dashboard
pub async fn dashboard(_session: Session) -> Markup {
    root_layout(
        "Dashboard",
        true,
        html! {
            div class="p-6" {
                h1 class="text-2xl font-bold mb-4" { "Dashboard" }
                div class="grid grid-cols-2 gap-4" {
                    (panel("Trending Audio"))
                    (panel("Trending Hashtags"))
                }
                div class="mt-6" {
                    a href="/trending-audio" class="text-blue-600" { "Open Trending Audio" }
                }
            }
        },
    )
}

fn panel(title: &str) -> Markup {
    html! {
        div class="p-4 bg-white rounded shadow" { (title) }
    }
}
