//! Root layout shared by every page

use maud::{html, Markup, DOCTYPE};

pub const SITE_TITLE: &str = "Creator Insights";
pub const SITE_DESCRIPTION: &str = "Trending audio & hashtag insights";

/// Wrap page content in the shared HTML shell
///
/// `signed_in` switches the navigation between a login link and a
/// logout button.
pub fn root_layout(title: &str, signed_in: bool, content: Markup) -> Markup {
    let full_title = if title.is_empty() || title == SITE_TITLE {
        SITE_TITLE.to_string()
    } else {
        format!("{} · {}", title, SITE_TITLE)
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(SITE_DESCRIPTION);
                title { (full_title) }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="bg-gray-50 text-gray-900" {
                (nav(signed_in))
                main class="min-h-screen" {
                    (content)
                }
            }
        }
    }
}

fn nav(signed_in: bool) -> Markup {
    html! {
        nav class="bg-white shadow-sm" {
            div class="max-w-5xl mx-auto px-4 flex items-center justify-between h-14" {
                a href="/" class="text-lg font-bold" { (SITE_TITLE) }
                @if signed_in {
                    form method="post" action="/logout" {
                        button type="submit" class="text-sm text-gray-600 hover:text-gray-900" { "Log out" }
                    }
                }
            }
        }
    }
}
