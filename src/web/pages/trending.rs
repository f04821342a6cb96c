//! Trending audio page

use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use maud::{html, Markup};
use std::sync::Arc;

use super::layout::root_layout;
use crate::backend::{TrendPayload, TrendQuery};
use crate::session::Session;
use crate::web::error::WebResult;
use crate::web::state::AppState;

/// GET /trending-audio?niche=
pub async fn trending_audio(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(query): Query<TrendQuery>,
) -> WebResult<Markup> {
    let query = query.without_blank_niche();
    let payload = state
        .backend
        .get_trending_audio(&query, Some(&session))
        .await?;

    Ok(render_trending(query.niche(), &payload, Utc::now()))
}

fn render_trending(niche: Option<&str>, payload: &TrendPayload, fetched_at: DateTime<Utc>) -> Markup {
    root_layout(
        "Trending Audio",
        true,
        html! {
            div class="p-6 max-w-5xl mx-auto" {
                h1 class="text-2xl font-bold mb-4" { "Trending Audio" }

                form method="get" action="/trending-audio" class="flex gap-2 mb-6" {
                    input type="text" name="niche" value=(niche.unwrap_or_default())
                        placeholder="Filter by niche" class="border p-2 rounded flex-1";
                    button type="submit" class="bg-blue-600 text-white px-4 rounded" { "Filter" }
                }

                (payload_view(payload))

                p class="mt-6 text-sm text-gray-500" {
                    "Fetched " (fetched_at.format("%Y-%m-%d %H:%M UTC").to_string())
                    " · "
                    a href="/dashboard" class="text-blue-600" { "Back to dashboard" }
                }
            }
        },
    )
}

fn payload_view(payload: &TrendPayload) -> Markup {
    if payload.items().is_some_and(|items| items.is_empty()) {
        return html! {
            p class="text-gray-600" { "No trending audio found" }
        };
    }

    match payload.table() {
        Some(table) => html! {
            table class="w-full bg-white rounded shadow text-left" {
                thead {
                    tr {
                        @for column in &table.columns {
                            th class="p-2 border-b" { (column) }
                        }
                    }
                }
                tbody {
                    @for row in &table.rows {
                        tr {
                            @for cell in row {
                                td class="p-2 border-b" { (cell) }
                            }
                        }
                    }
                }
            }
        },
        None => {
            let pretty = serde_json::to_string_pretty(&payload.0).unwrap_or_default();
            html! {
                pre class="p-4 bg-white rounded shadow overflow-x-auto text-sm" { (pretty) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_renders_table() {
        let payload = TrendPayload(json!([{"title": "Song <A>", "uses": 12}]));
        let page = render_trending(Some("fitness"), &payload, fixed_time()).into_string();

        assert!(page.contains("<th class=\"p-2 border-b\">title</th>"));
        assert!(page.contains("Song &lt;A&gt;"));
        assert!(page.contains(r#"value="fitness""#));
        assert!(page.contains("Fetched 2026-10-17 12:30 UTC"));
    }

    #[test]
    fn test_renders_empty_list() {
        let payload = TrendPayload(json!({"items": []}));
        let page = render_trending(None, &payload, fixed_time()).into_string();
        assert!(page.contains("No trending audio found"));
    }

    #[test]
    fn test_renders_raw_json_fallback() {
        let payload = TrendPayload(json!({"status": "warming up"}));
        let page = render_trending(None, &payload, fixed_time()).into_string();
        assert!(page.contains("<pre"));
        assert!(page.contains("warming up"));
    }
}
