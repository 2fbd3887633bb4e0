use chrono::{DateTime, Utc};
use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::model::{Tournament, current_tournament, next_tournament};

pub const DEFAULT_INDEX_TITLE: &str = "Golf Pool";

fn tournament_line(label: &str, tournament: &Tournament) -> Markup {
    html! {
        p class="tournament-line" {
            strong { (label) } " "
            (tournament.name) " at " (tournament.course)
            " (" (tournament.start_date.format("%b %-d").to_string()) " - " (tournament.end_date.format("%b %-d").to_string()) ")"
        }
    }
}

#[must_use]
pub fn render_index_template(
    season: i32,
    schedule: &[Tournament],
    now: DateTime<Utc>,
) -> Markup {
    let title = format!("{DEFAULT_INDEX_TITLE} {season}");
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { (title) }
            @if let Some(t) = current_tournament(schedule, now) {
                (tournament_line("Now playing:", t))
            }
            @if let Some(t) = next_tournament(schedule, now) {
                (tournament_line("Up next:", t))
            }
            div id="standings"
                hx-get=(format!("standings?season={season}"))
                hx-trigger="load" hx-swap="innerHTML" {
                img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg";
            }
            h3 { "Tournaments" }
            ul class="tournament-links" {
                @for t in schedule {
                    li {
                        a href="#breakdown"
                            hx-get=(format!("tournament?slug={}", t.slug))
                            hx-target="#breakdown" hx-swap="innerHTML" {
                            (t.name)
                        }
                    }
                }
            }
            div id="breakdown" {}
        }
    }
}
