use maud::{Markup, html};
use std::collections::BTreeMap;

use crate::controller::standings::{SeasonStandings, TournamentBreakdown};
use crate::model::PickOutcome;

fn display_name<'a>(names: &'a BTreeMap<String, String>, user_id: &'a str) -> &'a str {
    names.get(user_id).map_or(user_id, String::as_str)
}

#[must_use]
pub fn render_standings_template(data: &SeasonStandings) -> Markup {
    html! {
        h3 { "Standings" }
        @if !data.unavailable.is_empty() {
            p class="warning" {
                "Results unavailable for: " (data.unavailable.join(", ")) ". Those picks count as 0 for now."
            }
        }
        @if data.standings.is_empty() {
            p { "No picks yet for " (data.season) "." }
        } @else {
            table class="styled-table" {
                thead {
                    tr {
                        th { "PLACE" }
                        th { "PLAYER" }
                        @for t in &data.tournaments {
                            th { (t) }
                        }
                        th { "TOTAL" }
                    }
                }
                tbody {
                    @for (i, score) in data.standings.iter().enumerate() {
                        tr {
                            td { (i + 1) }
                            td { (display_name(&data.display_names, &score.user_id)) }
                            @for t in &data.tournaments {
                                td {
                                    @match score.per_tournament_points.get(t) {
                                        Some(pts) => { (*pts) }
                                        None => { "-" }
                                    }
                                }
                            }
                            td { strong { (score.total_points) } }
                        }
                    }
                }
            }
        }
    }
}

fn outcome_class(outcome: PickOutcome) -> &'static str {
    match outcome {
        PickOutcome::NotFound => "pick-not-found",
        PickOutcome::Withdrawn { .. } => "pick-withdrawn",
        PickOutcome::MissedCut => "pick-missed-cut",
        PickOutcome::Finished { .. } => "pick-finished",
    }
}

#[must_use]
pub fn render_breakdown_template(data: &TournamentBreakdown) -> Markup {
    html! {
        h3 { (data.tournament.name) }
        @if !data.results_available {
            p class="warning" { "Results are not available right now; every pick shows 0 points." }
        }
        @if !data.picks_visible {
            p { "Picks are hidden until " (data.tournament.lock_time.format("%b %-d %H:%M %:z").to_string()) "." }
        } @else if data.rows.is_empty() {
            p { "Nobody picked for this tournament." }
        } @else {
            table class="styled-table" {
                thead {
                    tr {
                        th { "PLAYER" }
                        th { "PICKS" }
                        th { "POINTS" }
                    }
                }
                tbody {
                    @for row in &data.rows {
                        tr {
                            td { (display_name(&data.display_names, &row.user_id)) }
                            td {
                                ul class="picks" {
                                    @for pick in &row.points.per_pick {
                                        li class=(outcome_class(pick.outcome)) {
                                            span class="pick-name" { (pick.pick.player_name) }
                                            " "
                                            span class="pick-points" { (pick.label()) }
                                        }
                                    }
                                }
                            }
                            td { strong { (row.points.total) } }
                        }
                    }
                }
            }
        }
    }
}
