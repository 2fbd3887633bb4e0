use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use tracing::{error, warn};

use crate::controller::standings::{load_season_standings, load_tournament_breakdown};
use crate::error::PoolError;
use crate::model::{Pick, find_tournament, season_schedule};
use crate::picks::submit_picks;
use crate::state::AppState;
use crate::view::index::render_index_template;
use crate::view::standings::{render_breakdown_template, render_standings_template};

fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map_or("", |s| s.trim())
}

fn json_flag(query: &HashMap<String, String>) -> bool {
    match get_param_str(query, "json") {
        "1" => true,
        "0" => false,
        other => other.parse().unwrap_or(false),
    }
}

/// Missing `season` falls back to the configured default.
fn season_param(query: &HashMap<String, String>, default: i32) -> Result<i32, HttpResponse> {
    match get_param_str(query, "season") {
        "" => Ok(default),
        s => s.parse().map_err(|_| {
            HttpResponse::BadRequest().json(json!({"error": "season must be a year, e.g. 2025"}))
        }),
    }
}

fn error_response(e: &PoolError) -> HttpResponse {
    match e {
        PoolError::Pick(pick) => HttpResponse::BadRequest().json(json!({"error": pick.to_string()})),
        PoolError::NotFound(what) => HttpResponse::NotFound().json(json!({"error": what})),
        other => {
            error!(error = %other, "request failed");
            HttpResponse::InternalServerError().json(json!({"error": other.to_string()}))
        }
    }
}

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let season = match season_param(&query, state.default_season) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let schedule = season_schedule(season);
    let markup = render_index_template(season, &schedule, state.now());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn standings(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let season = match season_param(&query, state.default_season) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let json = json_flag(&query);

    match load_season_standings(state.store.as_ref(), state.source.as_ref(), season).await {
        Ok(data) => {
            if json {
                HttpResponse::Ok().json(data)
            } else {
                let markup = render_standings_template(&data);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => error_response(&e),
    }
}

pub async fn tournament(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let slug = get_param_str(&query, "slug");
    if slug.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "slug parameter is required"}));
    }
    let Some(tournament) = find_tournament(slug) else {
        return error_response(&PoolError::NotFound(format!("tournament {slug}")));
    };
    let json = json_flag(&query);

    match load_tournament_breakdown(
        state.store.as_ref(),
        state.source.as_ref(),
        &tournament,
        state.now(),
    )
    .await
    {
        Ok(data) => {
            if json {
                HttpResponse::Ok().json(data)
            } else {
                let markup = render_breakdown_template(&data);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => error_response(&e),
    }
}

#[derive(Deserialize, Debug)]
pub struct PickSubmission {
    pub user_id: String,
    pub tournament: String,
    pub picks: Vec<Pick>,
}

pub async fn post_picks(body: web::Json<PickSubmission>, state: Data<AppState>) -> impl Responder {
    let submission = body.into_inner();
    if submission.user_id.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "user_id is required"}));
    }

    match submit_picks(
        state.store.as_ref(),
        &submission.user_id,
        &submission.tournament,
        &submission.picks,
        state.now(),
    )
    .await
    {
        Ok(()) => HttpResponse::Ok().json(json!({
            "user_id": submission.user_id,
            "tournament": submission.tournament,
            "saved": submission.picks.len(),
        })),
        Err(e) => {
            if let PoolError::Pick(reason) = &e {
                warn!(user_id = %submission.user_id, reason = %reason, "pick submission rejected");
            }
            error_response(&e)
        }
    }
}

pub async fn health(state: Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "has_sportsdata_key": state.has_api_key,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/standings", web::get().to(standings))
        .route("/tournament", web::get().to(tournament))
        .route("/picks", web::post().to(post_picks))
        .route("/health", web::get().to(health));
}
