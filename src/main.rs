use golf_pool::args;
use golf_pool::controller::db_prefill::db_prefill;
use golf_pool::controller::http_handlers::configure_routes;
use golf_pool::controller::sportsdata::SportsDataClient;
use golf_pool::state::AppState;
use golf_pool::storage::SqlitePicksStore;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = args::args_checks()?;

    let store = SqlitePicksStore::open(&args.db_name)?;
    if args.db_startup_script.is_some() {
        store.execute_batch(&args.combined_sql_script).await?;
        info!(script = ?args.db_startup_script, "ran startup script");
    }

    if let Some(json) = &args.db_populate_json {
        db_prefill(json, &store).await?;
    }

    let has_api_key = !args.sportsdata_api_key.is_empty();
    let client = SportsDataClient::new(args.sportsdata_api_key.clone())
        .with_base_url(args.sportsdata_base_url.clone());
    let state = AppState::new(
        Arc::new(store),
        Arc::new(client),
        args.season,
        has_api_key,
    );

    info!(port = args.port, season = args.season, "starting server");
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .configure(configure_routes)
            .service(Files::new("/static", "./static").show_files_listing())
    })
    .bind(("0.0.0.0", args.port))?
    .run()
    .await?;
    Ok(())
}
