use clap::Parser;
use serde_json::Value;

use crate::controller::sportsdata::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sqlite filename holding users and picks. `:memory:` works for a throwaway run.
    #[arg(
        short = 'n',
        long,
        value_name = "DATABASE_NAME",
        default_value = "golf_pool.db"
    )]
    pub db_name: String,
    /// If specified, this sql is run on program startup. Separate several files with `;`.
    #[arg(long, value_name = "DATABASE_STARTUP_SCRIPT", value_parser = crate::args::validation::check_readable_file)]
    pub db_startup_script: Option<String>,
    /// Users and picks to load at startup.
    #[arg(
        long,
        value_name = "PICKS_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub db_populate_json: Option<Value>,
    /// Season shown when a request does not name one.
    #[arg(short = 's', long, value_name = "SEASON", default_value_t = 2025)]
    pub season: i32,
    #[arg(short = 'p', long, value_name = "PORT", default_value_t = 8081)]
    pub port: u16,
    /// SportsData.io key, or the path of a secrets file holding it.
    #[arg(
        long,
        value_name = "SPORTDATA_API_KEY",
        env = "SPORTDATA_API_KEY",
        hide_env_values = true
    )]
    pub sportsdata_api_key: Option<String>,
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub sportsdata_base_url: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub db_startup_script: Option<String>,
    pub db_populate_json: Option<Value>,
    pub combined_sql_script: String,
    pub season: i32,
    pub port: u16,
    pub sportsdata_api_key: String,
    pub sportsdata_base_url: String,
}

impl TryFrom<Args> for CleanArgs {
    type Error = String;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let combined_sql_script = match &args.db_startup_script {
            Some(files) => files
                .split(';')
                .map(|file| {
                    std::fs::read_to_string(file)
                        .map_err(|e| format!("Could not read sql startup script '{file}': {e}"))
                })
                .collect::<Result<Vec<_>, _>>()?
                .join("\n"),
            None => String::new(),
        };

        Ok(Self {
            db_name: args.db_name,
            db_startup_script: args.db_startup_script,
            db_populate_json: args.db_populate_json,
            combined_sql_script,
            season: args.season,
            port: args.port,
            sportsdata_api_key: args.sportsdata_api_key.unwrap_or_default(),
            sportsdata_base_url: args.sportsdata_base_url,
        })
    }
}
