use tracing::warn;

use super::types::Args;
use crate::model::season_schedule;

const SECRETS_LOCATIONS: [&str; 2] = [
    "/secrets/sportsdata_api_key",
    "/run/secrets/sportsdata_api_key",
];

impl Args {
    /// Check the arguments hang together and swap a secrets-file path for the key it holds.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database name is empty or the secrets file cannot be read
    pub fn validate(&mut self) -> Result<(), String> {
        if self.db_name.trim().is_empty() {
            return Err("Database name is required".to_string());
        }

        if season_schedule(self.season).is_empty() {
            warn!(
                season = self.season,
                "no tournament schedule for season, standings will be empty"
            );
        }

        let secrets_file = self
            .sportsdata_api_key
            .clone()
            .filter(|key| SECRETS_LOCATIONS.contains(&key.as_str()));
        if let Some(path) = secrets_file {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| format!("Could not read api key from {path}: {e}"))?;
            self.sportsdata_api_key = Some(contents.trim().to_string());
        }

        if self.sportsdata_api_key.as_deref().is_none_or(str::is_empty) {
            warn!("SPORTDATA_API_KEY not set, leaderboards will be unavailable");
        }
        Ok(())
    }
}
