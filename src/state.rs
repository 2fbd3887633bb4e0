use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::controller::sportsdata::LeaderboardSource;
use crate::storage::PicksStore;

/// Shared by every request handler through `actix_web::web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PicksStore>,
    pub source: Arc<dyn LeaderboardSource>,
    pub default_season: i32,
    pub has_api_key: bool,
    /// Pins the clock used for lock checks; `None` means wall-clock time.
    pub fixed_now: Option<DateTime<Utc>>,
}

impl AppState {
    #[must_use]
    pub fn new(
        store: Arc<dyn PicksStore>,
        source: Arc<dyn LeaderboardSource>,
        default_season: i32,
        has_api_key: bool,
    ) -> Self {
        Self {
            store,
            source,
            default_season,
            has_api_key,
            fixed_now: None,
        }
    }

    #[must_use]
    pub fn with_fixed_now(mut self, now: DateTime<Utc>) -> Self {
        self.fixed_now = Some(now);
        self
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }
}
