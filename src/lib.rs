pub mod args;
pub mod error;
pub mod model;
pub mod picks;
pub mod score;
pub mod state;
pub mod storage;
pub mod controller {
    pub mod db_prefill;
    pub mod http_handlers;
    pub mod sportsdata;
    pub mod standings;
}
pub mod view {
    pub mod index;
    pub mod standings;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::{PickError, PoolError};
pub use score::{compute_season_standings, compute_tournament_points};
