mod sqlite;

pub use sqlite::SqlitePicksStore;

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::error::PoolError;
use crate::model::Pick;

/// Tournament slug -> picks.
pub type PicksBySlug = BTreeMap<String, Vec<Pick>>;

pub const SCHEMA_SQLITE: &[&str] = &[
    include_str!("sql/schema/sqlite/01_golfuser.sql"),
    include_str!("sql/schema/sqlite/02_pick.sql"),
];

#[async_trait]
pub trait PicksStore: Send + Sync {
    async fn upsert_user(&self, user_id: &str, display_name: &str) -> Result<(), PoolError>;
    /// Replaces whatever the user had for this tournament.
    async fn save_picks(
        &self,
        user_id: &str,
        tournament_slug: &str,
        picks: &[Pick],
    ) -> Result<(), PoolError>;
    async fn get_picks(&self, user_id: &str, tournament_slug: &str)
    -> Result<Vec<Pick>, PoolError>;
    async fn get_user_picks(&self, user_id: &str) -> Result<PicksBySlug, PoolError>;
    /// Every known user, including those without picks.
    async fn get_all_picks(&self) -> Result<BTreeMap<String, PicksBySlug>, PoolError>;
    async fn get_display_names(&self) -> Result<BTreeMap<String, String>, PoolError>;
}
