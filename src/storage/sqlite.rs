use async_trait::async_trait;
use rusqlite::{Connection, params};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

use super::{PicksBySlug, PicksStore, SCHEMA_SQLITE};
use crate::error::PoolError;
use crate::model::Pick;

#[derive(Clone)]
pub struct SqlitePicksStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqlitePicksStore {
    /// Open (or create) the database file and make sure the schema exists.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened or the schema fails to apply
    pub fn open(db_name: &str) -> Result<Self, PoolError> {
        let conn = Connection::open(db_name)?;
        Self::from_connection(conn)
    }

    /// # Errors
    ///
    /// Will return `Err` if the schema fails to apply
    pub fn open_in_memory() -> Result<Self, PoolError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, PoolError> {
        conn.execute_batch(&SCHEMA_SQLITE.join("\n"))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run arbitrary sql inside a transaction, e.g. a startup script or a test fixture.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any statement fails; nothing is committed in that case
    pub async fn execute_batch(&self, sql: &str) -> Result<(), PoolError> {
        let sql = sql.to_string();
        self.interact(move |conn| {
            let tx = conn.transaction()?;
            tx.execute_batch(&sql)?;
            tx.commit()
        })
        .await
    }

    async fn interact<T, F>(&self, f: F) -> Result<T, PoolError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, rusqlite::Error> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| PoolError::Db("sqlite connection mutex poisoned".into()))?;
            f(&mut *guard).map_err(PoolError::from)
        })
        .await
        .map_err(|e| PoolError::Other(format!("sqlite task failed: {e}")))?
    }
}

fn read_picks(
    conn: &Connection,
    query: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<(String, String, Pick)>, rusqlite::Error> {
    let mut stmt = conn.prepare(query)?;
    let rows = stmt.query_map(params, |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            Pick {
                player_name: row.get(2)?,
                player_id: row.get(3)?,
            },
        ))
    })?;
    rows.collect()
}

#[async_trait]
impl PicksStore for SqlitePicksStore {
    async fn upsert_user(&self, user_id: &str, display_name: &str) -> Result<(), PoolError> {
        let user_id = user_id.to_string();
        let display_name = display_name.to_string();
        self.interact(move |conn| {
            conn.execute(
                "INSERT INTO golfuser (user_id, display_name) VALUES (?1, ?2)
                 ON CONFLICT (user_id) DO UPDATE SET display_name = excluded.display_name",
                params![user_id, display_name],
            )?;
            Ok(())
        })
        .await
    }

    async fn save_picks(
        &self,
        user_id: &str,
        tournament_slug: &str,
        picks: &[Pick],
    ) -> Result<(), PoolError> {
        let user_id = user_id.to_string();
        let slug = tournament_slug.to_string();
        let picks = picks.to_vec();
        debug!(user_id = %user_id, tournament = %slug, count = picks.len(), "saving picks");
        self.interact(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT OR IGNORE INTO golfuser (user_id, display_name) VALUES (?1, ?1)",
                params![user_id],
            )?;
            tx.execute(
                "DELETE FROM pick WHERE user_id = ?1 AND tournament_slug = ?2",
                params![user_id, slug],
            )?;
            for (slot, pick) in picks.iter().enumerate() {
                let slot = i64::try_from(slot).unwrap_or(i64::MAX);
                tx.execute(
                    "INSERT INTO pick (user_id, tournament_slug, slot, player_name, player_id)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![user_id, slug, slot, pick.player_name, pick.player_id],
                )?;
            }
            tx.commit()
        })
        .await
    }

    async fn get_picks(
        &self,
        user_id: &str,
        tournament_slug: &str,
    ) -> Result<Vec<Pick>, PoolError> {
        let user_id = user_id.to_string();
        let slug = tournament_slug.to_string();
        self.interact(move |conn| {
            read_picks(
                conn,
                "SELECT user_id, tournament_slug, player_name, player_id FROM pick
                 WHERE user_id = ?1 AND tournament_slug = ?2 ORDER BY slot",
                params![user_id, slug],
            )
        })
        .await
        .map(|rows| rows.into_iter().map(|(_, _, pick)| pick).collect())
    }

    async fn get_user_picks(&self, user_id: &str) -> Result<PicksBySlug, PoolError> {
        let user_id = user_id.to_string();
        let rows = self
            .interact(move |conn| {
                read_picks(
                    conn,
                    "SELECT user_id, tournament_slug, player_name, player_id FROM pick
                     WHERE user_id = ?1 ORDER BY tournament_slug, slot",
                    params![user_id],
                )
            })
            .await?;

        let mut by_slug = PicksBySlug::new();
        for (_, slug, pick) in rows {
            by_slug.entry(slug).or_default().push(pick);
        }
        Ok(by_slug)
    }

    async fn get_all_picks(&self) -> Result<BTreeMap<String, PicksBySlug>, PoolError> {
        let (users, rows) = self
            .interact(|conn| {
                let mut stmt = conn.prepare("SELECT user_id FROM golfuser ORDER BY user_id")?;
                let users = stmt
                    .query_map([], |row| row.get::<_, String>(0))?
                    .collect::<Result<Vec<_>, _>>()?;
                let rows = read_picks(
                    conn,
                    "SELECT user_id, tournament_slug, player_name, player_id FROM pick
                     ORDER BY user_id, tournament_slug, slot",
                    [],
                )?;
                Ok((users, rows))
            })
            .await?;

        let mut all: BTreeMap<String, PicksBySlug> =
            users.into_iter().map(|u| (u, PicksBySlug::new())).collect();
        for (user_id, slug, pick) in rows {
            all.entry(user_id)
                .or_default()
                .entry(slug)
                .or_default()
                .push(pick);
        }
        Ok(all)
    }

    async fn get_display_names(&self) -> Result<BTreeMap<String, String>, PoolError> {
        self.interact(|conn| {
            let mut stmt = conn.prepare("SELECT user_id, display_name FROM golfuser")?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;
            rows.collect()
        })
        .await
    }
}
