use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PoolError {
    #[error("db error: {0}")]
    Db(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Pick(#[from] PickError),
    #[error("{0}")]
    Other(String),
}

impl From<rusqlite::Error> for PoolError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Db(err.to_string())
    }
}

impl From<reqwest::Error> for PoolError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for PoolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for PoolError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<String> for PoolError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for PoolError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}

/// Reasons a pick submission is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    #[error("tournament picks are locked for {0}")]
    Locked(String),
    #[error("exactly 4 golfers must be selected, got {0}")]
    WrongCount(usize),
    #[error("{0} is already selected for this tournament")]
    DuplicateInTournament(String),
    #[error("{player} was already used this season ({tournament})")]
    AlreadyUsedThisSeason { player: String, tournament: String },
    #[error("unknown tournament: {0}")]
    UnknownTournament(String),
}
