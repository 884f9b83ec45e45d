use thiserror::Error;

/// The four error kinds the ingestion engine, store, and search service share.
#[derive(Debug, Error)]
pub enum GuzzleError {
    /// Caller-side bad input: empty required field, unparseable cursor date, malformed body.
    #[error("invalid input: {0}")]
    Invalid(String),

    /// A `(post_id, creator_did)` uniqueness violation. Treated as a no-op by the ingester.
    #[error("post already exists")]
    Conflict,

    /// A post id was requested that does not exist.
    #[error("post not found")]
    NotFound,

    /// Downstream I/O failure: database, websocket, or log file.
    #[error("backend error: {0}")]
    Backend(String),

    /// The record payload did not decode as a post commit record.
    #[error("failed to extract record: {0}")]
    ExtractError(String),
}

impl From<diesel::result::Error> for GuzzleError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(diesel::result::DatabaseErrorKind::UniqueViolation, _) => {
                GuzzleError::Conflict
            }
            diesel::result::Error::NotFound => GuzzleError::NotFound,
            other => GuzzleError::Backend(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for GuzzleError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        GuzzleError::Backend(format!("pool checkout failed: {err}"))
    }
}

impl From<tokio::task::JoinError> for GuzzleError {
    fn from(err: tokio::task::JoinError) -> Self {
        GuzzleError::Backend(format!("blocking task panicked: {err}"))
    }
}

impl From<serde_json::Error> for GuzzleError {
    fn from(err: serde_json::Error) -> Self {
        GuzzleError::ExtractError(err.to_string())
    }
}

impl From<std::io::Error> for GuzzleError {
    fn from(err: std::io::Error) -> Self {
        GuzzleError::Backend(err.to_string())
    }
}

impl From<tungstenite::Error> for GuzzleError {
    fn from(err: tungstenite::Error) -> Self {
        GuzzleError::Backend(err.to_string())
    }
}
