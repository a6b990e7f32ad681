use thiserror::Error;

/// Persistence failures surfaced by the history layer. The not-found
/// decision is carried by `Option`/`bool` return values, not an error.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(String),
}
