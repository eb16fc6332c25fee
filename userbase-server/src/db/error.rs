/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("could not connect to database: {0}")]
    Connect(#[source] sqlx::Error),
}
