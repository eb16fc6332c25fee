//! User repository
//!
//! Handles user CRUD against the `users` table:
//! - every projection names its columns and casts integers to BIGINT, so
//!   `SERIAL`/`INTEGER` tables decode into `i64`
//! - merge_update: SELECT ... FOR UPDATE, merge, UPDATE in one transaction
//! - "no rows" is `Ok(None)` / `Ok(0)`, never an error

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{NewUser, User, UserPatch};

const UPDATE_SQL: &str = "UPDATE users SET name = $2, location = $3, age = $4 WHERE userid = $1";

/// Storage operations for the user entity (testable)
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the storage-assigned id.
    async fn insert(&self, user: &NewUser) -> Result<i64, DbError>;

    /// Fetch one user by id. A missing row is `Ok(None)`.
    async fn fetch_one(&self, id: i64) -> Result<Option<User>, DbError>;

    /// Fetch every user, fully materialised.
    async fn fetch_all(&self) -> Result<Vec<User>, DbError>;

    /// Overwrite name, location and age. Returns rows affected (0 or 1).
    async fn update(&self, id: i64, user: &User) -> Result<u64, DbError>;

    /// Fetch the row, merge the supplied fields onto it and write it back,
    /// atomically. Returns rows affected (0 if the id is absent).
    async fn merge_update(&self, id: i64, patch: &UserPatch) -> Result<u64, DbError>;

    /// Delete by id. Returns rows affected (0 if the id is absent).
    async fn delete(&self, id: i64) -> Result<u64, DbError>;
}

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepo {
    async fn insert(&self, user: &NewUser) -> Result<i64, DbError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, location, age) VALUES ($1, $2, $3) RETURNING userid::BIGINT",
        )
        .bind(&user.name)
        .bind(&user.location)
        .bind(user.age)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, "Inserted a single record");
        Ok(id)
    }

    async fn fetch_one(&self, id: i64) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT userid::BIGINT AS userid, name, location, age::BIGINT AS age
            FROM users
            WHERE userid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if user.is_none() {
            tracing::debug!(id, "No rows were returned");
        }
        Ok(user)
    }

    async fn fetch_all(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT userid::BIGINT AS userid, name, location, age::BIGINT AS age
            FROM users
            ORDER BY userid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update(&self, id: i64, user: &User) -> Result<u64, DbError> {
        let result = sqlx::query(UPDATE_SQL)
            .bind(id)
            .bind(&user.name)
            .bind(&user.location)
            .bind(user.age)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "Updated user");
        Ok(result.rows_affected())
    }

    async fn merge_update(&self, id: i64, patch: &UserPatch) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        // Row lock: a concurrent merge on the same id waits here and then
        // sees this transaction's write.
        let current = sqlx::query_as::<_, User>(
            r#"
            SELECT userid::BIGINT AS userid, name, location, age::BIGINT AS age
            FROM users
            WHERE userid = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut user) = current else {
            tracing::debug!(id, "Partial update of missing user");
            return Ok(0);
        };

        patch.apply_to(&mut user);

        let result = sqlx::query(UPDATE_SQL)
            .bind(id)
            .bind(&user.name)
            .bind(&user.location)
            .bind(user.age)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(id, rows = result.rows_affected(), "Merged partial update");
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE userid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "Deleted user");
        Ok(result.rows_affected())
    }
}
