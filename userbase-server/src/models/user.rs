//! User entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table.
///
/// Decoded by column name, so the table's column order does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    #[sqlx(rename = "userid")]
    pub id: i64,
    pub name: String,
    pub location: String,
    pub age: i64,
}

/// Create payload. Missing fields decode to their zero value; any `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub name: String,
    pub location: String,
    pub age: i64,
}

impl NewUser {
    pub fn new(name: impl Into<String>, location: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            age,
        }
    }

    /// Attach a storage-assigned id.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            location: self.location,
            age: self.age,
        }
    }
}
