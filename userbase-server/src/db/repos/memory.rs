//! In-process user repository
//!
//! Same contract as `PgUserRepo`: ids start at 1 and are never reused,
//! missing rows are `None`/`0`, and `merge_update` is atomic under the lock.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::UserRepository;
use crate::db::DbError;
use crate::models::{NewUser, User, UserPatch};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, User>,
    last_id: i64,
}

/// User repository backed by a `BTreeMap`
#[derive(Default)]
pub struct MemoryUserRepo {
    table: Mutex<Table>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.table().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn insert(&self, user: &NewUser) -> Result<i64, DbError> {
        let mut table = self.table();
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, user.clone().into_user(id));
        Ok(id)
    }

    async fn fetch_one(&self, id: i64) -> Result<Option<User>, DbError> {
        Ok(self.table().rows.get(&id).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<User>, DbError> {
        Ok(self.table().rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, user: &User) -> Result<u64, DbError> {
        let mut table = self.table();
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(0);
        };
        row.name = user.name.clone();
        row.location = user.location.clone();
        row.age = user.age;
        Ok(1)
    }

    async fn merge_update(&self, id: i64, patch: &UserPatch) -> Result<u64, DbError> {
        let mut table = self.table();
        match table.rows.get_mut(&id) {
            Some(row) => {
                patch.apply_to(row);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        Ok(u64::from(self.table().rows.remove(&id).is_some()))
    }
}
