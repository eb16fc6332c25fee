//! Partial-update payload
//!
//! Each field is tri-state: absent from the body, present as `null`, or
//! present with a value. Only values overwrite; the columns are `NOT NULL`,
//! so absent and null both keep the stored value.

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::User;

/// One field of a partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Key not present in the body
    #[default]
    Absent,
    /// Key present with `null`
    Null,
    /// Key present with a value
    Value(T),
}

impl<T> FieldUpdate<T> {
    pub(crate) fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Clone> FieldUpdate<T> {
    /// Write the new value into `slot`. Returns true if the field changed.
    fn merge_into(&self, field: &'static str, slot: &mut T) -> bool {
        match self {
            Self::Value(v) => {
                *slot = v.clone();
                true
            }
            Self::Null => {
                debug!(field, "null in partial update, keeping stored value");
                false
            }
            Self::Absent => false,
        }
    }
}

// Only reached when the key is present; `#[serde(default)]` covers absence.
impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}

/// Body of `PUT`/`PATCH /api/updateuser/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    /// Accepted for compatibility; the path id is authoritative.
    #[serde(default)]
    pub id: FieldUpdate<i64>,
    #[serde(default)]
    pub name: FieldUpdate<String>,
    #[serde(default)]
    pub location: FieldUpdate<String>,
    #[serde(default)]
    pub age: FieldUpdate<i64>,
}

impl UserPatch {
    /// Merge the supplied fields onto `user`, leaving the rest untouched.
    ///
    /// Returns the number of fields that were overwritten. `id` is never touched.
    pub fn apply_to(&self, user: &mut User) -> usize {
        [
            self.name.merge_into("name", &mut user.name),
            self.location.merge_into("location", &mut user.location),
            self.age.merge_into("age", &mut user.age),
        ]
        .into_iter()
        .filter(|changed| *changed)
        .count()
    }

    /// True when the body carried no field values at all.
    pub fn is_empty(&self) -> bool {
        self.name.value().is_none() && self.location.value().is_none() && self.age.value().is_none()
    }
}
