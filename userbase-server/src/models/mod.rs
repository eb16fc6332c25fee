//! Domain models
//!
//! `User` is the stored entity. `NewUser` and `UserPatch` are the create and
//! partial-update payloads; neither lets a client choose the id.

pub mod patch;
pub mod user;

pub use patch::{FieldUpdate, UserPatch};
pub use user::{NewUser, User};
