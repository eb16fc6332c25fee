//! Repository implementations for database access
//!
//! `UserRepository` is the seam handlers depend on:
//! - `PgUserRepo` issues parameterized SQL against the `users` table
//! - `MemoryUserRepo` keeps rows in process, for tests and local runs

pub mod memory;
pub mod users;

pub use memory::MemoryUserRepo;
pub use users::{PgUserRepo, UserRepository};
