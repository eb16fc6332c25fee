//! Database layer - connection pool and the user repository
//!
//! # Design Principles
//!
//! - One `PgPool` per process, created at startup; connections go back to
//!   the pool on drop, error paths included
//! - Rows decoded by column name, never by position
//! - Partial updates lock the row they merge onto

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options, ping};
pub use repos::{MemoryUserRepo, PgUserRepo, UserRepository};
