//! userbase-server: HTTP CRUD service for a single `users` table
//!
//! Layers, leaf first:
//! - `config` - `DbConfig` from `app.env` and the environment
//! - `db` - connection pool and the user repository
//! - `models` - the `User` entity and request payloads
//! - `http` - extractors, handlers, router, server loop

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::{create_pool, DbError, MemoryUserRepo, PgUserRepo, UserRepository};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{FieldUpdate, NewUser, User, UserPatch};
