//! Tracing setup for the userbase binary
//!
//! Environment variables:
//!   RUST_LOG    # Log filter (default: info)
//!
//! Example:
//!   RUST_LOG=userbase_server=debug,tower_http=debug userbase

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Initialize console tracing, honouring `RUST_LOG` when set
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
