use anyhow::Result;
use clap::Parser;

mod serve;
mod tracing_setup;

/// CRUD HTTP service for the `users` table.
///
/// Reads DB_DRIVER and DB_SOURCE from ./app.env or the environment and
/// listens on port 4000.
#[derive(Parser, Debug)]
#[command(name = "userbase", version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();
    tracing_setup::init().ok();

    serve::run_serve().await
}
