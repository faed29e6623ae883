//! FIRMS code lookup service.
//!
//! Serves `POST /api/search` over a CSV copy of the FIRMS code list. The file
//! is re-read for every request.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use firms_lookup::{server, AppState};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "firms-lookup")]
#[command(about = "Search the FIRMS customs facility code list")]
struct Args {
    /// FIRMS code list (CSV with header row)
    #[arg(long, env = "FIRMS_DATA", default_value = "data/firm_codes.csv")]
    data: PathBuf,

    /// Host to bind to
    #[arg(long, env = "FIRMS_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, env = "FIRMS_PORT", default_value = "3000")]
    port: u16,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let state = AppState::new(args.data);
    info!("Serving FIRMS codes from {}", state.data_path().display());

    let addr = server::start_server(state, &args.host, args.port).await?;
    info!("Search endpoint: http://{addr}/api/search");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
