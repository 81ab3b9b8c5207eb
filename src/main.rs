use anyhow::{Context, Result};
use tracing::info;

use quattro_cli::{Config, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::from_args(std::env::args().skip(1)).context("bad command line")?;
    info!(
        difficulty = %config.difficulty,
        depth = config.search_config().depth,
        threads = config.threads,
        mode = ?config.mode,
        "quattro starting"
    );

    let outcome = Session::stdio(config.new_game()).run()?;
    info!(?outcome, "quattro shutting down");
    Ok(())
}
