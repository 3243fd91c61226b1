use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use super_trunfo::run;

#[derive(Debug, Parser)]
#[command(author, version, about = "Super Trunfo city-card match for the console")]
struct Cli {
    /// Suppress diagnostic logging on stderr
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if !cli.quiet {
        // Diagnostics go to stderr; stdout stays a clean game transcript.
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("super_trunfo=info")),
            )
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())?;
    Ok(())
}
