//! Binary entry point for the Arlex terminal dashboard.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Terminal dashboard for browsing Arlex sensor readings.
#[derive(Parser, Debug)]
#[command(name = "arlex", version, about, long_about = None)]
struct Cli {
    /// Base URL of the readings backend.
    #[arg(long, env = "ARLEX_API_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Enable verbose (debug) logging.
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr; stdout belongs to the terminal UI.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    arlex_tui::run(&cli.base_url).await
}
