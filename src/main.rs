//! dice36 - play the race to 36 at the terminal.
//!
//! Narration goes to stdout, diagnostics to stderr.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dice36::{SessionConfig, Session, TerminalConsole};

#[derive(Parser)]
#[command(name = "dice36")]
#[command(about = "Six-player elimination dice game: reach exactly 36 to win")]
struct Args {
    /// Dice seed, for replaying the same sequence of rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = SessionConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut session = Session::from_config(TerminalConsole::stdio(), &config);
    session.run()?;
    Ok(())
}
