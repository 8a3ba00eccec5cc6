// File: crates/cli/src/main.rs
// Summary: Binary entry point; sets up logging, parses flags and reports failures.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rank_trend::cli::Cli;
use rank_trend::run::{exit_code, run};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(path) => println!("Wrote {}", path.display()),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(exit_code(&err));
        }
    }
}
