use std::path::PathBuf;

use clap::Parser;

/// tabsize: walks a simulated preferences window through tab switches and
/// logs how its frame follows each tab's preferred size.
#[derive(Parser, Debug)]
#[command(name = "tabsize", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error or a filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Set frames without animation.
    #[arg(long)]
    pub no_animate: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
