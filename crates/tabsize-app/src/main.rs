mod cli;
mod demo;

use tabsize_common::ConfigError;
use tabsize_config::TabsizeConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> Result<TabsizeConfig, ConfigError> {
    match args.config {
        Some(ref path) => tabsize_config::load_config_from(path),
        None => tabsize_config::load_config(),
    }
}

fn main() {
    let args = cli::parse();

    // Logging is configured from the config file, so load it first and
    // report the outcome once the subscriber is up.
    let loaded = load_config(&args);

    let log_directive = args
        .log_level
        .clone()
        .or_else(|| {
            loaded
                .as_ref()
                .ok()
                .map(|c| c.logging.level.as_directive().to_string())
        })
        .unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("tabsize v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        TabsizeConfig::default()
    });
    if args.no_animate {
        config.resize.animate = false;
    }

    if args.print_config {
        println!("{}", tabsize_config::config_to_json(&config));
        return;
    }

    demo::run(&config);
    tracing::info!("Done");
}
