use clap::Parser;
use coin_ticker::cli::{Cli, Commands};
use coin_ticker::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::parse(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    coin_ticker::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Fetch(args) => {
            tracing::debug!("Running one-shot fetch");
            args.execute(&config).await?;
        }
        Commands::Watch(args) => {
            tracing::info!("Starting ticker watch");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Feed: {}", config.feed.base_url);
            println!("  Limit: {}", config.feed.limit);
            println!("  Timeout: {}s", config.feed.timeout_secs);
            println!("  Refresh interval: {}s", config.feed.refresh_interval_secs);
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
            match config.telemetry.metrics_port {
                Some(port) => println!("  Metrics: :{}", port),
                None => println!("  Metrics: disabled"),
            }
        }
    }

    Ok(())
}
