use arbscan::cli::{render_fee_table, Cli, Commands};
use arbscan::config::Config;
use clap::Parser;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        eprintln!("Warning: config file {} not found", cli.config);
        eprintln!("Using default configuration");
        Config::default()
    };

    // Initialize telemetry
    let _telemetry = arbscan::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Scan(args) => {
            args.execute(&config).await?;
        }
        Commands::Watch(args) => {
            tracing::info!("Starting watch mode");
            args.execute(&config).await?;
        }
        Commands::Spread(args) => {
            args.execute(&config).await?;
        }
        Commands::Fees => {
            print!("{}", render_fee_table(&config.fees.to_schedule()));
        }
        Commands::Config => {
            println!("Current configuration ({}):", cli.config);
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
