mod registered_modules;

use std::path::PathBuf;

use anyhow::Result;
use api_gateway::{ApiGateway, ApiGatewayConfig};
use clap::{Parser, Subcommand};
use poc_bootstrap::{AppConfig, CliArgs};

/// Jenkins POC Server - calculator and user directory REST API
#[derive(Parser)]
#[command(name = "poc-server")]
#[command(about = "Jenkins POC Server - calculator and user directory REST API")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config,
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(&args);

    poc_bootstrap::init_logging(&config.logging)?;

    if args.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    // Dispatch subcommands (default: run)
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: &AppConfig) -> Result<()> {
    tracing::info!(
        app = %config.app.name,
        version = %config.app.version,
        "Jenkins POC server starting"
    );

    let gateway = registered_modules::rest_modules()
        .into_iter()
        .fold(ApiGateway::new(ApiGatewayConfig::from(config)), |gw, m| {
            gw.with_module(m)
        });

    let cancel = poc_bootstrap::shutdown_token();
    gateway.serve(cancel).await?;

    tracing::info!("Jenkins POC server stopped");
    Ok(())
}
