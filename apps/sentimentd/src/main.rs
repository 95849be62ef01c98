use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use sentimentd::server;
use sentimentd_bootstrap::{AppConfig, CliArgs, init_logging, wait_for_shutdown};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// sentimentd - text sentiment scoring over HTTP
#[derive(Parser)]
#[command(name = "sentimentd")]
#[command(about = "sentimentd - text sentiment scoring over HTTP")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
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
        config: cli.config.as_ref().map(|p| p.to_string_lossy().into_owned()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    init_logging(&config.logging);

    if args.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.bind_socket_addr()?;
    let module = server::build_module(config)?;
    server::build_router(config, &module)?;

    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: &AppConfig) -> Result<()> {
    let addr = config.bind_socket_addr()?;
    let module = server::build_module(config)?;
    let router = server::build_router(config, &module)?;

    tracing::info!(
        %addr,
        scorer = module.service().scorer_id(),
        version = env!("CARGO_PKG_VERSION"),
        "sentimentd starting"
    );

    server::serve(router, addr, async {
        if let Err(e) = wait_for_shutdown().await {
            tracing::error!(error = %e, "Signal handling failed; shutting down");
        }
    })
    .await
}
