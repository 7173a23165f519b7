use clap::Parser;
use pitwall_config::PitwallConfig;
use pitwall_store::{AppRegistry, DataPaths, ProfileStore};

mod cli;
mod commands;
mod progress;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("pwl error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = PitwallConfig::load_with_dotenv()?;
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.general.resolve_data_dir());
    let paths = DataPaths::new(data_dir);
    let store = ProfileStore::new(paths.clone());
    let registry = AppRegistry::load(paths.registry_file())?;

    match cli.command {
        cli::Commands::Profile { action } => commands::profile::handle(action, &store, registry),
        cli::Commands::Show => commands::data::show(&store, &registry),
        cli::Commands::Set { target } => {
            commands::data::set(target, &config, &store, &registry).await
        }
        cli::Commands::Schedule { action } => {
            commands::schedule::handle(action, &store, &registry).await
        }
        cli::Commands::Op { action } => {
            commands::op::handle(action, &config, store, registry, cli.quiet).await
        }
        cli::Commands::Sync { action } => {
            commands::op::handle_sync(action, &config, store, registry, cli.quiet).await
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PITWALL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
