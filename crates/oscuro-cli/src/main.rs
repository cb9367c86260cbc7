//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which drive the settings controller.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use oscuro_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        // Paths must work even when the database cannot be opened
        Commands::Paths => handlers::paths::execute(&config),
        Commands::Show => handlers::show::execute(&bootstrap(config).await?).await,
        Commands::Toggle { switch, state } => {
            handlers::toggle::execute(&bootstrap(config).await?, switch, state).await
        }
        Commands::Volume { level } => {
            handlers::volume::execute(&bootstrap(config).await?, level).await
        }
        Commands::Reset { force } => {
            handlers::reset::execute(&bootstrap(config).await?, force).await
        }
        Commands::Panel => handlers::panel::execute(&bootstrap(config).await?).await,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables before parsing so `.env` can set OSCURO_DATA_DIR
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
