use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod format;

use backstop_client::Client;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "backstop")]
#[command(about = "Backstop - fetch and trigger managed-database backups", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL override
    #[arg(long, global = true, env = "BACKSTOP_API_BASE")]
    api_base: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List deployments
    Deployments,
    /// List backups for a deployment
    List {
        /// Deployment id
        deployment_id: String,
    },
    /// Download a specific backup's archive
    Get {
        /// Deployment id
        deployment_id: String,
        /// Backup id
        backup_id: String,
    },
    /// Trigger an on-demand backup, wait for it, download the result
    Start {
        /// Deployment id
        deployment_id: String,
    },
    /// Show full metadata for a specific backup
    About {
        /// Deployment id
        deployment_id: String,
        /// Backup id
        backup_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; command output owns stdout, logs go to stderr
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .init();
    }

    // Resolve configuration once; everything downstream gets it injected.
    let config = CliConfig::load(cli.api_base)?;
    let client = Client::new(config.client_config());

    match cli.command {
        Commands::Deployments => commands::deployments::execute(&client).await?,
        Commands::List { deployment_id } => {
            commands::list::execute(&client, &deployment_id).await?
        }
        Commands::Get {
            deployment_id,
            backup_id,
        } => commands::get::execute(&client, &deployment_id, &backup_id).await?,
        Commands::Start { deployment_id } => {
            commands::start::execute(&client, &deployment_id).await?
        }
        Commands::About {
            deployment_id,
            backup_id,
        } => commands::about::execute(&client, &deployment_id, &backup_id).await?,
    }

    Ok(())
}
