use anyhow::Result;
use clap::{Parser, Subcommand};

/// leadrelay - contact inquiry email relay
#[derive(Parser)]
#[command(name = "leadrelay")]
#[command(about = "Relays marketing-site contact inquiries as outbound email", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = leadrelay::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize logging
    leadrelay::observability::init_tracing(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => {
            // Use CLI overrides if provided, otherwise use config
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            tracing::info!("Starting leadrelay server...");
            leadrelay::server::serve(config, &host, port).await
        }
    }
}
