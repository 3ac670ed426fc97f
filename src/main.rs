use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// SequenceIT marketing site and admin panel
#[derive(Parser)]
#[command(name = "sequenceit")]
#[command(about = "SequenceIT website, content admin and contact mailer", long_about = None)]
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
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage admin accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Grant or revoke admin panel access
    SetRole {
        #[arg(long)]
        email: String,

        #[arg(long, value_enum)]
        role: cli::user::Role,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = sequenceit::config::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    sequenceit::observability::init_observability(
        "sequenceit",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::migrate::migrate(config).await,
        Commands::Reset => cli::migrate::reset(config).await,
        Commands::User {
            command: UserCommands::SetRole { email, role },
        } => cli::user::set_role(config, email, role).await,
    }
}
