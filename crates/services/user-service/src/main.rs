//! User Service - command-line access to the user directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::config::UserServiceConfig;
use user_service_lib::DirectoryCommand;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "In-memory user directory")]
struct Cli {
    /// Seed file with the users to load
    #[arg(long, global = true, env = "USER_SERVICE_SEED_FILE")]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List users in insertion order
    List,
    /// Find the user matching both credentials
    Login {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Print users keyed by id
    ById,
    /// Delete a user from the store
    Delete {
        #[arg(long)]
        id: i32,
    },
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = UserServiceConfig::from_env();
    if let Some(seed) = cli.seed {
        config = config.with_seed_file(seed);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.service.log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match cli.command {
        Commands::List => DirectoryCommand::List,
        Commands::Login { username, password } => DirectoryCommand::Login { username, password },
        Commands::ById => DirectoryCommand::ById,
        Commands::Delete { id } => DirectoryCommand::Delete { id },
    };

    let mut stdout = std::io::stdout().lock();
    match user_service_lib::run_command(command, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {}", e.code(), e.user_message());
            ExitCode::FAILURE
        }
    }
}
