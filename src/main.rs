use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use user_state::config::Config;
use user_state::logging::init_tracing;
use user_state::user::select_user;
use user_state::{HttpUserApi, UserStore};

#[derive(Debug, Parser)]
#[command(name = "user-state", version, about = "Fetch and show the current user")]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the current user and print the resulting state as JSON.
    Fetch {
        /// Mark the user as authorized before printing.
        #[arg(long)]
        authorized: bool,
    },
    /// Print the default config file path.
    ConfigPath,
    /// Print the default configuration as TOML.
    DefaultConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Fetch { authorized } => {
            let config = match &cli.config {
                Some(path) => Config::load_from(path),
                None => Config::load(),
            }
            .context("loading configuration")?;

            let api = HttpUserApi::new(&config.api).context("building API client")?;
            let store = UserStore::new();
            if authorized {
                store.set_authorized(true);
            }

            let outcome = store.fetch_user(&api).await;
            let rendered = store.select(|state| serde_json::to_string_pretty(select_user(state)))?;
            println!("{}", rendered);

            if outcome.is_fulfilled() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::ConfigPath => {
            println!("{}", Config::config_path().display());
            Ok(ExitCode::SUCCESS)
        }
        Command::DefaultConfig => {
            print!("{}", Config::default().to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
