//! `cutie-link` — command-line host for the Cuti-E link SDK.
//!
//! Configures a [`LinkClient`] from flags and environment variables, then
//! runs one SDK operation: print the device identifier, request a link
//! token, check for the Feedback App, or open it.

mod config;
mod system;

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cutie_link_sdk::{FileStore, LinkClient};
use tracing::info;

use crate::config::{CliConfig, Overrides};
use crate::system::SystemDispatcher;

#[derive(Parser, Debug)]
#[command(name = "cutie-link")]
#[command(author, version, long_about = None)]
#[command(about = "Open the Cuti-E Feedback App from the command line")]
struct Cli {
    /// App ID from the Cuti-E admin dashboard (env: CUTIE_APP_ID).
    #[arg(long, global = true)]
    app_id: Option<String>,

    /// Legacy API key (env: CUTIE_API_KEY).
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Token API base URL (env: CUTIE_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Target the sandbox token API (env: CUTIE_SANDBOX).
    #[arg(long, global = true)]
    sandbox: bool,

    /// Device-id store file (env: CUTIE_STORE).
    #[arg(long, global = true)]
    store: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print this installation's device identifier.
    DeviceId,
    /// Request a link token and print it.
    Token,
    /// Report whether a `cutie://` handler is registered (always false on macOS).
    Installed,
    /// Open the Feedback App, or its store listing when missing (always the store on macOS).
    Open,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            app_id: self.app_id.clone(),
            api_key: self.api_key.clone(),
            api_url: self.api_url.clone(),
            sandbox: self.sandbox,
            store: self.store.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging on stderr (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env(cli.overrides());

    let store = match config.store_path {
        Some(path) => FileStore::at(path),
        None => FileStore::in_config_dir()
            .context("no location for the device-id store, pass --store")?,
    };
    info!(
        store = %store.path().display(),
        base_url = %config.link.base_url(),
        "cutie-link configured"
    );

    let client = LinkClient::with_config(config.link, SystemDispatcher, Arc::new(store));

    match cli.command {
        Command::DeviceId => println!("{}", client.device_id()),
        Command::Token => {
            let token = client
                .request_token()
                .await
                .context("failed to request link token")?;
            println!("{token}");
        }
        Command::Installed => println!("{}", client.is_feedback_app_installed()),
        Command::Open => {
            let opened_app = client
                .open_feedback_app()
                .await
                .context("failed to open the Feedback App")?;
            if opened_app {
                println!("Feedback App opened");
            } else {
                println!("Feedback App not installed, store listing opened");
            }
        }
    }

    Ok(())
}
