use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use frontfiles::remote::RemoteClient;
use frontfiles::session::SessionStore;
use frontfiles::tree::TreeModel;

use crate::Commands;

const TUI_LOG: &str = "tui.log";

#[derive(Parser)]
#[command(name = "frontfiles")]
#[command(about = "Project workspace tree client", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            if std::env::var_os("RUST_LOG").is_some() {
                init_tui_tracing();
            }
            frontfiles::tui::run()?;
        }
        Some(command) => {
            init_tracing();
            crate::cli_exec::handle_command(command)?
        }
    }

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Sends log lines to `tui.log` in the store; stderr sits under the
/// alternate screen. Without a store there is nowhere to log to.
fn init_tui_tracing() {
    let Ok(store) = open_store() else {
        return;
    };
    let path = store.root().join(TUI_LOG);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

pub(crate) fn open_store() -> Result<SessionStore> {
    let cwd = std::env::current_dir().context("get current dir")?;
    SessionStore::discover(&cwd)
}

pub(crate) fn open_client() -> Result<RemoteClient> {
    RemoteClient::from_store(open_store()?)
}

/// Fetches and indexes the configured project's tree.
pub(crate) fn load_tree(client: &RemoteClient) -> Result<TreeModel> {
    let root = client.fetch_tree(client.config().project_id)?;
    TreeModel::from_root(root).context("index tree")
}
