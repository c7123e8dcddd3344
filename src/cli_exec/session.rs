use frontfiles::model::{ClientConfig, ProjectId};
use frontfiles::remote::RemoteClient;
use frontfiles::session::SessionStore;

use crate::LoginArgs;

use super::*;

pub(super) fn handle_login_command(args: LoginArgs) -> Result<()> {
    let mut cfg = ClientConfig::new(&args.url, ProjectId(args.project));
    cfg.request_timeout_secs = args.timeout_secs;

    // Sign in before touching disk so a bad password leaves no store behind.
    let tokens = RemoteClient::login(&cfg, &args.username, &args.password)?;

    let store = match crate::cli_runtime::open_store() {
        Ok(store) => {
            store.write_config(&cfg)?;
            store
        }
        Err(_) => {
            let cwd = std::env::current_dir().context("get current dir")?;
            SessionStore::init(&cwd, &cfg)?
        }
    };
    store.write_session(&tokens)?;

    tracing::info!(base_url = %cfg.base_url, project = %cfg.project_id, "signed in");
    println!(
        "Logged in to {} (project {}) as {}",
        cfg.base_url, cfg.project_id, args.username
    );
    Ok(())
}

pub(super) fn handle_logout_command() -> Result<()> {
    let store = crate::cli_runtime::open_store()?;
    store.clear_session()?;
    println!("Logged out");
    Ok(())
}
