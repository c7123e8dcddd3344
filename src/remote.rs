use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::model::{ClientConfig, SessionTokens};
use crate::session::SessionStore;

mod auth_session;
mod errors;
mod files;
mod folders;
mod http_client;

pub use self::errors::{RemoteFailure, failure_of, user_message, validation_message};

mod types;
pub use self::types::*;

pub struct RemoteClient {
    config: ClientConfig,
    session: Mutex<SessionTokens>,
    store: Option<SessionStore>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: ClientConfig, session: SessionTokens) -> Result<Self> {
        let client = build_http_client(&config)?;
        Ok(Self {
            config,
            session: Mutex::new(session),
            store: None,
            client,
        })
    }

    /// Opens a client from the persisted config and session.
    ///
    /// Renewed credentials are written back to `store`; a failed renewal clears it.
    pub fn from_store(store: SessionStore) -> Result<Self> {
        let config = store.read_config()?;
        let session = store.read_session()?;
        if !session.is_signed_in() {
            anyhow::bail!("not signed in (run `frontfiles login`)");
        }
        let mut client = Self::new(config, session)?;
        client.store = Some(store);
        Ok(client)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> SessionTokens {
        self.session
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

fn build_http_client(config: &ClientConfig) -> Result<reqwest::blocking::Client> {
    let mut builder = reqwest::blocking::Client::builder().user_agent("frontfiles");
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    builder.build().context("build reqwest client")
}
