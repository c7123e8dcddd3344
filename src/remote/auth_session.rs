use anyhow::{Context, Result};

use crate::model::{ClientConfig, SessionTokens};

use super::http_client::ensure_ok;
use super::{AccessToken, RefreshRequest, RemoteClient, RemoteFailure, TokenPair, TokenRequest};

impl RemoteClient {
    /// Exchanges a username/password for an access/refresh pair.
    pub fn login(config: &ClientConfig, username: &str, password: &str) -> Result<SessionTokens> {
        let client = super::build_http_client(config)?;
        let resp = client
            .post(format!("{}/authentication/token/", config.base_url))
            .json(&TokenRequest { username, password })
            .send()
            .map_err(|err| anyhow::Error::new(RemoteFailure::Unreachable(err.to_string())))
            .context("login")?;
        let pair: TokenPair = ensure_ok(resp, "login")?
            .json()
            .context("parse login response")?;
        Ok(SessionTokens::new(pair.access, pair.refresh))
    }

    pub(super) fn renew_access(&self, refresh: &str) -> Result<()> {
        let resp = self
            .client
            .post(self.url("/authentication/token/refresh/"))
            .json(&RefreshRequest { refresh })
            .send()
            .context("refresh token")?;
        let out: AccessToken = ensure_ok(resp, "refresh token")?
            .json()
            .context("parse refresh response")?;

        let updated = {
            let mut session = self
                .session
                .lock()
                .map_err(|_| anyhow::anyhow!("session lock poisoned"))?;
            session.access = Some(out.access);
            session.clone()
        };
        if let Some(store) = &self.store
            && let Err(err) = store
                .write_session(&updated)
                .context("persist renewed session")
        {
            tracing::warn!(error = %format!("{:#}", err), "could not save renewed session");
        }
        Ok(())
    }

    /// Drops both credentials, in memory and on disk.
    pub fn sign_out_locally(&self) {
        if let Ok(mut session) = self.session.lock() {
            *session = SessionTokens::default();
        }
        if let Some(store) = &self.store
            && let Err(err) = store.clear_session()
        {
            tracing::warn!(error = %format!("{:#}", err), "could not clear session");
        }
    }
}
