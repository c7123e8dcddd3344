use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};

use super::errors::{GENERIC_FAILURE, validation_message};
use super::{RemoteClient, RemoteFailure};

impl RemoteClient {
    /// Sends an authenticated request.
    ///
    /// A 401 triggers one credential renewal and exactly one retry of the
    /// rebuilt request. If renewal fails, the local session is cleared.
    pub(super) fn send_authed(
        &self,
        label: &str,
        build: impl Fn(&Client) -> RequestBuilder,
    ) -> Result<Response> {
        let resp = self.send_once(label, &build)?;
        if resp.status() != StatusCode::UNAUTHORIZED {
            return ensure_ok(resp, label);
        }

        let Some(refresh) = self.refresh_token() else {
            return Err(anyhow::Error::new(RemoteFailure::Unauthorized).context(label.to_string()));
        };

        tracing::info!(label, "access credential rejected; renewing");
        if let Err(err) = self.renew_access(&refresh) {
            tracing::info!(label, error = %format!("{:#}", err), "renewal failed; signing out");
            self.sign_out_locally();
            return Err(anyhow::Error::new(RemoteFailure::SignedOut).context(label.to_string()));
        }

        let resp = self.send_once(label, &build)?;
        ensure_ok(resp, label)
    }

    fn send_once(
        &self,
        label: &str,
        build: &impl Fn(&Client) -> RequestBuilder,
    ) -> Result<Response> {
        let mut req = build(&self.client);
        if let Some(token) = self.access_token() {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let resp = req
            .send()
            .map_err(|err| anyhow::Error::new(RemoteFailure::Unreachable(err.to_string())))
            .with_context(|| label.to_string())?;
        tracing::debug!(label, status = resp.status().as_u16(), "remote response");
        Ok(resp)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn access_token(&self) -> Option<String> {
        self.session.lock().ok().and_then(|s| s.access.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.session.lock().ok().and_then(|s| s.refresh.clone())
    }
}

/// Maps a non-success response onto a classified failure.
pub(super) fn ensure_ok(resp: Response, label: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let failure = if status == StatusCode::UNAUTHORIZED {
        RemoteFailure::Unauthorized
    } else {
        let body: Option<serde_json::Value> = resp.json().ok();
        let structured = body.as_ref().and_then(validation_message);
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
            RemoteFailure::Validation(structured.unwrap_or_else(|| GENERIC_FAILURE.to_string()))
        } else {
            let message = structured
                .or_else(|| {
                    body.as_ref()
                        .and_then(|v| v.get("error"))
                        .and_then(|v| v.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string()
                });
            RemoteFailure::Rejected {
                status: status.as_u16(),
                message,
            }
        }
    };
    Err(anyhow::Error::new(failure).context(format!("{} status", label)))
}
