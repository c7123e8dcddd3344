use time::OffsetDateTime;

use super::*;

pub(super) fn hash_token(secret: &str) -> String {
    blake3::hash(secret.as_bytes()).to_hex().to_string()
}

pub(super) fn generate_token_secret() -> Result<String> {
    // 32 bytes of entropy, hex-encoded.
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    let mut out = String::with_capacity(64);
    for b in &bytes {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(out)
}

struct IssuedAccess {
    user: String,
    expires_at: OffsetDateTime,
}

/// Issued credentials, keyed by the hash of the bearer secret.
#[derive(Default)]
pub(super) struct TokenStore {
    access: HashMap<String, IssuedAccess>,
    refresh: HashMap<String, String>,
}

impl TokenStore {
    pub(super) fn issue_access(&mut self, user: &str, ttl: time::Duration) -> Result<String> {
        let secret = generate_token_secret()?;
        self.access.insert(
            hash_token(&secret),
            IssuedAccess {
                user: user.to_string(),
                expires_at: OffsetDateTime::now_utc() + ttl,
            },
        );
        Ok(secret)
    }

    /// A fresh `(access, refresh)` pair for `user`.
    pub(super) fn issue_pair(&mut self, user: &str, ttl: time::Duration) -> Result<(String, String)> {
        let access = self.issue_access(user, ttl)?;
        let refresh = generate_token_secret()?;
        self.refresh.insert(hash_token(&refresh), user.to_string());
        Ok((access, refresh))
    }

    /// The user behind a live access secret.
    pub(super) fn access_user(&self, secret: &str) -> Option<&str> {
        let issued = self.access.get(&hash_token(secret))?;
        (OffsetDateTime::now_utc() < issued.expires_at).then_some(issued.user.as_str())
    }

    pub(super) fn refresh_user(&self, secret: &str) -> Option<&str> {
        self.refresh.get(&hash_token(secret)).map(String::as_str)
    }
}

pub(super) async fn token_obtain(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TokenObtainRequest>,
) -> Response {
    if state.users.get(&req.username) != Some(&req.password) {
        return unauthorized("No active account found with the given credentials");
    }
    let pair = state
        .tokens
        .write()
        .await
        .issue_pair(&req.username, state.access_ttl);
    match pair {
        Ok((access, refresh)) => {
            tracing::info!(user = %req.username, "issued token pair");
            Json(serde_json::json!({"access": access, "refresh": refresh})).into_response()
        }
        Err(err) => internal_error(err),
    }
}

pub(super) async fn token_refresh(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TokenRefreshRequest>,
) -> Response {
    let mut tokens = state.tokens.write().await;
    let Some(user) = tokens.refresh_user(&req.refresh).map(str::to_string) else {
        return unauthorized("Token is invalid or expired");
    };
    match tokens.issue_access(&user, state.access_ttl) {
        Ok(access) => {
            tracing::info!(%user, "renewed access token");
            Json(serde_json::json!({ "access": access })).into_response()
        }
        Err(err) => internal_error(err),
    }
}

pub(super) async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized("Authentication credentials were not provided.");
    };

    let Ok(value) = value.to_str() else {
        return unauthorized("Given token not valid for any token type");
    };

    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized("Given token not valid for any token type");
    };

    let user = {
        let tokens = state.tokens.read().await;
        tokens.access_user(token).map(str::to_string)
    };
    let Some(user) = user else {
        return unauthorized("Given token not valid for any token type");
    };

    let mut req = req;
    req.extensions_mut().insert(Subject { user });
    next.run(req).await
}
