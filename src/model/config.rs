use serde::{Deserialize, Serialize};

use super::ids::ProjectId;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    pub base_url: String,
    pub project_id: ProjectId,

    /// Transport timeout for every request; unset means the reqwest default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(base_url: &str, project_id: ProjectId) -> Self {
        Self {
            version: 1,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id,
            request_timeout_secs: None,
        }
    }
}

/// The two session credential strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    #[serde(default)]
    pub access: Option<String>,

    #[serde(default)]
    pub refresh: Option<String>,
}

impl SessionTokens {
    pub fn new(access: String, refresh: String) -> Self {
        Self {
            access: Some(access),
            refresh: Some(refresh),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.access.is_some()
    }
}
