use super::*;

#[derive(Clone, Debug)]
pub(super) struct Subject {
    #[allow(dead_code)]
    pub(super) user: String,
}

pub(super) struct AppState {
    /// name -> password
    pub(super) users: HashMap<String, String>,
    pub(super) access_ttl: time::Duration,

    pub(super) tokens: RwLock<TokenStore>,
    pub(super) workspace: RwLock<Workspace>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct TokenObtainRequest {
    pub(super) username: String,
    pub(super) password: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct TokenRefreshRequest {
    pub(super) refresh: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct CreateFolderRequest {
    pub(super) name: String,
    pub(super) parent_folder: Option<FolderId>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct UpdateFolderRequest {
    pub(super) name: String,
    #[serde(default)]
    pub(super) parent_folder: Option<FolderId>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct CreateFileRequest {
    pub(super) name: String,
    #[serde(default)]
    pub(super) content: String,
    pub(super) project_under: ProjectId,
    pub(super) folder: FolderId,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct UpdateFileRequest {
    pub(super) name: String,
    pub(super) content: String,
    pub(super) folder: FolderId,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct ContentRequest {
    pub(super) content: String,
}
