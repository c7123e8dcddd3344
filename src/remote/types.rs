//! Request/response payloads for the workspace REST surface.

use crate::model::{FolderId, ProjectId};

#[derive(Debug, serde::Serialize)]
pub(super) struct CreateFolderRequest<'a> {
    pub(super) name: &'a str,
    pub(super) parent_folder: FolderId,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct CreateFileRequest<'a> {
    pub(super) name: &'a str,
    pub(super) content: &'a str,
    pub(super) project_under: ProjectId,
    pub(super) folder: FolderId,
}

/// Full replacement body for `PUT /frontfiles/folder/{id}/`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FolderUpdate {
    pub name: String,
    pub parent_folder: Option<FolderId>,
}

/// Full replacement body for `PUT /frontfiles/projectfile/{id}/`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileUpdate {
    pub name: String,
    pub content: String,
    pub folder: FolderId,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct PatchContentRequest<'a> {
    pub(super) content: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct TokenRequest<'a> {
    pub(super) username: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct RefreshRequest<'a> {
    pub(super) refresh: &'a str,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct AccessToken {
    pub access: String,
}
