//! The seam between the explorer state machine and the remote authority.

use anyhow::Result;

use crate::model::{FileDetail, FileId, Folder, FolderId, ProjectId};
use crate::remote::{FileUpdate, FolderUpdate, RemoteClient};

/// Structural and content operations on a project workspace.
///
/// Implementations are the single source of truth; callers never patch
/// local state from the returned entities beyond what they display.
pub trait WorkspaceGateway {
    fn fetch_tree(&self, project: ProjectId) -> Result<Folder>;
    fn create_folder(&self, project: ProjectId, name: &str, parent: FolderId) -> Result<Folder>;
    fn create_file(&self, project: ProjectId, name: &str, parent: FolderId) -> Result<FileDetail>;
    fn update_folder(&self, folder: FolderId, update: &FolderUpdate) -> Result<Folder>;
    fn update_file(&self, file: FileId, update: &FileUpdate) -> Result<FileDetail>;
    fn delete_folder(&self, folder: FolderId) -> Result<()>;
    fn delete_file(&self, file: FileId) -> Result<()>;
    fn fetch_file_detail(&self, file: FileId) -> Result<FileDetail>;
    fn patch_file_content(&self, file: FileId, content: &str) -> Result<FileDetail>;
    fn apply_draft(&self, file: FileId) -> Result<FileDetail>;
}

impl WorkspaceGateway for RemoteClient {
    fn fetch_tree(&self, project: ProjectId) -> Result<Folder> {
        RemoteClient::fetch_tree(self, project)
    }

    fn create_folder(&self, project: ProjectId, name: &str, parent: FolderId) -> Result<Folder> {
        RemoteClient::create_folder(self, project, name, parent)
    }

    fn create_file(&self, project: ProjectId, name: &str, parent: FolderId) -> Result<FileDetail> {
        RemoteClient::create_file(self, project, name, parent)
    }

    fn update_folder(&self, folder: FolderId, update: &FolderUpdate) -> Result<Folder> {
        RemoteClient::update_folder(self, folder, update)
    }

    fn update_file(&self, file: FileId, update: &FileUpdate) -> Result<FileDetail> {
        RemoteClient::update_file(self, file, update)
    }

    fn delete_folder(&self, folder: FolderId) -> Result<()> {
        RemoteClient::delete_folder(self, folder)
    }

    fn delete_file(&self, file: FileId) -> Result<()> {
        RemoteClient::delete_file(self, file)
    }

    fn fetch_file_detail(&self, file: FileId) -> Result<FileDetail> {
        RemoteClient::fetch_file_detail(self, file)
    }

    fn patch_file_content(&self, file: FileId, content: &str) -> Result<FileDetail> {
        RemoteClient::patch_file_content(self, file, content)
    }

    fn apply_draft(&self, file: FileId) -> Result<FileDetail> {
        RemoteClient::apply_draft(self, file)
    }
}

impl<T: WorkspaceGateway + ?Sized> WorkspaceGateway for Box<T> {
    fn fetch_tree(&self, project: ProjectId) -> Result<Folder> {
        (**self).fetch_tree(project)
    }

    fn create_folder(&self, project: ProjectId, name: &str, parent: FolderId) -> Result<Folder> {
        (**self).create_folder(project, name, parent)
    }

    fn create_file(&self, project: ProjectId, name: &str, parent: FolderId) -> Result<FileDetail> {
        (**self).create_file(project, name, parent)
    }

    fn update_folder(&self, folder: FolderId, update: &FolderUpdate) -> Result<Folder> {
        (**self).update_folder(folder, update)
    }

    fn update_file(&self, file: FileId, update: &FileUpdate) -> Result<FileDetail> {
        (**self).update_file(file, update)
    }

    fn delete_folder(&self, folder: FolderId) -> Result<()> {
        (**self).delete_folder(folder)
    }

    fn delete_file(&self, file: FileId) -> Result<()> {
        (**self).delete_file(file)
    }

    fn fetch_file_detail(&self, file: FileId) -> Result<FileDetail> {
        (**self).fetch_file_detail(file)
    }

    fn patch_file_content(&self, file: FileId, content: &str) -> Result<FileDetail> {
        (**self).patch_file_content(file, content)
    }

    fn apply_draft(&self, file: FileId) -> Result<FileDetail> {
        (**self).apply_draft(file)
    }
}
