use anyhow::{Context, Result};

use crate::model::{Folder, FolderId, ProjectId};

use super::{CreateFolderRequest, FolderUpdate, RemoteClient};

impl RemoteClient {
    pub fn fetch_tree(&self, project: ProjectId) -> Result<Folder> {
        let url = self.url(&format!("/frontfiles/{}/folders/", project));
        let root: Folder = self
            .send_authed("fetch tree", |c| c.get(&url))?
            .json()
            .context("parse folder tree")?;
        Ok(root)
    }

    pub fn create_folder(
        &self,
        project: ProjectId,
        name: &str,
        parent: FolderId,
    ) -> Result<Folder> {
        let url = self.url(&format!("/frontfiles/{}/folders/", project));
        let body = CreateFolderRequest {
            name,
            parent_folder: parent,
        };
        let folder: Folder = self
            .send_authed("create folder", |c| c.post(&url).json(&body))?
            .json()
            .context("parse created folder")?;
        Ok(folder)
    }

    pub fn update_folder(&self, folder: FolderId, update: &FolderUpdate) -> Result<Folder> {
        let url = self.url(&format!("/frontfiles/folder/{}/", folder));
        let folder: Folder = self
            .send_authed("update folder", |c| c.put(&url).json(update))?
            .json()
            .context("parse updated folder")?;
        Ok(folder)
    }

    pub fn delete_folder(&self, folder: FolderId) -> Result<()> {
        let url = self.url(&format!("/frontfiles/folder/{}/", folder));
        self.send_authed("delete folder", |c| c.delete(&url))?;
        Ok(())
    }
}
