use anyhow::{Context, Result};

use crate::model::{FileDetail, FileId, FolderId, NEW_FILE_PLACEHOLDER, ProjectId};

use super::{CreateFileRequest, FileUpdate, PatchContentRequest, RemoteClient};

impl RemoteClient {
    pub fn fetch_file_detail(&self, file: FileId) -> Result<FileDetail> {
        let url = self.url(&format!("/frontfiles/projectfile/{}/", file));
        let detail: FileDetail = self
            .send_authed("fetch file", |c| c.get(&url))?
            .json()
            .context("parse file detail")?;
        Ok(detail)
    }

    pub fn create_file(
        &self,
        project: ProjectId,
        name: &str,
        parent: FolderId,
    ) -> Result<FileDetail> {
        let url = self.url("/frontfiles/projectfile/create/");
        let body = CreateFileRequest {
            name,
            content: NEW_FILE_PLACEHOLDER,
            project_under: project,
            folder: parent,
        };
        let detail: FileDetail = self
            .send_authed("create file", |c| c.post(&url).json(&body))?
            .json()
            .context("parse created file")?;
        Ok(detail)
    }

    pub fn update_file(&self, file: FileId, update: &FileUpdate) -> Result<FileDetail> {
        let url = self.url(&format!("/frontfiles/projectfile/{}/", file));
        let detail: FileDetail = self
            .send_authed("update file", |c| c.put(&url).json(update))?
            .json()
            .context("parse updated file")?;
        Ok(detail)
    }

    pub fn patch_file_content(&self, file: FileId, content: &str) -> Result<FileDetail> {
        let url = self.url(&format!("/frontfiles/projectfile/{}/", file));
        let body = PatchContentRequest { content };
        let detail: FileDetail = self
            .send_authed("save content", |c| c.patch(&url).json(&body))?
            .json()
            .context("parse saved file")?;
        Ok(detail)
    }

    pub fn apply_draft(&self, file: FileId) -> Result<FileDetail> {
        let url = self.url(&format!("/frontfiles/projectfile/{}/draft", file));
        let detail: FileDetail = self
            .send_authed("apply draft", |c| c.post(&url))?
            .json()
            .context("parse applied draft")?;
        Ok(detail)
    }

    pub fn delete_file(&self, file: FileId) -> Result<()> {
        let url = self.url(&format!("/frontfiles/projectfile/{}/", file));
        self.send_authed("delete file", |c| c.delete(&url))?;
        Ok(())
    }
}
