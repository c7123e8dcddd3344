use super::*;

const ROOT_NAME: &str = ".";

#[derive(Clone, Debug)]
struct FolderRec {
    project: ProjectId,
    name: String,
    parent: Option<FolderId>,
}

#[derive(Clone, Debug)]
struct FileRec {
    project: ProjectId,
    name: String,
    folder: FolderId,
    content: String,
    draft: Option<String>,
    updated_at: String,
}

/// Every project's folders and files. Ids are shared across both kinds and
/// handed out in creation order, which is also listing order.
#[derive(Default)]
pub(super) struct Workspace {
    next_id: u64,
    roots: HashMap<ProjectId, FolderId>,
    folders: BTreeMap<FolderId, FolderRec>,
    files: BTreeMap<FileId, FileRec>,
}

fn blank_name() -> ApiError {
    ApiError::Field("name", "This field may not be blank.".to_string())
}

fn too_deep() -> ApiError {
    ApiError::Field(
        "parent_folder",
        format!(
            "Folders cannot be nested more than {} levels deep.",
            MAX_FOLDER_DEPTH
        ),
    )
}

impl Workspace {
    fn alloc(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// The project's root folder, created on first access.
    pub(super) fn root_of(&mut self, project: ProjectId) -> FolderId {
        if let Some(root) = self.roots.get(&project) {
            return *root;
        }
        let id = FolderId(self.alloc());
        self.folders.insert(
            id,
            FolderRec {
                project,
                name: ROOT_NAME.to_string(),
                parent: None,
            },
        );
        self.roots.insert(project, id);
        tracing::debug!(%project, root = %id, "created project root");
        id
    }

    pub(super) fn tree(&mut self, project: ProjectId) -> Folder {
        let root = self.root_of(project);
        self.build_folder(root)
    }

    fn build_folder(&self, id: FolderId) -> Folder {
        let (name, parent) = match self.folders.get(&id) {
            Some(rec) => (rec.name.clone(), rec.parent),
            None => (String::new(), None),
        };
        Folder {
            id,
            name,
            parent_folder: parent,
            subfolders: self
                .folders
                .iter()
                .filter(|(_, f)| f.parent == Some(id))
                .map(|(&sub, _)| self.build_folder(sub))
                .collect(),
            files: self
                .files
                .iter()
                .filter(|(_, f)| f.folder == id)
                .map(|(&fid, f)| FileSummary {
                    id: fid,
                    name: f.name.clone(),
                    folder: id,
                    has_draft: f.draft.is_some(),
                    updated_at: Some(f.updated_at.clone()),
                })
                .collect(),
        }
    }

    /// Levels between the project root and `id`.
    fn depth_of(&self, id: FolderId) -> usize {
        let mut depth = 0;
        let mut cur = self.folders.get(&id).and_then(|f| f.parent);
        while let Some(step) = cur {
            depth += 1;
            cur = self.folders.get(&step).and_then(|f| f.parent);
        }
        depth
    }

    /// Levels of subfolders nested under `id`.
    fn height_below(&self, id: FolderId) -> usize {
        let mut height = 0;
        let mut level = vec![id];
        loop {
            let next: Vec<FolderId> = self
                .folders
                .iter()
                .filter(|(_, f)| f.parent.is_some_and(|p| level.contains(&p)))
                .map(|(&sub, _)| sub)
                .collect();
            if next.is_empty() {
                return height;
            }
            height += 1;
            level = next;
        }
    }

    /// `src/lib/mod.rs` style path below the root.
    fn file_path(&self, folder: FolderId, name: &str) -> String {
        let mut parts = vec![name.to_string()];
        let mut cur = self.folders.get(&folder);
        while let Some(rec) = cur {
            if rec.parent.is_none() {
                break;
            }
            parts.push(rec.name.clone());
            cur = rec.parent.and_then(|p| self.folders.get(&p));
        }
        parts.reverse();
        parts.join("/")
    }

    pub(super) fn file_detail(&self, id: FileId) -> Result<FileDetail, ApiError> {
        let rec = self.files.get(&id).ok_or(ApiError::NotFound)?;
        Ok(FileDetail {
            id,
            name: rec.name.clone(),
            folder: rec.folder,
            content: rec.content.clone(),
            draft_content: rec.draft.clone(),
            has_draft: rec.draft.is_some(),
            file_path: Some(self.file_path(rec.folder, &rec.name)),
            updated_at: Some(rec.updated_at.clone()),
        })
    }

    /// Name rules shared by folders and files: non-blank, no `/`, unique
    /// among everything directly inside `parent`.
    fn check_name(
        &self,
        project: ProjectId,
        name: &str,
        parent: FolderId,
        skip: Option<u64>,
    ) -> Result<(), ApiError> {
        if name.trim().is_empty() {
            return Err(blank_name());
        }
        if name.contains('/') {
            return Err(ApiError::Field(
                "name",
                "Names may not contain '/'.".to_string(),
            ));
        }
        match self.folders.get(&parent) {
            Some(rec) if rec.project == project => {}
            _ => {
                return Err(ApiError::Field(
                    "parent_folder",
                    "Invalid folder.".to_string(),
                ));
            }
        }
        let folder_clash = self
            .folders
            .iter()
            .any(|(&id, f)| Some(id.get()) != skip && f.parent == Some(parent) && f.name == name);
        let file_clash = self
            .files
            .iter()
            .any(|(&id, f)| Some(id.get()) != skip && f.folder == parent && f.name == name);
        if folder_clash || file_clash {
            return Err(ApiError::NonField(
                "An item with this name already exists in this folder.".to_string(),
            ));
        }
        Ok(())
    }

    pub(super) fn create_folder(
        &mut self,
        project: ProjectId,
        name: &str,
        parent: Option<FolderId>,
    ) -> Result<Folder, ApiError> {
        let root = self.root_of(project);
        let parent = parent.unwrap_or(root);
        self.check_name(project, name, parent, None)?;
        if self.depth_of(parent) + 1 > MAX_FOLDER_DEPTH {
            return Err(too_deep());
        }
        let id = FolderId(self.alloc());
        self.folders.insert(
            id,
            FolderRec {
                project,
                name: name.to_string(),
                parent: Some(parent),
            },
        );
        Ok(self.build_folder(id))
    }

    pub(super) fn update_folder(
        &mut self,
        id: FolderId,
        name: &str,
        parent: Option<FolderId>,
    ) -> Result<Folder, ApiError> {
        let rec = self.folders.get(&id).ok_or(ApiError::NotFound)?;
        let project = rec.project;
        let is_root = rec.parent.is_none();

        match (is_root, parent) {
            (true, Some(_)) => {
                return Err(ApiError::NonField(
                    "The project root cannot be moved.".to_string(),
                ));
            }
            (true, None) => {
                if name.trim().is_empty() {
                    return Err(blank_name());
                }
            }
            (false, None) => {
                return Err(ApiError::Field(
                    "parent_folder",
                    "This field may not be null.".to_string(),
                ));
            }
            (false, Some(parent)) => {
                self.check_name(project, name, parent, Some(id.get()))?;
                let mut cur = Some(parent);
                while let Some(step) = cur {
                    if step == id {
                        return Err(ApiError::NonField(
                            "A folder cannot be moved into itself or one of its subfolders."
                                .to_string(),
                        ));
                    }
                    cur = self.folders.get(&step).and_then(|f| f.parent);
                }
                if self.depth_of(parent) + 1 + self.height_below(id) > MAX_FOLDER_DEPTH {
                    return Err(too_deep());
                }
            }
        }

        if let Some(rec) = self.folders.get_mut(&id) {
            rec.name = name.to_string();
            rec.parent = parent;
        }
        Ok(self.build_folder(id))
    }

    /// Removes the folder, its subfolders and every file inside them.
    pub(super) fn delete_folder(&mut self, id: FolderId) -> Result<(), ApiError> {
        let rec = self.folders.get(&id).ok_or(ApiError::NotFound)?;
        if rec.parent.is_none() {
            return Err(ApiError::NonField(
                "The project root cannot be deleted.".to_string(),
            ));
        }
        let mut doomed = vec![id];
        let mut i = 0;
        while i < doomed.len() {
            let cur = doomed[i];
            doomed.extend(
                self.folders
                    .iter()
                    .filter(|(_, f)| f.parent == Some(cur))
                    .map(|(&sub, _)| sub),
            );
            i += 1;
        }
        self.files.retain(|_, f| !doomed.contains(&f.folder));
        self.folders.retain(|fid, _| !doomed.contains(fid));
        tracing::debug!(folder = %id, removed = doomed.len(), "deleted folder");
        Ok(())
    }

    pub(super) fn create_file(
        &mut self,
        project: ProjectId,
        name: &str,
        folder: FolderId,
        content: &str,
    ) -> Result<FileDetail, ApiError> {
        self.root_of(project);
        self.check_name(project, name, folder, None)?;
        let id = FileId(self.alloc());
        self.files.insert(
            id,
            FileRec {
                project,
                name: name.to_string(),
                folder,
                content: content.to_string(),
                draft: None,
                updated_at: now_ts(),
            },
        );
        self.file_detail(id)
    }

    pub(super) fn update_file(
        &mut self,
        id: FileId,
        name: &str,
        content: &str,
        folder: FolderId,
    ) -> Result<FileDetail, ApiError> {
        let project = self.files.get(&id).ok_or(ApiError::NotFound)?.project;
        self.check_name(project, name, folder, Some(id.get()))?;
        if let Some(rec) = self.files.get_mut(&id) {
            rec.name = name.to_string();
            rec.content = content.to_string();
            rec.folder = folder;
            rec.updated_at = now_ts();
        }
        self.file_detail(id)
    }

    pub(super) fn patch_content(&mut self, id: FileId, content: &str) -> Result<FileDetail, ApiError> {
        let rec = self.files.get_mut(&id).ok_or(ApiError::NotFound)?;
        rec.content = content.to_string();
        rec.updated_at = now_ts();
        self.file_detail(id)
    }

    /// Promotes the draft to the file's content.
    pub(super) fn apply_draft(&mut self, id: FileId) -> Result<FileDetail, ApiError> {
        let rec = self.files.get_mut(&id).ok_or(ApiError::NotFound)?;
        let Some(draft) = rec.draft.take() else {
            return Err(ApiError::NonField("This file has no draft.".to_string()));
        };
        rec.content = draft;
        rec.updated_at = now_ts();
        self.file_detail(id)
    }

    /// Stages `content` as the file's draft.
    pub(super) fn stage_draft(&mut self, id: FileId, content: &str) -> Result<FileDetail, ApiError> {
        let rec = self.files.get_mut(&id).ok_or(ApiError::NotFound)?;
        rec.draft = Some(content.to_string());
        self.file_detail(id)
    }

    pub(super) fn delete_file(&mut self, id: FileId) -> Result<(), ApiError> {
        self.files
            .remove(&id)
            .map(|_| ())
            .ok_or(ApiError::NotFound)
    }
}

#[cfg(test)]
#[path = "../../tests/bin/frontfiles_server/workspace_store_tests.rs"]
mod tests;
