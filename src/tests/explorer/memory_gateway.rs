use std::cell::RefCell;
use std::collections::BTreeMap;

use anyhow::Result;

use crate::gateway::WorkspaceGateway;
use crate::model::{
    FileDetail, FileId, FileSummary, Folder, FolderId, NEW_FILE_PLACEHOLDER, ProjectId,
};
use crate::remote::{FileUpdate, FolderUpdate, RemoteFailure};

#[derive(Debug, Clone)]
struct FolderRec {
    name: String,
    parent: Option<FolderId>,
}

#[derive(Debug, Clone)]
struct FileRec {
    name: String,
    folder: FolderId,
    content: String,
    draft: Option<String>,
}

#[derive(Default)]
struct State {
    folders: BTreeMap<FolderId, FolderRec>,
    files: BTreeMap<FileId, FileRec>,
    next_id: u64,
    fail_next: Option<RemoteFailure>,
    calls: Vec<String>,
}

/// In-memory authority with the same validation as the dev server.
pub(crate) struct MemoryGateway {
    root: FolderId,
    state: RefCell<State>,
}

impl MemoryGateway {
    /// Seeds from a snapshot; file bodies are `// <name>`, drafts `// draft of <name>`.
    pub(crate) fn from_tree(root: &Folder) -> Self {
        let mut state = State {
            next_id: 100,
            ..State::default()
        };
        let mut stack = vec![root];
        while let Some(folder) = stack.pop() {
            state.folders.insert(
                folder.id,
                FolderRec {
                    name: folder.name.clone(),
                    parent: folder.parent_folder,
                },
            );
            for file in &folder.files {
                state.files.insert(
                    file.id,
                    FileRec {
                        name: file.name.clone(),
                        folder: folder.id,
                        content: format!("// {}", file.name),
                        draft: file.has_draft.then(|| format!("// draft of {}", file.name)),
                    },
                );
            }
            stack.extend(folder.subfolders.iter());
        }
        Self {
            root: root.id,
            state: RefCell::new(state),
        }
    }

    pub(crate) fn fail_next(&self, failure: RemoteFailure) {
        self.state.borrow_mut().fail_next = Some(failure);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    /// Calls other than reads.
    pub(crate) fn writes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("fetch"))
            .collect()
    }

    pub(crate) fn content_of(&self, file: FileId) -> Option<(String, FolderId, String)> {
        let st = self.state.borrow();
        st.files
            .get(&file)
            .map(|f| (f.name.clone(), f.folder, f.content.clone()))
    }

    fn begin(&self, call: String) -> Result<()> {
        let mut st = self.state.borrow_mut();
        st.calls.push(call);
        match st.fail_next.take() {
            Some(failure) => Err(failure.into()),
            None => Ok(()),
        }
    }

    fn build(st: &State, id: FolderId) -> Folder {
        let rec = &st.folders[&id];
        Folder {
            id,
            name: rec.name.clone(),
            parent_folder: rec.parent,
            subfolders: st
                .folders
                .iter()
                .filter(|(_, f)| f.parent == Some(id))
                .map(|(&sub, _)| Self::build(st, sub))
                .collect(),
            files: st
                .files
                .iter()
                .filter(|(_, f)| f.folder == id)
                .map(|(&fid, f)| FileSummary {
                    id: fid,
                    name: f.name.clone(),
                    folder: id,
                    has_draft: f.draft.is_some(),
                    updated_at: None,
                })
                .collect(),
        }
    }

    fn detail(st: &State, id: FileId) -> Result<FileDetail> {
        let f = st.files.get(&id).ok_or_else(not_found)?;
        Ok(FileDetail {
            id,
            name: f.name.clone(),
            folder: f.folder,
            content: f.content.clone(),
            draft_content: f.draft.clone(),
            has_draft: f.draft.is_some(),
            file_path: None,
            updated_at: None,
        })
    }

    fn check_name(
        st: &State,
        name: &str,
        parent: FolderId,
        skip_folder: Option<FolderId>,
        skip_file: Option<FileId>,
    ) -> Result<()> {
        if name.trim().is_empty() || name.contains('/') {
            return Err(invalid("name: This field may not be blank."));
        }
        if !st.folders.contains_key(&parent) {
            return Err(invalid("parent_folder: Invalid folder."));
        }
        let folder_clash = st
            .folders
            .iter()
            .any(|(&id, f)| Some(id) != skip_folder && f.parent == Some(parent) && f.name == name);
        let file_clash = st
            .files
            .iter()
            .any(|(&id, f)| Some(id) != skip_file && f.folder == parent && f.name == name);
        if folder_clash || file_clash {
            return Err(invalid("An item with this name already exists in this folder."));
        }
        Ok(())
    }

    fn alloc(st: &mut State) -> u64 {
        st.next_id += 1;
        st.next_id
    }
}

fn invalid(msg: &str) -> anyhow::Error {
    RemoteFailure::Validation(msg.to_string()).into()
}

fn not_found() -> anyhow::Error {
    RemoteFailure::Rejected {
        status: 404,
        message: "Not found.".to_string(),
    }
    .into()
}

impl WorkspaceGateway for MemoryGateway {
    fn fetch_tree(&self, project: ProjectId) -> Result<Folder> {
        self.begin(format!("fetch_tree {}", project))?;
        Ok(Self::build(&self.state.borrow(), self.root))
    }

    fn create_folder(&self, _project: ProjectId, name: &str, parent: FolderId) -> Result<Folder> {
        self.begin(format!("create_folder {} {}", parent, name))?;
        let mut st = self.state.borrow_mut();
        Self::check_name(&st, name, parent, None, None)?;
        let id = FolderId(Self::alloc(&mut st));
        st.folders.insert(
            id,
            FolderRec {
                name: name.to_string(),
                parent: Some(parent),
            },
        );
        Ok(Self::build(&st, id))
    }

    fn create_file(&self, _project: ProjectId, name: &str, parent: FolderId) -> Result<FileDetail> {
        self.begin(format!("create_file {} {}", parent, name))?;
        let mut st = self.state.borrow_mut();
        Self::check_name(&st, name, parent, None, None)?;
        let id = FileId(Self::alloc(&mut st));
        st.files.insert(
            id,
            FileRec {
                name: name.to_string(),
                folder: parent,
                content: NEW_FILE_PLACEHOLDER.to_string(),
                draft: None,
            },
        );
        Self::detail(&st, id)
    }

    fn update_folder(&self, folder: FolderId, update: &FolderUpdate) -> Result<Folder> {
        self.begin(format!("update_folder {}", folder))?;
        let mut st = self.state.borrow_mut();
        if !st.folders.contains_key(&folder) {
            return Err(not_found());
        }
        match update.parent_folder {
            None if folder != self.root => {
                return Err(invalid("parent_folder: This field may not be null."));
            }
            Some(_) if folder == self.root => {
                return Err(invalid("The project root cannot be moved."));
            }
            Some(parent) => {
                Self::check_name(&st, &update.name, parent, Some(folder), None)?;
                let mut cur = Some(parent);
                while let Some(id) = cur {
                    if id == folder {
                        return Err(invalid("A folder cannot be moved into itself."));
                    }
                    cur = st.folders.get(&id).and_then(|f| f.parent);
                }
            }
            None => {}
        }
        if let Some(rec) = st.folders.get_mut(&folder) {
            rec.name = update.name.clone();
            rec.parent = update.parent_folder;
        }
        Ok(Self::build(&st, folder))
    }

    fn update_file(&self, file: FileId, update: &FileUpdate) -> Result<FileDetail> {
        self.begin(format!("update_file {}", file))?;
        let mut st = self.state.borrow_mut();
        if !st.files.contains_key(&file) {
            return Err(not_found());
        }
        Self::check_name(&st, &update.name, update.folder, None, Some(file))?;
        if let Some(rec) = st.files.get_mut(&file) {
            rec.name = update.name.clone();
            rec.content = update.content.clone();
            rec.folder = update.folder;
        }
        Self::detail(&st, file)
    }

    fn delete_folder(&self, folder: FolderId) -> Result<()> {
        self.begin(format!("delete_folder {}", folder))?;
        let mut st = self.state.borrow_mut();
        if folder == self.root {
            return Err(invalid("The project root cannot be deleted."));
        }
        if !st.folders.contains_key(&folder) {
            return Err(not_found());
        }
        let mut doomed = vec![folder];
        let mut i = 0;
        while i < doomed.len() {
            let cur = doomed[i];
            doomed.extend(
                st.folders
                    .iter()
                    .filter(|(_, f)| f.parent == Some(cur))
                    .map(|(&id, _)| id),
            );
            i += 1;
        }
        st.files.retain(|_, f| !doomed.contains(&f.folder));
        st.folders.retain(|id, _| !doomed.contains(id));
        Ok(())
    }

    fn delete_file(&self, file: FileId) -> Result<()> {
        self.begin(format!("delete_file {}", file))?;
        let mut st = self.state.borrow_mut();
        st.files.remove(&file).map(|_| ()).ok_or_else(not_found)
    }

    fn fetch_file_detail(&self, file: FileId) -> Result<FileDetail> {
        self.begin(format!("fetch_file_detail {}", file))?;
        Self::detail(&self.state.borrow(), file)
    }

    fn patch_file_content(&self, file: FileId, content: &str) -> Result<FileDetail> {
        self.begin(format!("patch_file_content {}", file))?;
        let mut st = self.state.borrow_mut();
        let rec = st.files.get_mut(&file).ok_or_else(not_found)?;
        rec.content = content.to_string();
        Self::detail(&st, file)
    }

    fn apply_draft(&self, file: FileId) -> Result<FileDetail> {
        self.begin(format!("apply_draft {}", file))?;
        let mut st = self.state.borrow_mut();
        let rec = st.files.get_mut(&file).ok_or_else(not_found)?;
        match rec.draft.take() {
            Some(draft) => rec.content = draft,
            None => return Err(invalid("detail: This file has no draft.")),
        }
        Self::detail(&st, file)
    }
}
