//! Client-side view of a project's folder hierarchy.
//!
//! A [`TreeModel`] is built from one authoritative snapshot and never patched;
//! every mutation is followed by a fresh fetch and a new model.

use std::collections::HashMap;
use std::fmt;

use crate::model::{FileId, FileSummary, Folder, FolderId, MAX_FOLDER_DEPTH, NodeRef};

mod expand;
mod move_rules;
mod walk;

pub use self::expand::ExpandState;
pub use self::move_rules::{
    DisabledReason, check_destination, disabled_destinations, legal_destinations,
};
pub use self::walk::{PickerRow, RowKind, TreeRow, picker_rows, visible_rows};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    DuplicateFolder(FolderId),
    DuplicateFile(FileId),
    FolderParentMismatch {
        folder: FolderId,
        listed_under: FolderId,
        claims: Option<FolderId>,
    },
    FileParentMismatch {
        file: FileId,
        listed_under: FolderId,
        claims: FolderId,
    },
    UnknownFolder(FolderId),
    UnknownFile(FileId),
    IllegalDestination {
        destination: FolderId,
        reason: DisabledReason,
    },
    /// The new or moved folder would sit deeper than [`MAX_FOLDER_DEPTH`].
    TooDeep(FolderId),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::DuplicateFolder(id) => write!(f, "folder {} appears twice in the tree", id),
            TreeError::DuplicateFile(id) => write!(f, "file {} appears twice in the tree", id),
            TreeError::FolderParentMismatch {
                folder,
                listed_under,
                claims,
            } => match claims {
                Some(p) => write!(
                    f,
                    "folder {} is listed under {} but names {} as its parent",
                    folder, listed_under, p
                ),
                None => write!(
                    f,
                    "folder {} is listed under {} but has no parent",
                    folder, listed_under
                ),
            },
            TreeError::FileParentMismatch {
                file,
                listed_under,
                claims,
            } => write!(
                f,
                "file {} is listed under {} but names {} as its folder",
                file, listed_under, claims
            ),
            TreeError::UnknownFolder(id) => write!(f, "folder {} is not in the tree", id),
            TreeError::UnknownFile(id) => write!(f, "file {} is not in the tree", id),
            TreeError::IllegalDestination {
                destination,
                reason,
            } => write!(
                f,
                "cannot move to folder {}: {}",
                destination,
                reason.describe()
            ),
            TreeError::TooDeep(id) => write!(
                f,
                "cannot nest under folder {}: folders may sit at most {} levels deep",
                id, MAX_FOLDER_DEPTH
            ),
        }
    }
}

impl std::error::Error for TreeError {}

#[derive(Debug, Clone)]
struct FolderSlot {
    parent: Option<FolderId>,
    // Subfolder indices from the root down to this folder.
    path: Vec<usize>,
}

#[derive(Debug, Clone)]
struct FileSlot {
    folder: FolderId,
    index: usize,
}

/// An indexed, read-only snapshot of the folder tree.
#[derive(Debug, Clone)]
pub struct TreeModel {
    root: Folder,
    folders: HashMap<FolderId, FolderSlot>,
    files: HashMap<FileId, FileSlot>,
}

impl TreeModel {
    /// Indexes `root`, rejecting snapshots that are not a well-formed tree.
    pub fn from_root(root: Folder) -> Result<Self, TreeError> {
        let mut folders = HashMap::new();
        let mut files = HashMap::new();

        let mut stack: Vec<(&Folder, Option<FolderId>, Vec<usize>)> = vec![(&root, None, Vec::new())];
        while let Some((folder, parent, path)) = stack.pop() {
            if let Some(parent) = parent
                && folder.parent_folder.is_some_and(|p| p != parent)
            {
                return Err(TreeError::FolderParentMismatch {
                    folder: folder.id,
                    listed_under: parent,
                    claims: folder.parent_folder,
                });
            }
            if folders
                .insert(
                    folder.id,
                    FolderSlot {
                        parent,
                        path: path.clone(),
                    },
                )
                .is_some()
            {
                return Err(TreeError::DuplicateFolder(folder.id));
            }

            for (index, file) in folder.files.iter().enumerate() {
                if file.folder != folder.id {
                    return Err(TreeError::FileParentMismatch {
                        file: file.id,
                        listed_under: folder.id,
                        claims: file.folder,
                    });
                }
                let slot = FileSlot {
                    folder: folder.id,
                    index,
                };
                if files.insert(file.id, slot).is_some() {
                    return Err(TreeError::DuplicateFile(file.id));
                }
            }

            for (i, sub) in folder.subfolders.iter().enumerate() {
                let mut sub_path = path.clone();
                sub_path.push(i);
                stack.push((sub, Some(folder.id), sub_path));
            }
        }

        Ok(Self {
            root,
            folders,
            files,
        })
    }

    pub fn root(&self) -> &Folder {
        &self.root
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn contains(&self, node: NodeRef) -> bool {
        match node {
            NodeRef::Folder(id) => self.folders.contains_key(&id),
            NodeRef::File(id) => self.files.contains_key(&id),
        }
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        let slot = self.folders.get(&id)?;
        let mut cur = &self.root;
        for &i in &slot.path {
            cur = cur.subfolders.get(i)?;
        }
        Some(cur)
    }

    pub fn file(&self, id: FileId) -> Option<&FileSummary> {
        let slot = self.files.get(&id)?;
        self.folder(slot.folder)?.files.get(slot.index)
    }

    /// The folder a node currently sits in; `None` for the root.
    pub fn parent_of(&self, node: NodeRef) -> Result<Option<FolderId>, TreeError> {
        match node {
            NodeRef::Folder(id) => self
                .folders
                .get(&id)
                .map(|s| s.parent)
                .ok_or(TreeError::UnknownFolder(id)),
            NodeRef::File(id) => self
                .files
                .get(&id)
                .map(|s| Some(s.folder))
                .ok_or(TreeError::UnknownFile(id)),
        }
    }

    /// Levels between the root and `id`; the root is at depth 0.
    pub fn depth_of(&self, id: FolderId) -> Option<usize> {
        self.folders.get(&id).map(|s| s.path.len())
    }

    /// Levels of subfolders nested under `id`; 0 for a folder with none.
    pub fn height_below(&self, id: FolderId) -> Option<usize> {
        let base = &self.folders.get(&id)?.path;
        Some(
            self.folders
                .values()
                .filter(|s| s.path.starts_with(base))
                .map(|s| s.path.len() - base.len())
                .max()
                .unwrap_or(0),
        )
    }

    /// Rejects placing a folder `height` levels tall directly inside `parent`
    /// when that would cross [`MAX_FOLDER_DEPTH`].
    pub fn check_nesting(&self, parent: FolderId, height: usize) -> Result<(), TreeError> {
        let depth = self
            .depth_of(parent)
            .ok_or(TreeError::UnknownFolder(parent))?;
        if depth + 1 + height > MAX_FOLDER_DEPTH {
            return Err(TreeError::TooDeep(parent));
        }
        Ok(())
    }

    pub fn name_of(&self, node: NodeRef) -> Option<&str> {
        match node {
            NodeRef::Folder(id) => self.folder(id).map(|f| f.name.as_str()),
            NodeRef::File(id) => self.file(id).map(|f| f.name.as_str()),
        }
    }

    /// True when `node` is `folder` itself or sits anywhere beneath it.
    pub fn is_within(&self, node: NodeRef, folder: FolderId) -> bool {
        let mut cur = match node {
            NodeRef::Folder(id) => Some(id),
            NodeRef::File(id) => self.files.get(&id).map(|s| s.folder),
        };
        while let Some(id) = cur {
            if id == folder {
                return true;
            }
            cur = self.folders.get(&id).and_then(|s| s.parent);
        }
        false
    }

    /// `root/src/lib` style path for a folder, using display names.
    pub fn folder_path(&self, id: FolderId) -> Option<String> {
        let slot = self.folders.get(&id)?;
        let mut parts = vec![self.root.display_name().to_string()];
        let mut cur = &self.root;
        for &i in &slot.path {
            cur = cur.subfolders.get(i)?;
            parts.push(cur.name.clone());
        }
        Some(parts.join("/"))
    }
}

#[cfg(test)]
#[path = "tests/tree/fixtures.rs"]
pub(crate) mod fixtures;

#[cfg(test)]
#[path = "tests/tree/model_tests.rs"]
mod tests;
