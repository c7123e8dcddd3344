mod config;
mod ids;
mod tree;

pub use self::config::{ClientConfig, SessionTokens};
pub use self::ids::{FileId, FolderId, ProjectId};
pub use self::tree::{FileDetail, FileSummary, Folder, MAX_FOLDER_DEPTH, NEW_FILE_PLACEHOLDER};

/// A node of the workspace tree, addressed by kind and id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Folder(FolderId),
    File(FileId),
}

impl NodeRef {
    pub fn kind(self) -> NodeKind {
        match self {
            NodeRef::Folder(_) => NodeKind::Folder,
            NodeRef::File(_) => NodeKind::File,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

impl NodeKind {
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Folder => "folder",
            NodeKind::File => "file",
        }
    }
}
