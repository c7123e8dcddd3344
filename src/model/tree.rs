use serde::{Deserialize, Serialize};

use super::ids::{FileId, FolderId};

/// Body given to files created through the explorer.
pub const NEW_FILE_PLACEHOLDER: &str = "# New File";

/// Deepest level below the root a folder may sit at. Each level adds two
/// nesting levels to the tree listing, and serde_json refuses documents nested
/// deeper than 128.
pub const MAX_FOLDER_DEPTH: usize = 50;

/// A folder as returned by the authority, with its full nested structure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,

    #[serde(default)]
    pub parent_folder: Option<FolderId>,

    #[serde(default)]
    pub subfolders: Vec<Folder>,

    #[serde(default)]
    pub files: Vec<FileSummary>,
}

impl Folder {
    pub fn is_empty(&self) -> bool {
        self.subfolders.is_empty() && self.files.is_empty()
    }

    /// Name shown for the folder; the project root is stored as `.`.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() || self.name == "." {
            "root"
        } else {
            &self.name
        }
    }
}

/// File entry as it appears inside a folder listing (no content).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub id: FileId,
    pub name: String,
    pub folder: FolderId,

    #[serde(default)]
    pub has_draft: bool,

    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Full file record, including authoritative and draft content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDetail {
    pub id: FileId,
    pub name: String,
    pub folder: FolderId,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub draft_content: Option<String>,

    #[serde(default)]
    pub has_draft: bool,

    #[serde(default)]
    pub file_path: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

impl FileDetail {
    /// Draft body, only when the authority reports one.
    ///
    /// A stale `draft_content` next to `has_draft = false` is never exposed.
    pub fn draft(&self) -> Option<&str> {
        if self.has_draft {
            self.draft_content.as_deref()
        } else {
            None
        }
    }
}
