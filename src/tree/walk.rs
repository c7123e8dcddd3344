use std::collections::BTreeMap;

use crate::model::{FileId, Folder, FolderId, NodeRef};

use super::{DisabledReason, ExpandState, TreeModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Folder {
        id: FolderId,
        name: String,
        expanded: bool,
    },
    File {
        id: FileId,
        name: String,
        has_draft: bool,
        selected: bool,
    },
    /// Placeholder under an expanded folder with no children.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub kind: RowKind,
}

impl TreeRow {
    pub fn node(&self) -> Option<NodeRef> {
        match &self.kind {
            RowKind::Folder { id, .. } => Some(NodeRef::Folder(*id)),
            RowKind::File { id, .. } => Some(NodeRef::File(*id)),
            RowKind::Empty => None,
        }
    }
}

/// Depth-first rows for the explorer: subfolders before files, server order
/// within each group, children hidden under collapsed folders.
pub fn visible_rows(
    model: &TreeModel,
    expand: &ExpandState,
    selected: Option<FileId>,
) -> Vec<TreeRow> {
    let mut out = Vec::new();
    push_folder(model.root(), 0, expand, selected, &mut out);
    out
}

fn push_folder(
    folder: &Folder,
    depth: usize,
    expand: &ExpandState,
    selected: Option<FileId>,
    out: &mut Vec<TreeRow>,
) {
    let expanded = expand.is_expanded(folder.id);
    out.push(TreeRow {
        depth,
        kind: RowKind::Folder {
            id: folder.id,
            name: folder.display_name().to_string(),
            expanded,
        },
    });
    if !expanded {
        return;
    }

    for sub in &folder.subfolders {
        push_folder(sub, depth + 1, expand, selected, out);
    }
    for file in &folder.files {
        out.push(TreeRow {
            depth: depth + 1,
            kind: RowKind::File {
                id: file.id,
                name: file.name.clone(),
                has_draft: file.has_draft,
                selected: selected == Some(file.id),
            },
        });
    }
    if folder.is_empty() {
        out.push(TreeRow {
            depth: depth + 1,
            kind: RowKind::Empty,
        });
    }
}

/// One folder in the move picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRow {
    pub depth: usize,
    pub id: FolderId,
    pub name: String,
    pub disabled: Option<DisabledReason>,
}

/// Every folder of the tree (ignoring expand state), marked with why it is disabled.
pub fn picker_rows(
    model: &TreeModel,
    disabled: &BTreeMap<FolderId, DisabledReason>,
) -> Vec<PickerRow> {
    let mut out = Vec::with_capacity(model.folder_count());
    push_picker(model.root(), 0, disabled, &mut out);
    out
}

fn push_picker(
    folder: &Folder,
    depth: usize,
    disabled: &BTreeMap<FolderId, DisabledReason>,
    out: &mut Vec<PickerRow>,
) {
    out.push(PickerRow {
        depth,
        id: folder.id,
        name: folder.display_name().to_string(),
        disabled: disabled.get(&folder.id).copied(),
    });
    for sub in &folder.subfolders {
        push_picker(sub, depth + 1, disabled, out);
    }
}

#[cfg(test)]
#[path = "../tests/tree/walk_tests.rs"]
mod tests;
