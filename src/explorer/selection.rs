use crate::model::{FileId, NodeRef};
use crate::tree::TreeModel;

/// The single selected file, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    file: Option<FileId>,
}

impl Selection {
    pub fn get(&self) -> Option<FileId> {
        self.file
    }

    pub fn select(&mut self, file: FileId) {
        self.file = Some(file);
    }

    pub fn clear(&mut self) {
        self.file = None;
    }

    /// Clears the selection when it sits at or under `removed`.
    ///
    /// `model` must be the snapshot the removal was decided against.
    pub fn clear_if_within(&mut self, model: &TreeModel, removed: NodeRef) -> bool {
        let Some(file) = self.file else {
            return false;
        };
        let hit = match removed {
            NodeRef::File(id) => id == file,
            NodeRef::Folder(id) => model.is_within(NodeRef::File(file), id),
        };
        if hit {
            self.file = None;
        }
        hit
    }

    /// Drops a selection that no longer exists in `model`.
    pub fn reconcile(&mut self, model: &TreeModel) -> bool {
        match self.file {
            Some(file) if !model.contains(NodeRef::File(file)) => {
                self.file = None;
                true
            }
            _ => false,
        }
    }
}
