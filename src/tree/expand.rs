use std::collections::HashSet;

use crate::model::FolderId;

/// Per-folder expand/collapse state; folders are expanded unless collapsed.
///
/// The state belongs to one tree snapshot and is reset on every rebuild.
#[derive(Debug, Clone, Default)]
pub struct ExpandState {
    collapsed: HashSet<FolderId>,
}

impl ExpandState {
    pub fn is_expanded(&self, id: FolderId) -> bool {
        !self.collapsed.contains(&id)
    }

    pub fn toggle(&mut self, id: FolderId) {
        if !self.collapsed.remove(&id) {
            self.collapsed.insert(id);
        }
    }

    pub fn collapse(&mut self, id: FolderId) {
        self.collapsed.insert(id);
    }

    pub fn expand(&mut self, id: FolderId) {
        self.collapsed.remove(&id);
    }

    pub fn reset(&mut self) {
        self.collapsed.clear();
    }
}
