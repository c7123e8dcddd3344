use crate::model::{FolderId, NodeKind, NodeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    CreateFile,
    CreateFolder,
    Rename,
    Move,
    Delete,
}

const FOLDER_MENU: &[ActionKind] = &[
    ActionKind::CreateFile,
    ActionKind::CreateFolder,
    ActionKind::Rename,
    ActionKind::Move,
    ActionKind::Delete,
];

const FILE_MENU: &[ActionKind] = &[ActionKind::Rename, ActionKind::Move, ActionKind::Delete];

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::CreateFile => "New File",
            ActionKind::CreateFolder => "New Folder",
            ActionKind::Rename => "Rename",
            ActionKind::Move => "Move to...",
            ActionKind::Delete => "Delete",
        }
    }

    /// Menu entries offered for a node kind; only folders can hold new children.
    pub fn menu_for(kind: NodeKind) -> &'static [ActionKind] {
        match kind {
            NodeKind::Folder => FOLDER_MENU,
            NodeKind::File => FILE_MENU,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    pub position: (u16, u16),
    pub target: NodeRef,
    pub target_name: String,
    pub selected: usize,
}

impl ContextMenu {
    pub fn items(&self) -> &'static [ActionKind] {
        ActionKind::menu_for(self.target.kind())
    }

    pub fn highlighted(&self) -> Option<ActionKind> {
        self.items().get(self.selected).copied()
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let max = self.items().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }
}

/// The one open input surface and what it will do on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub kind: ActionKind,
    pub target: NodeRef,
    pub target_name: String,
    /// Pre-filled value for the name entry (current name for renames).
    pub default_name: String,
    /// Destination chosen in the move picker.
    pub destination: Option<FolderId>,
    /// Last failure, shown on the surface while it stays open.
    pub error: Option<String>,
}

impl PendingAction {
    pub fn item_kind(&self) -> NodeKind {
        self.target.kind()
    }

    pub fn title(&self) -> String {
        match self.kind {
            ActionKind::CreateFile => "New File Name".to_string(),
            ActionKind::CreateFolder => "New Folder Name".to_string(),
            ActionKind::Rename => format!("Rename {}", self.target_name),
            ActionKind::Move => format!("Move '{}' to...", self.target_name),
            ActionKind::Delete => format!("Delete {}?", self.target_name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Idle,
    MenuOpen,
    ActionPending,
}

/// Context menu and pending-action slots.
#[derive(Debug, Clone, Default)]
pub struct ActionRouter {
    menu: Option<ContextMenu>,
    pending: Option<PendingAction>,
}

impl ActionRouter {
    pub fn state(&self) -> RouterState {
        if self.pending.is_some() {
            RouterState::ActionPending
        } else if self.menu.is_some() {
            RouterState::MenuOpen
        } else {
            RouterState::Idle
        }
    }

    pub fn menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    pub fn menu_mut(&mut self) -> Option<&mut ContextMenu> {
        self.menu.as_mut()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn pending_mut(&mut self) -> Option<&mut PendingAction> {
        self.pending.as_mut()
    }

    /// Opens the menu on `target`. Ignored while an action surface is open.
    pub fn open_menu(&mut self, target: NodeRef, target_name: &str, position: (u16, u16)) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.menu = Some(ContextMenu {
            position,
            target,
            target_name: target_name.to_string(),
            selected: 0,
        });
        true
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    /// Picks a menu entry. The menu always closes; entries not offered for
    /// the target kind are ignored.
    pub fn choose(&mut self, kind: ActionKind) -> Option<&PendingAction> {
        let menu = self.menu.take()?;
        if !menu.items().contains(&kind) {
            return None;
        }
        let default_name = match kind {
            ActionKind::Rename => menu.target_name.clone(),
            _ => String::new(),
        };
        self.pending = Some(PendingAction {
            kind,
            target: menu.target,
            target_name: menu.target_name,
            default_name,
            destination: None,
            error: None,
        });
        self.pending.as_ref()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub(super) fn finish(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    pub(super) fn fail(&mut self, msg: String) {
        if let Some(p) = self.pending.as_mut() {
            p.error = Some(msg);
        }
    }
}

#[cfg(test)]
#[path = "../tests/explorer/actions_tests.rs"]
mod tests;
