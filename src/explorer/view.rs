use anyhow::{Context, Result, anyhow};

use crate::gateway::WorkspaceGateway;
use crate::model::{FileId, FolderId, NodeKind, NodeRef, ProjectId};
use crate::remote::user_message;
use crate::tree::{
    ExpandState, PickerRow, TreeModel, TreeRow, check_destination, disabled_destinations,
    picker_rows, visible_rows,
};

use super::actions::{ActionKind, ActionRouter, PendingAction, RouterState};
use super::detail::{FileDetailPanel, ViewMode};
use super::ops;
use super::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Workspace view state for one project: the current snapshot plus everything
/// the user has open on top of it.
///
/// Mutations go through the gateway and are followed by a full refetch; the
/// snapshot itself is never edited.
pub struct ExplorerView<G> {
    gateway: G,
    project: ProjectId,
    tree: Option<TreeModel>,
    expand: ExpandState,
    selection: Selection,
    router: ActionRouter,
    detail: Option<FileDetailPanel>,
    notice: Option<Notice>,
}

impl<G: WorkspaceGateway> ExplorerView<G> {
    pub fn new(gateway: G, project: ProjectId) -> Self {
        Self {
            gateway,
            project,
            tree: None,
            expand: ExpandState::default(),
            selection: Selection::default(),
            router: ActionRouter::default(),
            detail: None,
            notice: None,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn project(&self) -> ProjectId {
        self.project
    }

    pub fn tree(&self) -> Option<&TreeModel> {
        self.tree.as_ref()
    }

    pub fn selected(&self) -> Option<FileId> {
        self.selection.get()
    }

    pub fn router(&self) -> &ActionRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut ActionRouter {
        &mut self.router
    }

    pub fn state(&self) -> RouterState {
        self.router.state()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.router.pending()
    }

    pub fn detail(&self) -> Option<&FileDetailPanel> {
        self.detail.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn model(&self) -> Result<&TreeModel> {
        self.tree.as_ref().ok_or_else(|| anyhow!("tree not loaded"))
    }

    /// Refetches the tree and replaces the snapshot.
    ///
    /// On failure the previous snapshot stays on screen.
    pub fn refresh(&mut self) -> Result<()> {
        let loaded = self
            .gateway
            .fetch_tree(self.project)
            .context("fetch tree")
            .and_then(|root| TreeModel::from_root(root).context("index tree"));
        match loaded {
            Ok(model) => {
                self.install(model);
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::Error(user_message(&err)));
                Err(err)
            }
        }
    }

    fn install(&mut self, model: TreeModel) {
        self.expand.reset();
        self.selection.reconcile(&model);
        let keep_detail = match (&self.detail, self.selection.get()) {
            (Some(panel), Some(sel)) => panel.detail().id == sel,
            _ => false,
        };
        if !keep_detail {
            self.detail = None;
        }
        tracing::debug!(
            folders = model.folder_count(),
            files = model.file_count(),
            "tree rebuilt"
        );
        self.tree = Some(model);
    }

    pub fn rows(&self) -> Vec<TreeRow> {
        match &self.tree {
            Some(model) => visible_rows(model, &self.expand, self.selection.get()),
            None => Vec::new(),
        }
    }

    pub fn toggle_folder(&mut self, id: FolderId) {
        self.expand.toggle(id);
    }

    /// Selects `file` and loads its detail pane.
    pub fn select_file(&mut self, file: FileId) -> Result<()> {
        if !self.model()?.contains(NodeRef::File(file)) {
            return Err(crate::tree::TreeError::UnknownFile(file).into());
        }
        match self.gateway.fetch_file_detail(file).context("fetch file") {
            Ok(detail) => {
                self.selection.select(file);
                self.detail = Some(FileDetailPanel::open(detail));
                Ok(())
            }
            Err(err) => {
                self.selection.clear();
                self.detail = None;
                self.notice = Some(Notice::Error(user_message(&err)));
                Err(err)
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.detail = None;
    }

    /// Opens the context menu on a node of the current snapshot.
    pub fn open_context_menu(&mut self, target: NodeRef, position: (u16, u16)) -> bool {
        let Some(name) = self.tree.as_ref().and_then(|m| m.name_of(target)) else {
            return false;
        };
        let name = name.to_string();
        self.router.open_menu(target, &name, position)
    }

    pub fn close_context_menu(&mut self) {
        self.router.close_menu();
    }

    pub fn choose_action(&mut self, kind: ActionKind) -> Option<&PendingAction> {
        self.router.choose(kind)
    }

    pub fn cancel_action(&mut self) {
        self.router.cancel();
    }

    /// Destination rows for the pending move, disabled ones marked.
    pub fn move_picker_rows(&self) -> Result<Vec<PickerRow>> {
        let pending = self
            .router
            .pending()
            .filter(|p| p.kind == ActionKind::Move)
            .ok_or_else(|| anyhow!("no move in progress"))?;
        let model = self.model()?;
        let disabled = disabled_destinations(model, pending.target)?;
        Ok(picker_rows(model, &disabled))
    }

    /// Chooses a destination for the pending move; disabled folders are refused.
    pub fn pick_destination(&mut self, destination: FolderId) -> Result<()> {
        let target = match self.router.pending() {
            Some(p) if p.kind == ActionKind::Move => p.target,
            _ => return Err(anyhow!("no move in progress")),
        };
        let checked = check_destination(self.model()?, target, destination);
        let Some(pending) = self.router.pending_mut() else {
            return Ok(());
        };
        match checked {
            Ok(()) => {
                pending.destination = Some(destination);
                pending.error = None;
                Ok(())
            }
            Err(err) => {
                pending.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Submits the name entry of a pending create or rename.
    pub fn submit_name(&mut self, value: &str) -> Result<()> {
        let pending = match self.router.pending() {
            Some(p) => p.clone(),
            None => return Err(anyhow!("no action in progress")),
        };
        if let Err(err) = ops::clean_name(value) {
            self.router.fail(err.to_string());
            return Err(err);
        }

        let result = {
            let model = self.model()?;
            match (pending.kind, pending.target) {
                (ActionKind::CreateFile, NodeRef::Folder(parent)) => ops::create_node(
                    &self.gateway,
                    self.project,
                    model,
                    NodeKind::File,
                    parent,
                    value,
                )
                .map(|_| ()),
                (ActionKind::CreateFolder, NodeRef::Folder(parent)) => ops::create_node(
                    &self.gateway,
                    self.project,
                    model,
                    NodeKind::Folder,
                    parent,
                    value,
                )
                .map(|_| ()),
                (ActionKind::Rename, target) => {
                    ops::rename_node(&self.gateway, model, target, value)
                }
                (kind, _) => return Err(anyhow!("{} does not take a name", kind.label())),
            }
        };
        self.settle(&pending, result)
    }

    /// Submits the pending move to the chosen destination.
    pub fn submit_move(&mut self) -> Result<()> {
        let pending = match self.router.pending() {
            Some(p) if p.kind == ActionKind::Move => p.clone(),
            _ => return Err(anyhow!("no move in progress")),
        };
        let Some(destination) = pending.destination else {
            let err = anyhow!("choose a destination folder");
            self.router.fail(err.to_string());
            return Err(err);
        };
        let result = ops::move_node(&self.gateway, self.model()?, pending.target, destination);
        self.settle(&pending, result)
    }

    /// Confirms a pending delete. Success or failure, the prompt closes.
    pub fn confirm_delete(&mut self) -> Result<()> {
        let pending = match self.router.pending() {
            Some(p) if p.kind == ActionKind::Delete => p.clone(),
            _ => return Err(anyhow!("no delete in progress")),
        };
        self.router.finish();
        match ops::delete_node(&self.gateway, pending.target) {
            Ok(()) => {
                if let Some(model) = self.tree.as_ref()
                    && self.selection.clear_if_within(model, pending.target)
                {
                    self.detail = None;
                }
                self.notice = Some(Notice::Info(format!("deleted {}", pending.target_name)));
                self.refresh()
            }
            Err(err) => {
                self.notice = Some(Notice::Error(user_message(&err)));
                Err(err)
            }
        }
    }

    fn settle(&mut self, pending: &PendingAction, result: Result<()>) -> Result<()> {
        if let Err(err) = result {
            tracing::debug!(error = %format!("{:#}", err), "{} failed", pending.kind.label());
            self.router.fail(user_message(&err));
            return Err(err);
        }
        let touches_detail = match (&self.detail, self.tree.as_ref()) {
            (Some(panel), Some(model)) => match pending.target {
                NodeRef::File(id) => id == panel.detail().id,
                NodeRef::Folder(id) => model.is_within(NodeRef::File(panel.detail().id), id),
            },
            _ => false,
        };
        self.router.finish();
        self.notice = Some(Notice::Info(format!(
            "{}: {}",
            pending.kind.label(),
            pending.target_name
        )));
        self.refresh()?;
        if touches_detail {
            self.reload_detail()?;
        }
        Ok(())
    }

    fn reload_detail(&mut self) -> Result<()> {
        let Some(id) = self.detail.as_ref().map(|p| p.detail().id) else {
            return Ok(());
        };
        let fresh = self.gateway.fetch_file_detail(id).context("fetch file")?;
        if let Some(panel) = self.detail.as_mut() {
            panel.replace_detail(fresh);
        }
        Ok(())
    }

    fn panel_mut(&mut self) -> Result<&mut FileDetailPanel> {
        self.detail.as_mut().ok_or_else(|| anyhow!("no file selected"))
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> Result<()> {
        self.panel_mut()?.set_mode(mode)?;
        Ok(())
    }

    pub fn toggle_view_mode(&mut self) -> Result<ViewMode> {
        Ok(self.panel_mut()?.toggle_mode()?)
    }

    pub fn begin_edit(&mut self) -> Result<()> {
        self.panel_mut()?.begin_edit()?;
        Ok(())
    }

    pub fn set_edit_buffer(&mut self, text: String) -> Result<()> {
        self.panel_mut()?.set_edit_buffer(text)?;
        Ok(())
    }

    pub fn edit_buffer_mut(&mut self) -> Result<&mut String> {
        Ok(self.panel_mut()?.edit_buffer_mut()?)
    }

    pub fn cancel_edit(&mut self) -> Result<()> {
        self.panel_mut()?.cancel_edit();
        Ok(())
    }

    /// Saves the edit buffer as authoritative content.
    ///
    /// On failure the panel stays in edit mode with the buffer intact.
    pub fn save_edit(&mut self) -> Result<()> {
        let panel = self.panel_mut()?;
        let content = panel.pending_save()?;
        let id = panel.detail().id;
        match self
            .gateway
            .patch_file_content(id, &content)
            .context("save content")
        {
            Ok(saved) => {
                if let Some(panel) = self.detail.as_mut() {
                    panel.finish_save(saved);
                }
                self.notice = Some(Notice::Info("saved".to_string()));
                self.refresh()
            }
            Err(err) => {
                let msg = user_message(&err);
                if let Some(panel) = self.detail.as_mut() {
                    panel.set_error(Some(msg.clone()));
                }
                self.notice = Some(Notice::Error(msg));
                Err(err)
            }
        }
    }

    /// Promotes the selected file's draft to authoritative content.
    pub fn apply_draft(&mut self) -> Result<()> {
        let panel = self.panel_mut()?;
        if !panel.has_draft() {
            return Err(super::detail::DetailError::NoDraft.into());
        }
        let id = panel.detail().id;
        match self.gateway.apply_draft(id).context("apply draft") {
            Ok(applied) => {
                if let Some(panel) = self.detail.as_mut() {
                    panel.finish_apply(applied);
                }
                self.notice = Some(Notice::Info("draft applied".to_string()));
                self.refresh()
            }
            Err(err) => {
                let msg = user_message(&err);
                if let Some(panel) = self.detail.as_mut() {
                    panel.set_error(Some(msg.clone()));
                }
                self.notice = Some(Notice::Error(msg));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/explorer/view_tests.rs"]
mod tests;
