//! Structural mutations against a gateway, shared by the explorer and the CLI.
//!
//! None of these touch a [`TreeModel`]; callers refetch afterwards.

use anyhow::{Context, Result, bail};

use crate::gateway::WorkspaceGateway;
use crate::model::{FolderId, NodeKind, NodeRef, ProjectId};
use crate::remote::{FileUpdate, FolderUpdate};
use crate::tree::{TreeError, TreeModel, check_destination};

/// Trims a user-entered name, rejecting blank input.
pub fn clean_name(raw: &str) -> Result<&str> {
    let name = raw.trim();
    if name.is_empty() {
        bail!("name required");
    }
    Ok(name)
}

pub fn create_node(
    gateway: &impl WorkspaceGateway,
    project: ProjectId,
    model: &TreeModel,
    kind: NodeKind,
    parent: FolderId,
    name: &str,
) -> Result<NodeRef> {
    let name = clean_name(name)?;
    if model.folder(parent).is_none() {
        return Err(TreeError::UnknownFolder(parent).into());
    }
    if kind == NodeKind::Folder {
        model.check_nesting(parent, 0)?;
    }
    let created = match kind {
        NodeKind::Folder => gateway
            .create_folder(project, name, parent)
            .map(|f| NodeRef::Folder(f.id))
            .context("create folder")?,
        NodeKind::File => gateway
            .create_file(project, name, parent)
            .map(|f| NodeRef::File(f.id))
            .context("create file")?,
    };
    tracing::info!(?created, parent = %parent, "created {}", kind.label());
    Ok(created)
}

pub fn rename_node(
    gateway: &impl WorkspaceGateway,
    model: &TreeModel,
    target: NodeRef,
    name: &str,
) -> Result<()> {
    let name = clean_name(name)?;
    match target {
        NodeRef::Folder(id) => {
            let parent_folder = model.parent_of(target)?;
            let update = FolderUpdate {
                name: name.to_string(),
                parent_folder,
            };
            gateway
                .update_folder(id, &update)
                .context("rename folder")?;
        }
        NodeRef::File(id) => {
            if !model.contains(target) {
                return Err(TreeError::UnknownFile(id).into());
            }
            // Full replacement: content and folder come from the authority.
            let current = gateway.fetch_file_detail(id).context("fetch file")?;
            let update = FileUpdate {
                name: name.to_string(),
                content: current.content,
                folder: current.folder,
            };
            gateway.update_file(id, &update).context("rename file")?;
        }
    }
    Ok(())
}

/// Moves `target` into `destination` after checking it against the move rules.
pub fn move_node(
    gateway: &impl WorkspaceGateway,
    model: &TreeModel,
    target: NodeRef,
    destination: FolderId,
) -> Result<()> {
    check_destination(model, target, destination)?;
    match target {
        NodeRef::Folder(id) => {
            let height = model.height_below(id).ok_or(TreeError::UnknownFolder(id))?;
            model.check_nesting(destination, height)?;
            let name = model
                .name_of(target)
                .ok_or(TreeError::UnknownFolder(id))?
                .to_string();
            let update = FolderUpdate {
                name,
                parent_folder: Some(destination),
            };
            gateway.update_folder(id, &update).context("move folder")?;
        }
        NodeRef::File(id) => {
            let current = gateway.fetch_file_detail(id).context("fetch file")?;
            let update = FileUpdate {
                name: current.name,
                content: current.content,
                folder: destination,
            };
            gateway.update_file(id, &update).context("move file")?;
        }
    }
    Ok(())
}

pub fn delete_node(gateway: &impl WorkspaceGateway, target: NodeRef) -> Result<()> {
    match target {
        NodeRef::Folder(id) => gateway.delete_folder(id).context("delete folder"),
        NodeRef::File(id) => gateway.delete_file(id).context("delete file"),
    }
}
