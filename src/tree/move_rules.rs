use std::collections::BTreeMap;

use crate::model::{Folder, FolderId, NodeRef};

use super::{TreeError, TreeModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    /// Already the node's parent; moving there changes nothing.
    CurrentParent,
    /// The folder being moved.
    SelfTarget,
    /// Inside the folder being moved; would create a cycle.
    Descendant,
}

impl DisabledReason {
    pub fn describe(self) -> &'static str {
        match self {
            DisabledReason::CurrentParent => "it is already the current folder",
            DisabledReason::SelfTarget => "a folder cannot be moved into itself",
            DisabledReason::Descendant => "a folder cannot be moved into its own subfolder",
        }
    }
}

/// Destination folders that would be no-ops or break the tree for `target`.
pub fn disabled_destinations(
    model: &TreeModel,
    target: NodeRef,
) -> Result<BTreeMap<FolderId, DisabledReason>, TreeError> {
    let mut out = BTreeMap::new();

    if let NodeRef::Folder(id) = target {
        let folder = model.folder(id).ok_or(TreeError::UnknownFolder(id))?;
        out.insert(id, DisabledReason::SelfTarget);
        collect_descendants(folder, &mut out);
    }

    if let Some(parent) = model.parent_of(target)? {
        out.insert(parent, DisabledReason::CurrentParent);
    }

    Ok(out)
}

fn collect_descendants(folder: &Folder, out: &mut BTreeMap<FolderId, DisabledReason>) {
    for sub in &folder.subfolders {
        out.insert(sub.id, DisabledReason::Descendant);
        collect_descendants(sub, out);
    }
}

/// Rejects `destination` before any request is sent.
pub fn check_destination(
    model: &TreeModel,
    target: NodeRef,
    destination: FolderId,
) -> Result<(), TreeError> {
    if model.folder(destination).is_none() {
        return Err(TreeError::UnknownFolder(destination));
    }
    let disabled = disabled_destinations(model, target)?;
    match disabled.get(&destination) {
        Some(&reason) => Err(TreeError::IllegalDestination {
            destination,
            reason,
        }),
        None => Ok(()),
    }
}

/// Every folder `target` may be moved into, in tree order.
pub fn legal_destinations(model: &TreeModel, target: NodeRef) -> Result<Vec<FolderId>, TreeError> {
    let disabled = disabled_destinations(model, target)?;
    Ok(super::walk::picker_rows(model, &disabled)
        .into_iter()
        .filter(|row| row.disabled.is_none())
        .map(|row| row.id)
        .collect())
}

#[cfg(test)]
#[path = "../tests/tree/move_rules_tests.rs"]
mod tests;
