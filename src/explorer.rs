//! Workspace explorer: selection, context actions, the draft overlay and the
//! view that ties them to a [`WorkspaceGateway`](crate::gateway::WorkspaceGateway).

mod actions;
mod detail;
pub mod ops;
mod selection;
mod view;

pub use self::actions::{ActionKind, ActionRouter, ContextMenu, PendingAction, RouterState};
pub use self::detail::{DetailError, FileDetailPanel, ViewMode};
pub use self::selection::Selection;
pub use self::view::{ExplorerView, Notice};

#[cfg(test)]
#[path = "tests/explorer/memory_gateway.rs"]
pub(crate) mod memory_gateway;
