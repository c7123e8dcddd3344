use crate::model::FileId;

#[derive(Debug)]
pub(in crate::tui_shell) enum ModalKind {
    Viewer,
    ConfirmApplyDraft { file: FileId },
}

/// Overlays owned by the shell itself; menus and action prompts come from
/// the explorer's router instead.
#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) kind: ModalKind,
}
