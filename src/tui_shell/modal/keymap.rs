use crossterm::event::{KeyCode, KeyEvent};

use crate::model::FileId;

pub(super) enum ModalAction {
    None,
    Close,
    ApplyDraft { file: FileId },
}

pub(super) fn map_modal_key(modal: &mut super::super::Modal, key: KeyEvent) -> ModalAction {
    match &modal.kind {
        super::super::ModalKind::Viewer => handle_viewer_like_key(modal, key),

        super::super::ModalKind::ConfirmApplyDraft { file } => match key.code {
            KeyCode::Esc | KeyCode::Char('n') => ModalAction::Close,
            KeyCode::Enter | KeyCode::Char('y') => ModalAction::ApplyDraft { file: *file },
            _ => ModalAction::None,
        },
    }
}

fn handle_viewer_like_key(modal: &mut super::super::Modal, key: KeyEvent) -> ModalAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
        KeyCode::Up => {
            modal.scroll = modal.scroll.saturating_sub(1);
            ModalAction::None
        }
        KeyCode::Down => {
            if modal.scroll < modal.lines.len().saturating_sub(1) {
                modal.scroll += 1;
            }
            ModalAction::None
        }
        KeyCode::PageUp => {
            modal.scroll = modal.scroll.saturating_sub(10);
            ModalAction::None
        }
        KeyCode::PageDown => {
            modal.scroll = (modal.scroll + 10).min(modal.lines.len().saturating_sub(1));
            ModalAction::None
        }
        _ => ModalAction::None,
    }
}
