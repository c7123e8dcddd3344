use crossterm::event::KeyEvent;

use self::keymap::{ModalAction, map_modal_key};

mod draw;
mod keymap;

pub(super) use self::draw::{draw_action_overlay, draw_modal};

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };
        map_modal_key(m, key)
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::ApplyDraft { file } => {
            app.close_modal();
            let still_selected = app
                .explorer
                .as_ref()
                .and_then(|v| v.detail())
                .is_some_and(|p| p.detail().id == file);
            if still_selected {
                super::app::apply_draft(app);
            }
        }
    }
}
