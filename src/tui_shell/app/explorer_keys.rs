use crate::explorer::{ActionKind, ViewMode};
use crate::tree::RowKind;

use super::*;

pub(super) fn browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Char('?') => open_help(app),
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor += 1;
            app.clamp_cursor();
        }
        KeyCode::Enter => {
            let idx = app.cursor;
            activate_row(app, idx);
        }
        KeyCode::Left | KeyCode::Right => {
            let Some(view) = app.explorer.as_mut() else {
                return;
            };
            if let Some(RowKind::Folder { id, expanded, .. }) =
                view.rows().get(app.cursor).map(|r| r.kind.clone())
                && expanded == (key.code == KeyCode::Left)
            {
                view.toggle_folder(id);
            }
        }
        KeyCode::Char('m') | KeyCode::Char(' ') => {
            let (idx, pos) = (app.cursor, cursor_position(app));
            open_menu_at(app, idx, pos);
        }
        KeyCode::Char('r') => {
            if let Some(view) = app.explorer.as_mut()
                && view.refresh().is_ok()
            {
                app.push_output(vec!["refreshed".to_string()]);
            }
            app.take_notice();
        }
        KeyCode::Char('d') => toggle_mode(app),
        KeyCode::Char('e') => begin_edit(app),
        KeyCode::Char('a') => confirm_apply(app),
        KeyCode::Esc => {
            if let Some(view) = app.explorer.as_mut() {
                if view.selected().is_some() {
                    view.clear_selection();
                } else {
                    app.quit = true;
                }
            }
        }
        _ => {}
    }
}

/// Folders toggle; files become the selection.
pub(super) fn activate_row(app: &mut App, idx: usize) {
    let Some(view) = app.explorer.as_mut() else {
        return;
    };
    match view.rows().get(idx).map(|r| r.kind.clone()) {
        Some(RowKind::Folder { id, .. }) => view.toggle_folder(id),
        Some(RowKind::File { id, .. }) => {
            if view.select_file(id).is_ok() {
                app.editor = Editor::default();
            }
            app.take_notice();
        }
        Some(RowKind::Empty) | None => {}
    }
}

fn cursor_position(app: &App) -> (u16, u16) {
    let area = app.tree_area.get();
    let depth = app
        .explorer
        .as_ref()
        .and_then(|v| v.rows().get(app.cursor).map(|r| r.depth))
        .unwrap_or(0);
    let line = app.cursor.saturating_sub(app.tree_offset.get()) as u16;
    (
        area.x + 2 + (depth as u16) * 2,
        area.y.saturating_add(line).saturating_add(1),
    )
}

pub(super) fn open_menu_at(app: &mut App, idx: usize, position: (u16, u16)) {
    let Some(view) = app.explorer.as_mut() else {
        return;
    };
    let Some(node) = view.rows().get(idx).and_then(|r| r.node()) else {
        return;
    };
    view.open_context_menu(node, position);
}

pub(super) fn menu_key(app: &mut App, key: KeyEvent) {
    let Some(view) = app.explorer.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => view.close_context_menu(),
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(menu) = view.router_mut().menu_mut() {
                menu.move_up();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(menu) = view.router_mut().menu_mut() {
                menu.move_down();
            }
        }
        KeyCode::Enter => {
            let selected = view.router().menu().map(|m| m.selected).unwrap_or(0);
            choose_menu_item(app, selected);
        }
        _ => {}
    }
}

pub(super) fn choose_menu_item(app: &mut App, index: usize) {
    let Some(view) = app.explorer.as_mut() else {
        return;
    };
    let Some(kind) = view
        .router()
        .menu()
        .and_then(|m| m.items().get(index).copied())
    else {
        view.close_context_menu();
        return;
    };
    let Some(pending) = view.choose_action(kind).cloned() else {
        return;
    };

    match pending.kind {
        ActionKind::CreateFile | ActionKind::CreateFolder | ActionKind::Rename => {
            app.name_input.set(pending.default_name);
        }
        ActionKind::Move => {
            app.picker_cursor = view
                .move_picker_rows()
                .ok()
                .and_then(|rows| rows.iter().position(|r| r.disabled.is_none()))
                .unwrap_or(0);
        }
        ActionKind::Delete => {}
    }
}

pub(super) fn pending_key(app: &mut App, key: KeyEvent) {
    let Some(kind) = app
        .explorer
        .as_ref()
        .and_then(|v| v.pending())
        .map(|p| p.kind)
    else {
        return;
    };

    match kind {
        ActionKind::CreateFile | ActionKind::CreateFolder | ActionKind::Rename => {
            name_key(app, key)
        }
        ActionKind::Move => picker_key(app, key),
        ActionKind::Delete => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                if let Some(view) = app.explorer.as_mut() {
                    let _ = view.confirm_delete();
                }
                app.take_notice();
            }
            KeyCode::Esc | KeyCode::Char('n') => cancel(app),
            _ => {}
        },
    }
}

fn cancel(app: &mut App) {
    if let Some(view) = app.explorer.as_mut() {
        view.cancel_action();
    }
    app.name_input.clear();
}

fn name_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel(app),
        KeyCode::Enter => {
            let value = app.name_input.buf.clone();
            let Some(view) = app.explorer.as_mut() else {
                return;
            };
            if view.submit_name(&value).is_ok() {
                app.name_input.clear();
            }
            app.take_notice();
        }
        KeyCode::Backspace => app.name_input.backspace(),
        KeyCode::Delete => app.name_input.delete(),
        KeyCode::Left => app.name_input.move_left(),
        KeyCode::Right => app.name_input.move_right(),
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            app.name_input.insert_char(c);
        }
        _ => {}
    }
}

/// Disabled destinations are skipped by the cursor and refused on Enter.
fn picker_key(app: &mut App, key: KeyEvent) {
    let Some(view) = app.explorer.as_mut() else {
        return;
    };
    let rows = view.move_picker_rows().unwrap_or_default();
    match key.code {
        KeyCode::Esc => cancel(app),
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(i) = (0..app.picker_cursor)
                .rev()
                .find(|&i| rows.get(i).is_some_and(|r| r.disabled.is_none()))
            {
                app.picker_cursor = i;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(i) = (app.picker_cursor + 1..rows.len())
                .find(|&i| rows.get(i).is_some_and(|r| r.disabled.is_none()))
            {
                app.picker_cursor = i;
            }
        }
        KeyCode::Enter => {
            let Some(row) = rows.get(app.picker_cursor) else {
                return;
            };
            if view.pick_destination(row.id).is_ok() {
                let _ = view.submit_move();
            }
            app.take_notice();
        }
        _ => {}
    }
}

fn toggle_mode(app: &mut App) {
    let Some(view) = app.explorer.as_mut() else {
        return;
    };
    if view.detail().is_none() {
        return;
    }
    match view.toggle_view_mode() {
        Ok(mode) => app.push_output(vec![format!("showing {}", mode.label())]),
        Err(err) => app.push_error(format!("{:#}", err)),
    }
}

fn begin_edit(app: &mut App) {
    let Some(view) = app.explorer.as_mut() else {
        return;
    };
    if view.detail().is_none() {
        app.push_error("select a file first".to_string());
        return;
    }
    match view.begin_edit() {
        Ok(()) => {
            let buf = view.edit_buffer_mut().map(|b| b.clone()).unwrap_or_default();
            app.editor = Editor::at_end(&buf);
            app.push_output(vec!["editing (Ctrl-S save, Esc cancel)".to_string()]);
        }
        Err(err) => app.push_error(format!("{:#}", err)),
    }
}

fn confirm_apply(app: &mut App) {
    let Some(panel) = app.explorer.as_ref().and_then(|v| v.detail()) else {
        return;
    };
    if !panel.has_draft() {
        app.push_error("this file has no draft".to_string());
        return;
    }
    let file = panel.detail().id;
    let name = panel.detail().name.clone();
    app.modal = Some(Modal {
        title: "Apply Draft".to_string(),
        lines: vec![
            format!("Replace the content of {} with its draft?", name),
            String::new(),
            "Enter to apply; Esc to cancel.".to_string(),
        ],
        scroll: 0,
        kind: ModalKind::ConfirmApplyDraft { file },
    });
}

pub(in crate::tui_shell) fn apply_draft(app: &mut App) {
    if let Some(view) = app.explorer.as_mut() {
        let _ = view.apply_draft();
        if let Some(buf) = view.edit_buffer_mut().ok().map(|b| b.clone()) {
            app.editor = Editor::at_end(&buf);
        }
    }
    app.take_notice();
}

pub(super) fn editor_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let Some(view) = app.explorer.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Char('s') if ctrl => {
            let _ = view.save_edit();
            app.take_notice();
            return;
        }
        KeyCode::Char('d') if ctrl => {
            if let Err(err) = view.set_view_mode(ViewMode::Draft) {
                app.push_error(format!("{:#}", err));
            }
            return;
        }
        KeyCode::Esc => {
            let _ = view.cancel_edit();
            app.push_output(vec!["edit cancelled".to_string()]);
            return;
        }
        _ => {}
    }

    let Ok(buf) = view.edit_buffer_mut() else {
        return;
    };
    let ed = &mut app.editor;
    match key.code {
        KeyCode::Enter => ed.insert_char(buf, '\n'),
        KeyCode::Tab => {
            for _ in 0..4 {
                ed.insert_char(buf, ' ');
            }
        }
        KeyCode::Backspace => ed.backspace(buf),
        KeyCode::Delete => ed.delete(buf),
        KeyCode::Left => ed.move_left(),
        KeyCode::Right => ed.move_right(buf),
        KeyCode::Up => ed.move_up(buf),
        KeyCode::Down => ed.move_down(buf),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            ed.insert_char(buf, c)
        }
        _ => {}
    }
}

fn open_help(app: &mut App) {
    app.open_modal(
        "Help",
        vec![
            "Up/Down     move".to_string(),
            "Enter       open file / toggle folder".to_string(),
            "Left/Right  collapse / expand folder".to_string(),
            "m, Space    actions for the row (or right-click)".to_string(),
            "d           switch draft / current content".to_string(),
            "e           edit current content".to_string(),
            "a           apply draft".to_string(),
            "r           refresh tree".to_string(),
            "Esc         clear selection / quit".to_string(),
            String::new(),
            "While editing: Ctrl-S save, Esc cancel, Ctrl-D view draft".to_string(),
        ],
    );
}
