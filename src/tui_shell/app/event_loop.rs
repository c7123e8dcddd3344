use crate::explorer::RouterState;

use super::explorer_keys;
use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                Event::Mouse(m) => handle_mouse(app, m),
                _ => {}
            }
        }
    }
}

pub(in crate::tui_shell) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    let Some(view) = app.explorer.as_ref() else {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            app.quit = true;
        }
        return;
    };

    match view.state() {
        RouterState::MenuOpen => explorer_keys::menu_key(app, key),
        RouterState::ActionPending => explorer_keys::pending_key(app, key),
        RouterState::Idle => {
            let editing = view.detail().is_some_and(|p| p.is_editing());
            if editing {
                explorer_keys::editor_key(app, key);
            } else {
                explorer_keys::browse_key(app, key);
            }
        }
    }
}

/// Tree row index under a screen position, if any.
fn row_at(app: &App, column: u16, row: u16) -> Option<usize> {
    let area = app.tree_area.get();
    if column < area.x
        || column >= area.x.saturating_add(area.width)
        || row < area.y
        || row >= area.y.saturating_add(area.height)
    {
        return None;
    }
    let idx = app.tree_offset.get() + (row - area.y) as usize;
    let n = app.explorer.as_ref().map(|v| v.rows().len()).unwrap_or(0);
    (idx < n).then_some(idx)
}

pub(in crate::tui_shell) fn handle_mouse(app: &mut App, m: MouseEvent) {
    if app.modal.is_some() {
        return;
    }
    let Some(state) = app.explorer.as_ref().map(|v| v.state()) else {
        return;
    };

    match m.kind {
        MouseEventKind::Down(MouseButton::Right) => {
            if state == RouterState::ActionPending {
                return;
            }
            if state == RouterState::MenuOpen
                && let Some(view) = app.explorer.as_mut()
            {
                view.close_context_menu();
            }
            if let Some(idx) = row_at(app, m.column, m.row) {
                app.cursor = idx;
                explorer_keys::open_menu_at(app, idx, (m.column, m.row));
            }
        }

        MouseEventKind::Down(MouseButton::Left) => match state {
            RouterState::MenuOpen => {
                let menu = app.menu_area.get();
                let inside = m.column >= menu.x
                    && m.column < menu.x.saturating_add(menu.width)
                    && m.row > menu.y
                    && m.row < menu.y.saturating_add(menu.height).saturating_sub(1);
                if inside {
                    explorer_keys::choose_menu_item(app, (m.row - menu.y - 1) as usize);
                } else if let Some(view) = app.explorer.as_mut() {
                    view.close_context_menu();
                }
            }
            RouterState::Idle => {
                if let Some(idx) = row_at(app, m.column, m.row) {
                    app.cursor = idx;
                    explorer_keys::activate_row(app, idx);
                }
            }
            RouterState::ActionPending => {}
        },

        MouseEventKind::ScrollUp if state == RouterState::Idle => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        MouseEventKind::ScrollDown if state == RouterState::Idle => {
            app.cursor += 1;
            app.clamp_cursor();
        }
        _ => {}
    }
}
