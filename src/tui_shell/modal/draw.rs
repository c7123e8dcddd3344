use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use crate::explorer::{ActionKind, ExplorerView, RouterState};
use crate::gateway::WorkspaceGateway;

fn centered(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(6).clamp(20, max_w).min(area.width);
    let h = area.height.saturating_sub(6).clamp(6, max_h).min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

fn titled_box(frame: &mut ratatui::Frame, area: Rect, title: &str, keys: &[&str]) -> Rect {
    frame.render_widget(Clear, area);
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    for k in keys {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(k.to_string(), Style::default().fg(Color::Gray)));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(spans));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub(in crate::tui_shell) fn draw_modal(frame: &mut ratatui::Frame, modal: &super::super::Modal) {
    let box_area = centered(frame.area(), 90, 22);
    let keys: &[&str] = match modal.kind {
        super::super::ModalKind::Viewer => &["Esc"],
        super::super::ModalKind::ConfirmApplyDraft { .. } => &["Esc", "Enter"],
    };
    let inner = titled_box(frame, box_area, &modal.title, keys);

    let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
    let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

/// Context menu or the prompt for the pending action, read from the router.
pub(in crate::tui_shell) fn draw_action_overlay<G: WorkspaceGateway>(
    frame: &mut ratatui::Frame,
    app: &super::super::App,
    view: &ExplorerView<G>,
) {
    match view.state() {
        RouterState::Idle => {}
        RouterState::MenuOpen => draw_menu(frame, app, view),
        RouterState::ActionPending => {
            let Some(pending) = view.pending() else {
                return;
            };
            match pending.kind {
                ActionKind::CreateFile | ActionKind::CreateFolder | ActionKind::Rename => {
                    draw_name_prompt(frame, app, &pending.title(), pending.error.as_deref())
                }
                ActionKind::Move => draw_move_picker(frame, app, view),
                ActionKind::Delete => {
                    let area = centered(frame.area(), 60, 8);
                    let inner = titled_box(frame, area, &pending.title(), &["Esc", "Enter"]);
                    let what = match pending.item_kind() {
                        crate::model::NodeKind::Folder => {
                            "The folder and everything inside it will be removed."
                        }
                        crate::model::NodeKind::File => "The file will be removed.",
                    };
                    frame.render_widget(
                        Paragraph::new(vec![
                            Line::from(what),
                            Line::from(""),
                            Line::from("Enter/y to delete; Esc/n to cancel."),
                        ])
                        .wrap(Wrap { trim: false }),
                        inner,
                    );
                }
            }
        }
    }
}

fn draw_menu<G: WorkspaceGateway>(
    frame: &mut ratatui::Frame,
    app: &super::super::App,
    view: &ExplorerView<G>,
) {
    let Some(menu) = view.router().menu() else {
        return;
    };
    let screen = frame.area();
    let items = menu.items();
    let width = items
        .iter()
        .map(|k| k.label().len() as u16)
        .max()
        .unwrap_or(8)
        .max(menu.target_name.len().min(24) as u16)
        + 4;
    let height = items.len() as u16 + 2;
    let (x, y) = menu.position;
    let area = Rect {
        x: x.min(screen.width.saturating_sub(width)),
        y: y.min(screen.height.saturating_sub(height)),
        width: width.min(screen.width),
        height: height.min(screen.height),
    };
    app.menu_area.set(area);

    frame.render_widget(Clear, area);
    let title: String = menu.target_name.chars().take(24).collect();
    let list = List::new(
        items
            .iter()
            .map(|k| ListItem::new(k.label()))
            .collect::<Vec<_>>(),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().fg(Color::Yellow))),
    )
    .highlight_style(Style::default().bg(Color::DarkGray));
    let mut state = ListState::default();
    state.select(Some(menu.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_name_prompt(
    frame: &mut ratatui::Frame,
    app: &super::super::App,
    title: &str,
    error: Option<&str>,
) {
    let area = centered(frame.area(), 60, 8);
    let inner = titled_box(frame, area, title, &["Esc", "Enter"]);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let mut lines = vec![Line::from("Enter to save; Esc to cancel.")];
    if let Some(err) = error {
        lines.push(Line::from(Span::styled(
            format!("error: {}", err),
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);

    let input = &app.name_input;
    frame.render_widget(
        Paragraph::new(input.buf.as_str())
            .block(Block::default().borders(Borders::ALL).title("Name")),
        parts[1],
    );
    frame.set_cursor_position((parts[1].x + 1 + input.cursor as u16, parts[1].y + 1));
}

fn draw_move_picker<G: WorkspaceGateway>(
    frame: &mut ratatui::Frame,
    app: &super::super::App,
    view: &ExplorerView<G>,
) {
    let Some(pending) = view.pending() else {
        return;
    };
    let area = centered(frame.area(), 70, 24);
    let inner = titled_box(frame, area, &pending.title(), &["Esc", "Enter"]);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let rows = view.move_picker_rows().unwrap_or_default();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let label = format!("{}{}/", "  ".repeat(row.depth), row.name);
            match row.disabled {
                Some(reason) => ListItem::new(Line::from(vec![
                    Span::styled(
                        label,
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::DIM),
                    ),
                    Span::styled(
                        format!("  ({})", reason.describe()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                None => ListItem::new(label),
            }
        })
        .collect();

    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(app.picker_cursor.min(rows.len() - 1)));
    }
    let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, parts[0], &mut state);

    let footer = match pending.error.as_deref() {
        Some(err) => Line::from(Span::styled(
            format!("error: {}", err),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "Greyed-out folders cannot be chosen.",
            Style::default().fg(Color::Gray),
        )),
    };
    frame.render_widget(Paragraph::new(footer), parts[1]);
}
