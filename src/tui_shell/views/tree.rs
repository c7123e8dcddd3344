use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::explorer::RouterState;
use crate::tree::{RowKind, TreeRow};

use super::super::{App, render_view_chrome};

fn row_line(row: &TreeRow) -> Line<'static> {
    let pad = "  ".repeat(row.depth);
    match &row.kind {
        RowKind::Folder { name, expanded, .. } => {
            let marker = if *expanded { "▾" } else { "▸" };
            Line::from(vec![
                Span::raw(pad),
                Span::styled(
                    format!("{} {}/", marker, name),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
            ])
        }
        RowKind::File {
            name,
            has_draft,
            selected,
            ..
        } => {
            let style = if *selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::raw(pad), Span::styled(format!("  {}", name), style)];
            if *has_draft {
                spans.push(Span::styled(" [draft]", Style::default().fg(Color::Yellow)));
            }
            Line::from(spans)
        }
        RowKind::Empty => Line::from(vec![
            Span::raw(pad),
            Span::styled(
                "  (empty)",
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            ),
        ]),
    }
}

pub(in crate::tui_shell) fn render_tree(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let Some(view) = &app.explorer else {
        let inner = render_view_chrome(frame, "Workspace", "", true, area);
        app.tree_area.set(Rect::default());
        let msg = app
            .load_err
            .as_deref()
            .unwrap_or("(not signed in; run `frontfiles login`)");
        frame.render_widget(Paragraph::new(msg), inner);
        return;
    };

    let focused = view.state() == RouterState::Idle
        && !view.detail().is_some_and(|p| p.is_editing());
    let note = view
        .tree()
        .map(|m| format!("{} folders, {} files", m.folder_count(), m.file_count()))
        .unwrap_or_else(|| "(not loaded)".to_string());
    let inner = render_view_chrome(frame, "Workspace", &note, focused, area);
    app.tree_area.set(inner);

    let rows = view.rows();
    if rows.is_empty() {
        frame.render_widget(Paragraph::new("(no tree)"), inner);
        return;
    }

    let height = (inner.height as usize).max(1);
    let cursor = app.cursor.min(rows.len() - 1);
    let mut offset = app.tree_offset.get().min(rows.len() - 1);
    if cursor < offset {
        offset = cursor;
    } else if cursor >= offset + height {
        offset = cursor + 1 - height;
    }
    app.tree_offset.set(offset);

    let items: Vec<ListItem> = rows
        .iter()
        .skip(offset)
        .take(height)
        .map(|row| ListItem::new(row_line(row)))
        .collect();

    let mut state = ListState::default();
    state.select(Some(cursor - offset));
    let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, inner, &mut state);
}
