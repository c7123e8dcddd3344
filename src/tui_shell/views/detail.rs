use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::explorer::{FileDetailPanel, RouterState, ViewMode};

use super::super::{App, RenderCtx, fmt_since, fmt_ts_ui, render_view_chrome};

fn tab(label: &str, active: bool, enabled: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!(" {} ", label), style)
}

fn meta_line(panel: &FileDetailPanel, ctx: &RenderCtx) -> Line<'static> {
    let detail = panel.detail();
    let updated = match detail.updated_at.as_deref() {
        Some(ts) => match fmt_since(ts, ctx.now) {
            Some(age) => format!("last updated {} ({})", fmt_ts_ui(ts), age),
            None => format!("last updated {}", fmt_ts_ui(ts)),
        },
        None => "last updated: unknown".to_string(),
    };
    let mut spans = vec![Span::styled(updated, Style::default().fg(Color::Gray))];
    if let Some(path) = detail.file_path.as_deref() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(path.to_string(), Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}

pub(in crate::tui_shell) fn render_detail(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &App,
    ctx: &RenderCtx,
) {
    let panel = app.explorer.as_ref().and_then(|v| v.detail());
    let Some(panel) = panel else {
        let inner = render_view_chrome(frame, "File", "", false, area);
        frame.render_widget(
            Paragraph::new("(no file selected)").style(Style::default().fg(Color::Gray)),
            inner,
        );
        return;
    };

    let editing = panel.is_editing();
    let note = if editing {
        "editing: Ctrl-S save, Esc cancel"
    } else {
        panel.mode().label()
    };
    let inner = render_view_chrome(frame, &panel.detail().name, note, editing, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(if panel.error().is_some() { 1 } else { 0 }),
            Constraint::Min(0),
        ])
        .split(inner);

    let tabs = Line::from(vec![
        tab(
            ViewMode::Current.label(),
            panel.mode() == ViewMode::Current,
            true,
        ),
        Span::raw(" "),
        tab(
            ViewMode::Draft.label(),
            panel.mode() == ViewMode::Draft,
            panel.has_draft(),
        ),
        Span::styled(
            if panel.has_draft() {
                "  d: switch  a: apply draft"
            } else {
                "  e: edit"
            },
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(tabs), parts[0]);
    frame.render_widget(Paragraph::new(meta_line(panel, ctx)), parts[1]);

    if let Some(err) = panel.error() {
        frame.render_widget(
            Paragraph::new(format!("error: {}", err)).style(Style::default().fg(Color::Red)),
            parts[2],
        );
    }

    let body_area = parts[3];
    let text = panel.displayed();
    let body_style = match panel.mode() {
        ViewMode::Draft => Style::default().fg(Color::Yellow),
        ViewMode::Current => Style::default(),
    };

    if editing {
        let (line, col) = app.editor.position(text);
        let height = body_area.height.max(1) as usize;
        let scroll = line.saturating_sub(height - 1);
        frame.render_widget(
            Paragraph::new(text).style(body_style).scroll((scroll as u16, 0)),
            body_area,
        );
        let overlay_open = app.modal.is_some()
            || app
                .explorer
                .as_ref()
                .is_some_and(|v| v.state() != RouterState::Idle);
        if !overlay_open {
            let x = body_area.x + (col as u16).min(body_area.width.saturating_sub(1));
            let y = body_area.y + (line - scroll) as u16;
            frame.set_cursor_position((x, y));
        }
    } else {
        frame.render_widget(
            Paragraph::new(text)
                .style(body_style)
                .wrap(Wrap { trim: false }),
            body_area,
        );
    }
}
