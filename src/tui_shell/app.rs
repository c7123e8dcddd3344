use std::cell::Cell;
use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::explorer::{ExplorerView, Notice};
use crate::gateway::WorkspaceGateway;
use crate::remote::RemoteClient;
use crate::session::SessionStore;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::input::{Editor, Input};
use super::modal;
use super::view::RenderCtx;

mod event_loop;
mod explorer_keys;
mod log_types;
mod modal_types;
mod render;
mod runtime;
mod time_utils;

use self::log_types::{EntryKind, ScrollEntry};
pub(in crate::tui_shell) use self::event_loop::{handle_key, handle_mouse};
pub(in crate::tui_shell) use self::explorer_keys::apply_draft;
pub(super) use self::modal_types::{Modal, ModalKind};
pub(super) use self::runtime::run;
pub(in crate::tui_shell) use self::time_utils::now_ts;
pub(super) use self::time_utils::{fmt_since, fmt_ts_ui};

pub(in crate::tui_shell) type DynGateway = Box<dyn WorkspaceGateway>;

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) explorer: Option<ExplorerView<DynGateway>>,
    pub(in crate::tui_shell) load_err: Option<String>,
    pub(in crate::tui_shell) header: String,

    // Index into the visible tree rows.
    pub(in crate::tui_shell) cursor: usize,
    pub(in crate::tui_shell) picker_cursor: usize,
    pub(in crate::tui_shell) name_input: Input,
    pub(in crate::tui_shell) editor: Editor,

    // Written while drawing, read by mouse handling.
    pub(in crate::tui_shell) tree_area: Cell<Rect>,
    pub(in crate::tui_shell) tree_offset: Cell<usize>,
    pub(in crate::tui_shell) menu_area: Cell<Rect>,

    pub(in crate::tui_shell) log: Vec<ScrollEntry>,
    pub(in crate::tui_shell) last_result: Option<ScrollEntry>,

    pub(in crate::tui_shell) modal: Option<Modal>,

    pub(in crate::tui_shell) quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            explorer: None,
            load_err: None,
            header: String::new(),
            cursor: 0,
            picker_cursor: 0,
            name_input: Input::default(),
            editor: Editor::default(),
            tree_area: Cell::new(Rect::default()),
            tree_offset: Cell::new(0),
            menu_area: Cell::new(Rect::default()),
            log: Vec::new(),
            last_result: None,
            modal: None,
            quit: false,
        }
    }
}

impl App {
    pub(super) fn load() -> Self {
        let mut app = App::default();
        let opened = std::env::current_dir()
            .context("get current dir")
            .and_then(|cwd| SessionStore::discover(&cwd))
            .and_then(RemoteClient::from_store);
        match opened {
            Ok(client) => {
                let cfg = client.config().clone();
                app.header = format!("project={} {}", cfg.project_id, cfg.base_url);
                app.attach(Box::new(client), cfg.project_id);
            }
            Err(err) => {
                app.load_err = Some(format!("{:#}", err));
            }
        }
        app.push_output(vec![
            "m: actions  Enter: open  e: edit  d: draft/current  ?: help".to_string(),
        ]);
        app
    }

    /// Binds the app to a gateway and loads the first snapshot.
    pub(in crate::tui_shell) fn attach(
        &mut self,
        gateway: DynGateway,
        project: crate::model::ProjectId,
    ) {
        let mut view = ExplorerView::new(gateway, project);
        let _ = view.refresh();
        self.explorer = Some(view);
        self.take_notice();
    }

    /// Moves the explorer's latest notice into the status line.
    pub(in crate::tui_shell) fn take_notice(&mut self) {
        let Some(view) = self.explorer.as_mut() else {
            return;
        };
        let notice = view.notice().cloned();
        view.clear_notice();
        match notice {
            Some(Notice::Info(msg)) => self.push_output(vec![msg]),
            Some(Notice::Error(msg)) => self.push_error(msg),
            None => {}
        }
        self.clamp_cursor();
    }

    pub(in crate::tui_shell) fn clamp_cursor(&mut self) {
        let n = self.explorer.as_ref().map(|v| v.rows().len()).unwrap_or(0);
        self.cursor = self.cursor.min(n.saturating_sub(1));
    }

    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        let entry = ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        };
        self.log.push(entry.clone());
        self.last_result = Some(entry);
    }

    pub(in crate::tui_shell) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(in crate::tui_shell) fn push_error(&mut self, msg: String) {
        tracing::debug!(%msg, "tui error");
        self.push_entry(EntryKind::Error, vec![msg]);
    }

    pub(in crate::tui_shell) fn open_modal(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::Viewer,
        });
    }

    pub(in crate::tui_shell) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
