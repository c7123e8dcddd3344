use anyhow::Result;

mod app;
mod input;
mod modal;
mod view;
mod views;

// Make core TUI types/helpers available to submodules via `super::...`.
use app::{App, Modal, ModalKind, fmt_since, fmt_ts_ui};
use view::{RenderCtx, render_view_chrome};

pub(crate) fn run() -> Result<()> {
    app::run()
}
