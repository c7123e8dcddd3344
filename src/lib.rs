pub mod explorer;
pub mod gateway;
pub mod model;
pub mod remote;
pub mod session;
pub mod tree;
pub mod tui;

mod tui_shell;
