use anyhow::Result;

/// Runs the interactive explorer against the discovered `.frontfiles` store.
pub fn run() -> Result<()> {
    crate::tui_shell::run()
}
