mod cli_commands;
mod cli_exec;
mod cli_runtime;

pub(crate) use cli_commands::*;
pub(crate) use cli_runtime::{load_tree, open_client};

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
