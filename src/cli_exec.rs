use anyhow::{Context, Result};

use frontfiles::model::{FileId, FolderId, NodeKind};

use crate::{Commands, load_tree, open_client};

mod content;
mod session;
mod structure;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => session::handle_login_command(args)?,
        Commands::Logout => session::handle_logout_command()?,
        Commands::Tree(args) => structure::handle_tree_command(args.json)?,
        Commands::Mkdir(args) => structure::handle_create_command(NodeKind::Folder, args)?,
        Commands::Touch(args) => structure::handle_create_command(NodeKind::File, args)?,
        Commands::Rename(args) => {
            structure::handle_rename_command(args.kind.node(args.id), &args.name)?
        }
        Commands::Mv(args) => {
            structure::handle_move_command(args.kind.node(args.id), FolderId(args.dest))?
        }
        Commands::Rm(args) => structure::handle_remove_command(args.kind.node(args.id), args.yes)?,
        Commands::Destinations(args) => {
            structure::handle_destinations_command(args.kind.node(args.id), args.json)?
        }
        Commands::Cat(args) => content::handle_cat_command(FileId(args.id), args.draft, args.json)?,
        Commands::Write(args) => content::handle_write_command(FileId(args.id), args.from)?,
        Commands::ApplyDraft(args) => content::handle_apply_draft_command(FileId(args.id))?,
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}
