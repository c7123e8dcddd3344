use std::io::{BufRead, IsTerminal, Write};

use frontfiles::explorer::ops;
use frontfiles::model::{NodeKind, NodeRef};
use frontfiles::tree::{ExpandState, RowKind, TreeModel, legal_destinations, visible_rows};

use crate::CreateArgs;

use super::*;

pub(super) fn handle_tree_command(json: bool) -> Result<()> {
    let client = open_client()?;
    let model = load_tree(&client)?;
    if json {
        return print_json(model.root(), "tree");
    }

    for row in visible_rows(&model, &ExpandState::default(), None) {
        let pad = "  ".repeat(row.depth);
        match row.kind {
            RowKind::Folder { id, name, .. } => println!("{}{}/ [{}]", pad, name, id),
            RowKind::File {
                id,
                name,
                has_draft,
                ..
            } => {
                let marker = if has_draft { " (draft)" } else { "" };
                println!("{}{} [{}]{}", pad, name, id, marker);
            }
            RowKind::Empty => println!("{}(empty)", pad),
        }
    }
    Ok(())
}

pub(super) fn handle_create_command(kind: NodeKind, args: CreateArgs) -> Result<()> {
    let client = open_client()?;
    let model = load_tree(&client)?;
    let parent = args
        .parent
        .map(FolderId)
        .unwrap_or_else(|| model.root().id);
    let project = client.config().project_id;

    let created = ops::create_node(&client, project, &model, kind, parent, &args.name)?;
    let id = match created {
        NodeRef::Folder(id) => id.get(),
        NodeRef::File(id) => id.get(),
    };
    if args.json {
        return print_json(
            &serde_json::json!({ "kind": kind, "id": id, "parent": parent }),
            "created node",
        );
    }
    println!("Created {} {} [{}]", kind.label(), args.name.trim(), id);
    Ok(())
}

pub(super) fn handle_rename_command(target: NodeRef, name: &str) -> Result<()> {
    let client = open_client()?;
    let model = load_tree(&client)?;
    ops::rename_node(&client, &model, target, name)?;
    println!("Renamed {} to {}", describe(&model, target), name.trim());
    Ok(())
}

pub(super) fn handle_move_command(target: NodeRef, destination: FolderId) -> Result<()> {
    let client = open_client()?;
    let model = load_tree(&client)?;
    ops::move_node(&client, &model, target, destination)?;
    let dest = model
        .folder_path(destination)
        .unwrap_or_else(|| destination.to_string());
    println!("Moved {} into {}", describe(&model, target), dest);
    Ok(())
}

pub(super) fn handle_remove_command(target: NodeRef, yes: bool) -> Result<()> {
    let client = open_client()?;
    let model = load_tree(&client)?;
    if !model.contains(target) {
        anyhow::bail!("{} not found in the project tree", describe(&model, target));
    }
    let what = describe(&model, target);

    if !yes && !confirm(&format!("Delete {}?", what))? {
        println!("Cancelled");
        return Ok(());
    }
    ops::delete_node(&client, target)?;
    println!("Deleted {}", what);
    Ok(())
}

pub(super) fn handle_destinations_command(target: NodeRef, json: bool) -> Result<()> {
    let client = open_client()?;
    let model = load_tree(&client)?;
    let legal = legal_destinations(&model, target)?;

    if json {
        let out: Vec<serde_json::Value> = legal
            .iter()
            .map(|id| serde_json::json!({ "id": id, "path": model.folder_path(*id) }))
            .collect();
        return print_json(&out, "destinations");
    }
    if legal.is_empty() {
        println!("No legal destinations");
    }
    for id in legal {
        println!(
            "{} {}",
            id,
            model.folder_path(id).unwrap_or_else(|| id.to_string())
        );
    }
    Ok(())
}

fn describe(model: &TreeModel, target: NodeRef) -> String {
    let (label, id) = match target {
        NodeRef::Folder(id) => ("folder", id.get()),
        NodeRef::File(id) => ("file", id.get()),
    };
    match model.name_of(target) {
        Some(name) => format!("{} {} [{}]", label, name, id),
        None => format!("{} {}", label, id),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        anyhow::bail!("refusing to delete without --yes (stdin is not a terminal)");
    }
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    stdin.lock().read_line(&mut line).context("read answer")?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
