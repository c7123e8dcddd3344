use std::io::Read;
use std::path::PathBuf;

use super::*;

pub(super) fn handle_cat_command(file: FileId, draft: bool, json: bool) -> Result<()> {
    let client = open_client()?;
    let detail = client.fetch_file_detail(file)?;
    if json {
        return print_json(&detail, "file");
    }

    let body = if draft {
        detail
            .draft()
            .with_context(|| format!("{} has no draft", detail.name))?
    } else {
        detail.content.as_str()
    };
    print!("{}", body);
    if !body.is_empty() && !body.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub(super) fn handle_write_command(file: FileId, from: Option<PathBuf>) -> Result<()> {
    let content = match from {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };

    let client = open_client()?;
    let saved = client.patch_file_content(file, &content)?;
    println!("Saved {} ({} bytes)", saved.name, saved.content.len());
    Ok(())
}

pub(super) fn handle_apply_draft_command(file: FileId) -> Result<()> {
    let client = open_client()?;
    let detail = client.fetch_file_detail(file)?;
    if !detail.has_draft {
        anyhow::bail!("{} has no draft", detail.name);
    }
    let applied = client.apply_draft(file)?;
    println!("Applied draft to {}", applied.name);
    Ok(())
}
