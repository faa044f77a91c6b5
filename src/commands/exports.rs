// src/commands/exports.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mesonport::exports::{parse_export_list, render_exports, ExportFormat};

pub fn cmd_exports(
    out: Option<&Path>,
    format: ExportFormat,
    underscore: bool,
    lists: &[PathBuf],
) -> Result<()> {
    let mut symbols = Vec::new();
    for list in lists {
        let content = std::fs::read_to_string(list)
            .with_context(|| format!("Failed to read export list {}", list.display()))?;
        symbols.extend(parse_export_list(&list.display().to_string(), &content)?);
    }

    let mut text = render_exports(&symbols, format, underscore).join("\n");
    text.push('\n');

    match out {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", text),
    }
    Ok(())
}
