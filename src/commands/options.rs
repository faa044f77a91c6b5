// src/commands/options.rs

//! Option regeneration from configure

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mesonport::options::toggles::{default_scripts, parse_toggle_scripts, scripts_under};
use mesonport::options::{parse_configure_help, update_from_configure_help, update_from_toggles};
use tracing::info;

pub fn cmd_options(root: &Path, help_txt: &Path) -> Result<()> {
    let help = std::fs::read_to_string(help_txt)
        .with_context(|| format!("Failed to read {}", help_txt.display()))?;

    let options = parse_configure_help(help.lines()).without_meson_builtins();
    info!("Parsed {} options from {}", options.len(), help_txt.display());

    update_from_configure_help(root, &options)
        .with_context(|| format!("Failed to update options under {}", root.display()))?;

    println!("{} options written", options.len());
    Ok(())
}

pub fn cmd_toggles(root: &Path, scripts: &[PathBuf]) -> Result<()> {
    let scripts = if scripts.is_empty() {
        default_scripts()
    } else {
        scripts.to_vec()
    };

    let options = parse_toggle_scripts(&scripts_under(root, &scripts))
        .context("Failed to read configure scripts")?;
    info!("Found {} toggles", options.len());

    if update_from_toggles(root, &options)? {
        println!("{} toggles written", options.len());
    } else {
        println!("No generated block found, nothing written");
    }
    Ok(())
}
