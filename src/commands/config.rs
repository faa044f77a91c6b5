// src/commands/config.rs

//! vpx_config.h translation commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mesonport::config_header::{parse_switches, render_config_asm, render_config_mk, AsmFormat};
use tracing::debug;

fn read_header(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn cmd_config_mk(output: &Path, headers: &[PathBuf]) -> Result<()> {
    let contents = headers
        .iter()
        .map(|h| read_header(h))
        .collect::<Result<Vec<_>>>()?;

    let rendered = render_config_mk(contents.iter().map(String::as_str));
    std::fs::write(output, rendered)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    debug!("Wrote {}", output.display());
    Ok(())
}

pub fn cmd_config_asm(format: AsmFormat, header: &Path, output: &Path) -> Result<()> {
    let switches = parse_switches(&read_header(header)?);
    std::fs::write(output, render_config_asm(&switches, format))
        .with_context(|| format!("Failed to write {}", output.display()))?;
    debug!("Wrote {} switches to {}", switches.len(), output.display());
    Ok(())
}
