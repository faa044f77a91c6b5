// src/commands/build_log.rs

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use mesonport::build_log::{capture_build_options, meson_log_path};

pub fn cmd_build_options(build_root: &Path) -> Result<()> {
    let log_path = meson_log_path(build_root);
    let log = std::fs::read_to_string(&log_path)
        .with_context(|| format!("Failed to read {}", log_path.display()))?;

    let options = capture_build_options(&log)
        .ok_or_else(|| anyhow!("No build options recorded in {}", log_path.display()))?;
    println!("{}", options);
    Ok(())
}
