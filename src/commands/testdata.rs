// src/commands/testdata.rs

use std::path::Path;

use anyhow::{Context, Result};
use mesonport::testdata::verify_manifest;

pub fn cmd_check_test_data(root: &Path, manifest: &Path) -> Result<()> {
    let content = std::fs::read_to_string(manifest)
        .with_context(|| format!("Failed to read manifest {}", manifest.display()))?;

    println!("Checking test data:");
    let report = verify_manifest(root, &manifest.display().to_string(), &content)?;

    for path in &report.verified {
        println!("{}: OK", path.display());
    }
    if !report.missing.is_empty() {
        println!("{} file(s) missing, skipped", report.missing.len());
    }
    println!("Test data OK");
    Ok(())
}
