// src/commands/sources.rs

//! Source table regeneration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mesonport::manifest::{load_manifest, PortManifest};
use mesonport::sources::port_target;
use tracing::info;

/// Pick the manifest: explicit target, manifest file, or the libvpx layout
fn select_manifest(
    manifest: Option<&Path>,
    target: Option<&Path>,
    makefiles: &[PathBuf],
) -> Result<PortManifest> {
    if let Some(target) = target {
        let manifest = PortManifest::single(target, makefiles.to_vec());
        manifest.validate()?;
        return Ok(manifest);
    }

    match manifest {
        Some(path) => load_manifest(path)
            .with_context(|| format!("Failed to load porting manifest {}", path.display())),
        None => Ok(PortManifest::libvpx()),
    }
}

pub fn cmd_sources(
    manifest: Option<&Path>,
    root: &Path,
    target: Option<&Path>,
    makefiles: &[PathBuf],
    dry_run: bool,
) -> Result<()> {
    let manifest = select_manifest(manifest, target, makefiles)?;

    let mut total_skipped = 0;
    for (dir, makefiles) in manifest.resolve(root) {
        info!("Regenerating sources for {}", dir.display());
        let report = port_target(&dir, &makefiles, dry_run)
            .with_context(|| format!("Failed to regenerate sources for {}", dir.display()))?;

        if dry_run {
            println!("==> {}", report.build_file.display());
            print!("{}", report.content);
        } else {
            println!(
                "{}: {} entries{}",
                report.build_file.display(),
                report.entries,
                if report.spliced { "" } else { " (new file)" }
            );
        }

        for label in report.skipped.iter() {
            println!("  skipped label: {}", label);
        }
        total_skipped += report.skipped.len();
    }

    if total_skipped > 0 {
        println!("{} label(s) commented out due to missing files", total_skipped);
    }
    Ok(())
}
