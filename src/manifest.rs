// src/manifest.rs

//! Porting manifest: which declaration files feed which Meson target
//!
//! # Example port.toml
//!
//! ```toml
//! [sources.vp8]
//! makefiles = [
//!     "vp8/vp8_common.mk",
//!     "vp8/vp8cx.mk",
//!     "vp8/vp8dx.mk",
//! ]
//!
//! [sources.dsp]
//! dir = "vpx_dsp"
//! makefiles = ["vpx_dsp/vpx_dsp.mk"]
//! ```
//!
//! Paths are relative to the source root given on the command line.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a porting manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse manifest file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Target '{0}' lists no makefiles")]
    EmptyTarget(String),
}

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// One Meson target and the declaration files describing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTarget {
    /// Target directory, defaults to the table name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Declaration files, parsed in order
    pub makefiles: Vec<PathBuf>,
}

/// The full porting manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortManifest {
    #[serde(default)]
    pub sources: BTreeMap<String, SourceTarget>,
}

impl PortManifest {
    /// The libvpx layout: vp8, vp9, vpx_dsp and vpx_scale
    pub fn libvpx() -> Self {
        let target = |makefiles: &[&str]| SourceTarget {
            dir: None,
            makefiles: makefiles.iter().map(|m| PathBuf::from(*m)).collect(),
        };

        let mut sources = BTreeMap::new();
        sources.insert(
            "vp8".to_string(),
            target(&["vp8/vp8_common.mk", "vp8/vp8cx.mk", "vp8/vp8dx.mk"]),
        );
        sources.insert(
            "vp9".to_string(),
            target(&["vp9/vp9_common.mk", "vp9/vp9cx.mk", "vp9/vp9dx.mk"]),
        );
        sources.insert("vpx_dsp".to_string(), target(&["vpx_dsp/vpx_dsp.mk"]));
        sources.insert("vpx_scale".to_string(), target(&["vpx_scale/vpx_scale.mk"]));

        Self { sources }
    }

    /// A manifest with a single target
    pub fn single(dir: impl Into<PathBuf>, makefiles: Vec<PathBuf>) -> Self {
        let dir = dir.into();
        let mut sources = BTreeMap::new();
        sources.insert(
            dir.display().to_string(),
            SourceTarget {
                dir: Some(dir),
                makefiles,
            },
        );
        Self { sources }
    }

    pub fn validate(&self) -> ManifestResult<()> {
        for (name, target) in &self.sources {
            if target.makefiles.is_empty() {
                return Err(ManifestError::EmptyTarget(name.clone()));
            }
        }
        Ok(())
    }

    /// Targets with their directory and makefiles resolved against `root`
    pub fn resolve(&self, root: &Path) -> Vec<(PathBuf, Vec<PathBuf>)> {
        self.sources
            .iter()
            .map(|(name, target)| {
                let dir = target.dir.clone().unwrap_or_else(|| PathBuf::from(name));
                let makefiles = target.makefiles.iter().map(|m| root.join(m)).collect();
                (root.join(dir), makefiles)
            })
            .collect()
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Parse a manifest from a TOML file
pub fn load_manifest(path: &Path) -> ManifestResult<PortManifest> {
    let content = std::fs::read_to_string(path)?;
    parse_manifest_string(&content)
}

/// Parse a manifest from a TOML string
pub fn parse_manifest_string(content: &str) -> ManifestResult<PortManifest> {
    let manifest: PortManifest = toml::from_str(content)?;
    manifest.validate()?;
    Ok(manifest)
}
