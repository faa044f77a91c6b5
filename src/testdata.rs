// src/testdata.rs

//! Verification of downloaded test vectors against a digest manifest
//!
//! Manifest lines follow the `sha1sum` output format, with an optional `*`
//! marking binary mode:
//!
//! ```text
//! 7ae1f5e5ec6cd4d1a0d2a1e7a2d34c21cf0d4dc3 *vp80-00-comprehensive-001.ivf
//! ```

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::Error;
use crate::hash::{hash_file, HashAlgorithm};
use crate::Result;

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-fA-F0-9]+)\s+\*?(.+)$").unwrap());

/// Errors found while checking test data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TestDataError {
    #[error("Hash mismatch for {}: expected {expected}, got {actual}", path.display())]
    Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("{origin}:{line}: digest of length {len} matches no supported algorithm")]
    InvalidDigest {
        origin: String,
        line: usize,
        len: usize,
    },
}

/// One manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Expected digest, lowercase hex
    pub digest: String,
    pub algorithm: HashAlgorithm,
    pub path: PathBuf,
}

/// Outcome of a successful check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestDataReport {
    /// Files whose digest matched
    pub verified: Vec<PathBuf>,
    /// Listed files that were not present
    pub missing: Vec<PathBuf>,
}

/// Parse a digest manifest; lines that are not entries are ignored
pub fn parse_manifest(origin: &str, content: &str) -> std::result::Result<Vec<ManifestEntry>, TestDataError> {
    let mut entries = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let Some(caps) = ENTRY_RE.captures(raw.trim()) else {
            continue;
        };

        let digest = caps[1].to_lowercase();
        let algorithm = HashAlgorithm::from_hex_len(digest.len()).ok_or_else(|| {
            TestDataError::InvalidDigest {
                origin: origin.to_string(),
                line: idx + 1,
                len: digest.len(),
            }
        })?;

        entries.push(ManifestEntry {
            digest,
            algorithm,
            path: PathBuf::from(caps[2].trim()),
        });
    }

    Ok(entries)
}

/// Check every entry against the files under `root`
///
/// Missing files are reported and skipped; the first mismatch aborts.
pub fn verify_entries(root: &Path, entries: &[ManifestEntry]) -> Result<TestDataReport> {
    let mut report = TestDataReport::default();

    for entry in entries {
        let path = root.join(&entry.path);
        if !path.exists() {
            warn!("{} does not exist, skipping...", path.display());
            report.missing.push(path);
            continue;
        }

        let actual = hash_file(entry.algorithm, &path).map_err(|e| Error::io(&path, e))?;
        if actual != entry.digest {
            return Err(TestDataError::Mismatch {
                path,
                expected: entry.digest.clone(),
                actual,
            }
            .into());
        }

        info!("{}: OK", path.display());
        report.verified.push(path);
    }

    Ok(report)
}

/// Parse and check a manifest's content in one step
pub fn verify_manifest(root: &Path, origin: &str, content: &str) -> Result<TestDataReport> {
    let entries = parse_manifest(origin, content)?;
    verify_entries(root, &entries)
}
