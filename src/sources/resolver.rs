// src/sources/resolver.rs

//! On-disk validation of declared source files

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::classifier::{is_variable, SourceKind};

/// Labels whose declared files could not all be resolved
///
/// Skipped labels are still emitted, but commented out, so they can be
/// re-enabled by hand once the files exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet {
    labels: BTreeSet<String>,
}

impl SkipSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.labels.insert(label.into())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|s| s.as_str())
    }
}

/// Decides which declared files exist under a target directory
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Is `candidate` usable as a file of the given kind?
    ///
    /// Data files may be produced later in the build, so they are accepted
    /// without looking at the disk.
    pub fn accepts(&self, kind: SourceKind, candidate: &str) -> bool {
        kind == SourceKind::Data || self.root.join(candidate).exists()
    }

    /// Filter `candidates` down to the accepted files
    ///
    /// When the number of non-variable candidates and accepted files
    /// differ, `label` is added to `skipped`. Unconditional files (empty
    /// label) cannot be commented out, so they are only reported.
    pub fn resolve(
        &self,
        kind: SourceKind,
        label: &str,
        candidates: &[String],
        skipped: &mut SkipSet,
    ) -> Vec<String> {
        let accepted: Vec<String> = candidates
            .iter()
            .filter(|c| self.accepts(kind, c))
            .cloned()
            .collect();

        let literal: Vec<&str> = candidates
            .iter()
            .map(|c| c.as_str())
            .filter(|c| !is_variable(c))
            .collect();

        if literal.len() != accepted.len() {
            if label.is_empty() {
                warn!(
                    "{:?} and {:?} size don't match under {}, dropping the missing files",
                    literal,
                    accepted,
                    self.root.display()
                );
            } else {
                warn!(
                    "{:?} and {:?} size don't match under {}, not building '{}'",
                    literal,
                    accepted,
                    self.root.display(),
                    label
                );
                skipped.insert(label);
            }
        }

        accepted
    }
}
