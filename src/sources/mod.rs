// src/sources/mod.rs

//! Makefile source lists to Meson `files()` declarations
//!
//! libvpx enumerates its sources in `.mk` fragments, one conditional
//! append per line. This module turns those fragments into the source
//! tables of a Meson target:
//!
//! 1. [`classifier`] recognises declaration lines
//! 2. [`resolver`] checks that each declared file exists in the target
//! 3. [`accumulator`] folds the files into kind -> component -> label lists
//! 4. [`emitter`] renders the tables, which are spliced into
//!    `<target>/meson.build` between the `GENERATED` markers
//!
//! # Usage
//!
//! ```ignore
//! use mesonport::sources::port_target;
//!
//! let report = port_target(Path::new("vp8"), &[PathBuf::from("vp8/vp8_common.mk")], false)?;
//! println!("{} files, {} skipped labels", report.entries, report.skipped.len());
//! ```

pub mod accumulator;
pub mod classifier;
pub mod emitter;
pub mod resolver;

pub use accumulator::{LabelMap, SourceMap};
pub use classifier::{classify_line, Declaration, LineRule, SourceKind};
pub use emitter::render;
pub use resolver::{PathResolver, SkipSet};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::{read_file, read_optional, write_file};
use crate::generated::{splice, Markers};
use crate::Result;

/// Name of the build file rewritten in each target directory
pub const MESON_BUILD: &str = "meson.build";

/// Malformed declarations; these abort the whole run
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourcesError {
    #[error("{origin}:{line}: declaration has no component name")]
    MissingComponent { origin: String, line: usize },

    #[error("{origin}:{line}: cannot determine the source kind of component '{component}'")]
    UndeterminedKind {
        origin: String,
        line: usize,
        component: String,
    },
}

/// A declaration whose file list may continue on following lines
#[derive(Debug)]
struct PendingBlock {
    line: usize,
    component: String,
    label: String,
    kind: Option<SourceKind>,
    files: Vec<String>,
}

/// Line-oriented parser that folds declaration files into a [`SourceMap`]
#[derive(Debug)]
pub struct SourceParser {
    resolver: PathResolver,
    map: SourceMap,
    skipped: SkipSet,
    pending: Option<PendingBlock>,
}

impl SourceParser {
    /// Create a parser that validates files under `target`
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            resolver: PathResolver::new(target),
            map: SourceMap::new(),
            skipped: SkipSet::new(),
            pending: None,
        }
    }

    /// Parse one declaration file's content
    ///
    /// `origin` is only used in error messages. A block still open at the
    /// end of the content (trailing `\`) is flushed.
    pub fn parse_str(&mut self, origin: &str, content: &str) -> std::result::Result<(), SourcesError> {
        for (idx, raw) in content.lines().enumerate() {
            self.feed_line(origin, idx + 1, raw)?;
        }
        self.flush(origin)
    }

    /// Read and parse a declaration file
    pub fn parse_file(&mut self, path: &Path) -> Result<()> {
        let content = read_file(path)?;
        debug!("Parsing declarations from {}", path.display());
        self.parse_str(&path.display().to_string(), &content)?;
        Ok(())
    }

    fn feed_line(&mut self, origin: &str, line_no: usize, raw: &str) -> std::result::Result<(), SourcesError> {
        let line = classifier::strip_comment(raw);

        if let Some(block) = self.pending.as_mut() {
            let (files, continued) = classifier::split_file_list(line);
            block.files.extend(files);
            if !continued {
                self.flush(origin)?;
            }
            return Ok(());
        }

        let Some(decl) = classify_line(line) else {
            return Ok(());
        };

        self.pending = Some(PendingBlock {
            line: line_no,
            component: decl.component,
            label: decl.label,
            kind: decl.kind,
            files: decl.files,
        });
        if !decl.continued {
            self.flush(origin)?;
        }
        Ok(())
    }

    fn flush(&mut self, origin: &str) -> std::result::Result<(), SourcesError> {
        let Some(block) = self.pending.take() else {
            return Ok(());
        };

        if block.component.is_empty() {
            return Err(SourcesError::MissingComponent {
                origin: origin.to_string(),
                line: block.line,
            });
        }

        // Literal paths decide the kind; a list made only of `$(VAR)name.c`
        // paths falls back to those, which are dropped later on.
        let kind = block
            .kind
            .or_else(|| {
                block
                    .files
                    .iter()
                    .filter(|f| !classifier::is_variable(f))
                    .find_map(|f| SourceKind::from_path(f))
            })
            .or_else(|| block.files.iter().find_map(|f| SourceKind::from_path(f)))
            .ok_or_else(|| SourcesError::UndeterminedKind {
                origin: origin.to_string(),
                line: block.line,
                component: block.component.clone(),
            })?;

        let accepted = self
            .resolver
            .resolve(kind, &block.label, &block.files, &mut self.skipped);
        self.map.merge(kind, &block.component, &block.label, accepted);
        Ok(())
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.map
    }

    pub fn skipped(&self) -> &SkipSet {
        &self.skipped
    }

    pub fn into_parts(self) -> (SourceMap, SkipSet) {
        (self.map, self.skipped)
    }
}

/// Outcome of regenerating one target
#[derive(Debug, Clone)]
pub struct PortReport {
    /// The rewritten (or would-be rewritten) build file
    pub build_file: PathBuf,
    /// The full new content of the build file
    pub content: String,
    /// Number of file entries in the generated block
    pub entries: usize,
    /// Labels emitted commented-out
    pub skipped: SkipSet,
    /// The build file already had a generated block
    pub spliced: bool,
}

/// Combine a freshly rendered block with the existing build file
///
/// With markers, everything outside them is kept and a blank line follows
/// the opening marker. Without markers the block is the whole file.
pub fn splice_build_file(existing: Option<&str>, block: &str) -> Result<(String, bool)> {
    let Some(existing) = existing else {
        return Ok((block.to_string(), false));
    };
    match splice(existing, &Markers::sources(), &format!("\n{}", block))? {
        Some(content) => Ok((content, true)),
        None => Ok((block.to_string(), false)),
    }
}

/// Regenerate `<target>/meson.build` from the given declaration files
///
/// With `dry_run` the new content is computed but not written.
pub fn port_target(target: &Path, makefiles: &[PathBuf], dry_run: bool) -> Result<PortReport> {
    let mut parser = SourceParser::new(target);
    for makefile in makefiles {
        parser.parse_file(makefile)?;
    }
    let (map, skipped) = parser.into_parts();

    let block = render(&map, &skipped);
    let build_file = target.join(MESON_BUILD);
    let existing = read_optional(&build_file)?;
    let (content, spliced) = splice_build_file(existing.as_deref(), &block)?;

    if !dry_run {
        write_file(&build_file, &content)?;
    }

    let entries = map.literal_len();
    info!(
        "{}: {} entries, {} skipped labels{}",
        build_file.display(),
        entries,
        skipped.len(),
        if dry_run { " (dry run)" } else { "" }
    );

    Ok(PortReport {
        build_file,
        content,
        entries,
        skipped,
        spliced,
    })
}
