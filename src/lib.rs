// src/lib.rs

//! mesonport
//!
//! Helpers for maintaining a Meson build of libvpx next to its
//! Makefile-based build.
//!
//! # Architecture
//!
//! - Sources: `.mk` declaration files become `files()` tables in each
//!   target's `meson.build`
//! - Options: `configure --help` output and toggle tables become `option()`
//!   declarations
//! - Generated blocks: machine-owned regions between sentinel lines, so hand
//!   edits outside them survive regeneration
//! - Build-time tools: export lists, `vpx_config.h` translation, test-data
//!   verification and build-option capture

pub mod build_log;
pub mod config_header;
mod error;
pub mod exports;
pub mod generated;
pub mod hash;
pub mod manifest;
pub mod options;
pub mod sources;
pub mod testdata;

pub use error::{Error, Result};
pub use exports::{ExportFormat, ExportedSymbol};
pub use generated::{Markers, SpliceError};
pub use hash::{HashAlgorithm, Hasher};
pub use manifest::{load_manifest, ManifestError, PortManifest, SourceTarget};
pub use options::{BuildOption, OptionKind, OptionSet};
pub use sources::{port_target, PortReport, SourceKind, SourceMap, SourceParser, SourcesError};
pub use testdata::{TestDataError, TestDataReport};
