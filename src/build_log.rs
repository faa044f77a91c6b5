// src/build_log.rs

//! Recovery of the build options recorded in the Meson log

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static OPTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Build Options:\s+(.+)$").unwrap());

/// Location of the configure log inside a build directory
pub fn meson_log_path(build_root: &Path) -> PathBuf {
    build_root.join("meson-logs").join("meson-log.txt")
}

/// Options from the last `Build Options` line of a Meson log
///
/// Only the last line mentioning `Build Options` is considered; it must
/// start with `Build Options:` to yield anything.
pub fn capture_build_options(log: &str) -> Option<String> {
    let last = log.lines().rfind(|line| line.contains("Build Options"))?;
    OPTIONS_RE
        .captures(last)
        .map(|caps| caps[1].trim_end().to_string())
}
