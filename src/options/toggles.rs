// src/options/toggles.rs

//! Toggle tables embedded in the configure scripts
//!
//! `configure` and `build/make/configure.sh` print their help text from
//! tables such as:
//!
//! ```text
//! ${toggle_unit_tests}            unit tests
//! ${toggle_vp9_highbitdepth}      use VP9 high bit depth (10/12) profiles
//! ```
//!
//! Every entry becomes an `auto` feature option.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::{
    render_option_declarations, update_generated_file, BuildOption, FeatureDefault, OptionSet,
    MESON_OPTIONS,
};
use crate::error::read_file;
use crate::Result;

static TOGGLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+\$\{toggle_([a-z0-9_]+)\}\s+(.+)$").unwrap());

/// Scripts scanned when none are given, relative to the source root
pub fn default_scripts() -> Vec<PathBuf> {
    vec![PathBuf::from("build/make/configure.sh"), PathBuf::from("configure")]
}

/// Collect toggles from script content into `options`
pub fn parse_toggles(content: &str, options: &mut OptionSet) {
    for line in content.lines() {
        if let Some(caps) = TOGGLE_RE.captures(line) {
            options.insert(
                &caps[1],
                BuildOption::feature(FeatureDefault::Auto, caps[2].trim_end()),
            );
        }
    }
}

/// Collect toggles from every script, in order
pub fn parse_toggle_scripts(scripts: &[PathBuf]) -> Result<OptionSet> {
    let mut options = OptionSet::new();
    for script in scripts {
        parse_toggles(&read_file(script)?, &mut options);
    }
    Ok(options)
}

/// Resolve script paths against `root`
pub fn scripts_under(root: &Path, scripts: &[PathBuf]) -> Vec<PathBuf> {
    scripts.iter().map(|s| root.join(s)).collect()
}

/// Write toggle options into the generated block of `meson_options.txt`
pub fn update_from_toggles(root: &Path, options: &OptionSet) -> Result<bool> {
    update_generated_file(&root.join(MESON_OPTIONS), &render_option_declarations(options))
}
