// src/options/mod.rs

//! `configure` options to Meson `option()` declarations
//!
//! Two sources of options are understood:
//!
//! - the output of `./configure --help` ([`configure`])
//! - the `${toggle_*}` tables inside the configure scripts ([`toggles`])
//!
//! Both produce an [`OptionSet`] which is rendered into the
//! `GENERATED EXTERN OPTIONS` blocks of `meson_options.txt` and
//! `meson.build`.

pub mod configure;
pub mod toggles;

pub use configure::parse_configure_help;
pub use toggles::{parse_toggles, update_from_toggles};

use indexmap::IndexMap;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{read_file, write_file};
use crate::generated::{splice, Markers};
use crate::Result;

/// File holding the option declarations
pub const MESON_OPTIONS: &str = "meson_options.txt";

/// File holding the option bookkeeping lists
pub const MESON_BUILD: &str = "meson.build";

/// Options the Meson build handles with its own builtins
pub const MESON_HANDLED_OPTIONS: &[&str] = &[
    "help",
    "log",
    "target",
    "extra_cflags",
    "extra_cxxflags",
    "extra_warnings",
    "werror",
    "optimizations",
    "pic",
    "ccache",
    "debug",
    "gcov",
    "dependency_tracking",
    "libc",
    "as",
    "shared",
    "static",
    "small",
    "static_msvcrt",
    "debug_libs",
    "install_srcs",
];

/// Default state of a feature option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureDefault {
    /// No explicit value; Meson's default applies
    Unset,
    Enabled,
    Auto,
}

impl FeatureDefault {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Enabled => Some("enabled"),
            Self::Auto => Some("auto"),
        }
    }
}

/// The Meson type of an option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    Feature(FeatureDefault),
    Combo(Vec<String>),
    String(Option<String>),
}

/// A single option with its help text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOption {
    pub kind: OptionKind,
    pub description: String,
}

impl BuildOption {
    pub fn feature(default: FeatureDefault, description: impl Into<String>) -> Self {
        Self {
            kind: OptionKind::Feature(default),
            description: description.into(),
        }
    }

    pub fn is_feature(&self) -> bool {
        matches!(self.kind, OptionKind::Feature(_))
    }
}

/// Turn a configure name into a Meson option key
pub fn option_key(name: &str) -> String {
    name.to_lowercase().replace('-', "_")
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Options keyed by name, in first-seen order
///
/// Re-inserting a key replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: IndexMap<String, BuildOption>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, option: BuildOption) {
        self.options.insert(key.into(), option);
    }

    pub fn get(&self, key: &str) -> Option<&BuildOption> {
        self.options.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BuildOption)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drop the options Meson handles itself
    pub fn without_meson_builtins(mut self) -> Self {
        self.options
            .retain(|k, _| !MESON_HANDLED_OPTIONS.contains(&k.as_str()));
        self
    }

    /// Keys of the feature options
    pub fn feature_keys(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, o)| o.is_feature()).map(|(k, _)| k)
    }
}

/// Render one `option()` line per entry for `meson_options.txt`
pub fn render_option_declarations(options: &OptionSet) -> String {
    let mut out = String::new();

    for (key, option) in options.iter() {
        let description = quote(&option.description);
        let line = match &option.kind {
            OptionKind::Combo(choices) => {
                let choices: Vec<String> = choices.iter().map(|c| quote(c)).collect();
                format!(
                    "option('{}', type: 'combo', choices: [{}], description: {})",
                    key,
                    choices.join(", "),
                    description
                )
            }
            OptionKind::Feature(default) => {
                let value = default
                    .as_str()
                    .map(|v| format!("value: '{}', ", v))
                    .unwrap_or_default();
                format!(
                    "option('{}', type: 'feature', {}description: {})",
                    key, value, description
                )
            }
            OptionKind::String(value) => {
                let value = value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("value: {}, ", quote(v)))
                    .unwrap_or_default();
                format!(
                    "option('{}', type: 'string', {}description: {})",
                    key, value, description
                )
            }
        };
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Render the `IGNORE_MESON_BUILTINS` / `MESON_OPTIONS` lists for `meson.build`
pub fn render_option_lists(options: &OptionSet) -> String {
    let mut out = String::from("IGNORE_MESON_BUILTINS = [\n");
    for name in MESON_HANDLED_OPTIONS {
        out.push_str(&format!("\t'{}',\n", name));
    }
    out.push_str("]\n\nMESON_OPTIONS = [\n");
    for key in options.feature_keys() {
        out.push_str(&format!("\t'{}',\n", key));
    }
    out.push_str("]\n");
    out
}

/// Splice `block` into the options block of `path`
///
/// A file without the markers is left untouched. Returns whether the file
/// was rewritten.
pub fn update_generated_file(path: &Path, block: &str) -> Result<bool> {
    let existing = read_file(path)?;
    match splice(&existing, &Markers::options(), block)? {
        Some(content) => {
            write_file(path, &content)?;
            info!("Updated generated options in {}", path.display());
            Ok(true)
        }
        None => {
            warn!(
                "{} has no '{}' marker, leaving it unchanged",
                path.display(),
                Markers::options().open
            );
            Ok(false)
        }
    }
}

/// Write `configure --help` options into `meson_options.txt` and `meson.build`
pub fn update_from_configure_help(root: &Path, options: &OptionSet) -> Result<()> {
    update_generated_file(&root.join(MESON_OPTIONS), &render_option_declarations(options))?;
    update_generated_file(&root.join(MESON_BUILD), &render_option_lists(options))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionSet {
        let mut set = OptionSet::new();
        set.insert("vp8", BuildOption::feature(FeatureDefault::Enabled, "VP8 codec support"));
        set.insert(
            "cpu",
            BuildOption {
                kind: OptionKind::Combo(vec!["generic".into(), "native".into()]),
                description: "CPU to optimize for".into(),
            },
        );
        set.insert(
            "prefix",
            BuildOption {
                kind: OptionKind::String(None),
                description: "use PREFIX as the install prefix".into(),
            },
        );
        set.insert("unit_tests", BuildOption::feature(FeatureDefault::Unset, "unit tests"));
        set
    }

    #[test]
    fn test_render_declarations() {
        let out = render_option_declarations(&sample());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "option('vp8', type: 'feature', value: 'enabled', description: 'VP8 codec support')",
                "option('cpu', type: 'combo', choices: ['generic', 'native'], description: 'CPU to optimize for')",
                "option('prefix', type: 'string', description: 'use PREFIX as the install prefix')",
                "option('unit_tests', type: 'feature', description: 'unit tests')",
            ]
        );
    }

    #[test]
    fn test_render_lists() {
        let out = render_option_lists(&sample());
        assert!(out.starts_with("IGNORE_MESON_BUILTINS = [\n\t'help',\n"));
        assert!(out.ends_with("MESON_OPTIONS = [\n\t'vp8',\n\t'unit_tests',\n]\n"));
        assert!(out.contains("\t'install_srcs',\n]\n\nMESON_OPTIONS"));
    }

    #[test]
    fn test_description_quotes_escaped() {
        let mut set = OptionSet::new();
        set.insert("x", BuildOption::feature(FeatureDefault::Auto, "don't"));
        assert_eq!(
            render_option_declarations(&set),
            "option('x', type: 'feature', value: 'auto', description: 'don\\'t')\n"
        );
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut set = sample();
        set.insert("vp8", BuildOption::feature(FeatureDefault::Unset, "again"));
        assert_eq!(set.iter().next().unwrap().0, "vp8");
        assert_eq!(set.get("vp8").unwrap().description, "again");
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_without_meson_builtins() {
        let mut set = sample();
        set.insert("werror", BuildOption::feature(FeatureDefault::Unset, "treat warnings as errors"));
        set.insert("static", BuildOption::feature(FeatureDefault::Unset, "static libs"));
        let set = set.without_meson_builtins();
        assert!(!set.contains("werror"));
        assert!(!set.contains("static"));
        assert!(set.contains("vp8"));
    }

    #[test]
    fn test_option_key() {
        assert_eq!(option_key("Multi-Res-Encoding"), "multi_res_encoding");
    }
}
