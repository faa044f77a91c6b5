// src/sources/emitter.rs

//! Meson rendering of an accumulated source map

use tracing::warn;

use super::accumulator::SourceMap;
use super::classifier::SourceKind;
use super::resolver::SkipSet;

/// Keep only paths Meson can use literally
fn literal_sources(sources: &[String]) -> Vec<&str> {
    sources
        .iter()
        .map(|s| s.as_str())
        .filter(|s| {
            if s.contains('$') {
                warn!("Skipping unresolved source {}", s);
                false
            } else {
                true
            }
        })
        .collect()
}

/// Opening and closing text of a list of the given kind
///
/// Data files may not exist when Meson configures, and `files()` rejects
/// missing paths, so they are kept as plain string arrays.
fn list_delimiters(kind: SourceKind) -> (&'static str, &'static str) {
    match kind {
        SourceKind::Data => ("[", "]"),
        _ => ("files(", ")"),
    }
}

/// Render the generated block for a target's `meson.build`
///
/// For every kind and component this writes a list of the unconditional
/// sources (when there are any) followed by a dictionary of the optional
/// ones keyed by label. Skipped labels are commented out.
pub fn render(map: &SourceMap, skipped: &SkipSet) -> String {
    let mut out = String::new();

    for kind in SourceKind::all() {
        let prefix = kind.variable_prefix();
        let (open, close) = list_delimiters(*kind);

        for (component, labels) in map.components(*kind) {
            if let Some(defaults) = labels.get("").filter(|d| !d.is_empty()) {
                out.push_str(&format!("{}_{}sources = {}\n", component, prefix, open));
                for source in literal_sources(defaults) {
                    out.push_str(&format!("\t'{}',\n", source));
                }
                out.push_str(&format!("{}\n\n", close));
            }

            out.push_str(&format!("{}_{}optional_sources = {{\n", component, prefix));
            for (label, sources) in labels.iter().filter(|(l, _)| !l.is_empty()) {
                let comment = if skipped.contains(label) { "# " } else { "" };
                let sources = literal_sources(sources);

                out.push_str(&format!("\t{}'{}' : {}\n", comment, label, open));
                for (i, source) in sources.iter().enumerate() {
                    let comma = if i + 1 < sources.len() { "," } else { "" };
                    out.push_str(&format!("\t{}\t'{}'{}\n", comment, source, comma));
                }
                out.push_str(&format!("\t{}{},\n", comment, close));
            }
            out.push_str("}\n\n");
        }
    }

    out
}
