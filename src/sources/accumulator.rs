// src/sources/accumulator.rs

//! Nested source mapping: kind -> component -> label -> files

use std::collections::BTreeMap;

use super::classifier::SourceKind;

/// Files of one component, grouped by feature label (`""` = always built)
pub type LabelMap = BTreeMap<String, Vec<String>>;

/// Accumulated source lists for one Meson target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap {
    kinds: BTreeMap<SourceKind, BTreeMap<String, LabelMap>>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append files to `[kind][component][label]`
    ///
    /// Encounter order is kept; a file already listed under the same
    /// triple is not added again. Returns the number of new entries.
    pub fn merge<I>(&mut self, kind: SourceKind, component: &str, label: &str, files: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let list = self
            .kinds
            .entry(kind)
            .or_default()
            .entry(component.to_string())
            .or_default()
            .entry(label.to_string())
            .or_default();

        let before = list.len();
        for file in files {
            if !list.contains(&file) {
                list.push(file);
            }
        }
        list.len() - before
    }

    pub fn get(&self, kind: SourceKind, component: &str, label: &str) -> Option<&[String]> {
        self.kinds
            .get(&kind)?
            .get(component)?
            .get(label)
            .map(|v| v.as_slice())
    }

    /// Components declared with files of `kind`, sorted by name
    pub fn components(&self, kind: SourceKind) -> impl Iterator<Item = (&str, &LabelMap)> {
        self.kinds
            .get(&kind)
            .into_iter()
            .flat_map(|c| c.iter().map(|(name, labels)| (name.as_str(), labels)))
    }

    /// Total number of file entries
    pub fn len(&self) -> usize {
        self.kinds
            .values()
            .flat_map(|c| c.values())
            .flat_map(|l| l.values())
            .map(|f| f.len())
            .sum()
    }

    /// Number of file entries without build variables, i.e. those emitted
    pub fn literal_len(&self) -> usize {
        self.kinds
            .values()
            .flat_map(|c| c.values())
            .flat_map(|l| l.values())
            .flatten()
            .filter(|f| !f.contains('$'))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
