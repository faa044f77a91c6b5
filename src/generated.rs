// src/generated.rs

//! Machine-owned regions inside hand-written build files
//!
//! A generated block is delimited by two sentinel lines:
//!
//! ```text
//! project('libvpx', 'c')
//! #### --- GENERATED --- ####
//! ... regenerated on every run ...
//! #### --- END GENERATED --- ####
//! subdir('test')
//! ```
//!
//! Everything outside the sentinels belongs to the user and is copied
//! through byte-for-byte.

use thiserror::Error;

/// Tag used for the source lists in `<target>/meson.build`
pub const SOURCES_TAG: &str = "GENERATED";

/// Tag used for the option tables in `meson_options.txt` and `meson.build`
pub const OPTIONS_TAG: &str = "GENERATED EXTERN OPTIONS";

/// Errors that can occur while splicing a generated block
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("found '{open}' on line {line} but no matching '{close}'")]
    Unterminated {
        open: String,
        close: String,
        line: usize,
    },
}

/// Opening and closing sentinel lines of a generated block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub open: String,
    pub close: String,
}

impl Markers {
    /// Build the marker pair for a tag, e.g. `GENERATED` gives
    /// `#### --- GENERATED --- ####` / `#### --- END GENERATED --- ####`
    pub fn new(tag: &str) -> Self {
        Self {
            open: format!("#### --- {} --- ####", tag),
            close: format!("#### --- END {} --- ####", tag),
        }
    }

    pub fn sources() -> Self {
        Self::new(SOURCES_TAG)
    }

    pub fn options() -> Self {
        Self::new(OPTIONS_TAG)
    }
}

fn is_marker(line: &str, marker: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == marker
}

/// Replace the content between the markers of `existing` with `block`
///
/// Returns `Ok(None)` when `existing` has no opening marker, so the caller
/// can decide between regenerating the whole file and leaving it alone.
pub fn splice(
    existing: &str,
    markers: &Markers,
    block: &str,
) -> Result<Option<String>, SpliceError> {
    let lines: Vec<&str> = existing.split_inclusive('\n').collect();

    let Some(open_idx) = lines.iter().position(|l| is_marker(l, &markers.open)) else {
        return Ok(None);
    };

    let close_idx = lines[open_idx + 1..]
        .iter()
        .position(|l| is_marker(l, &markers.close))
        .map(|i| open_idx + 1 + i)
        .ok_or_else(|| SpliceError::Unterminated {
            open: markers.open.clone(),
            close: markers.close.clone(),
            line: open_idx + 1,
        })?;

    let mut out = String::with_capacity(existing.len() + block.len());
    for line in &lines[..=open_idx] {
        out.push_str(line);
    }
    out.push_str(block);
    for line in &lines[close_idx..] {
        out.push_str(line);
    }

    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_text() {
        let m = Markers::options();
        assert_eq!(m.open, "#### --- GENERATED EXTERN OPTIONS --- ####");
        assert_eq!(m.close, "#### --- END GENERATED EXTERN OPTIONS --- ####");
    }

    #[test]
    fn test_splice_replaces_only_inner_region() {
        let existing = "head\n#### --- GENERATED --- ####\nold\nstale\n#### --- END GENERATED --- ####\ntail\n";
        let out = splice(existing, &Markers::sources(), "new\n").unwrap().unwrap();
        assert_eq!(
            out,
            "head\n#### --- GENERATED --- ####\nnew\n#### --- END GENERATED --- ####\ntail\n"
        );
    }

    #[test]
    fn test_splice_without_marker() {
        assert_eq!(splice("just text\n", &Markers::sources(), "x\n").unwrap(), None);
    }

    #[test]
    fn test_splice_unterminated() {
        let existing = "a\n#### --- GENERATED --- ####\nb\n";
        let err = splice(existing, &Markers::sources(), "x\n").unwrap_err();
        assert!(matches!(err, SpliceError::Unterminated { line: 2, .. }));
    }

    #[test]
    fn test_splice_keeps_crlf_outside_block() {
        let existing = "a\r\n#### --- GENERATED --- ####\r\nold\r\n#### --- END GENERATED --- ####\r\nz\r\n";
        let out = splice(existing, &Markers::sources(), "new\n").unwrap().unwrap();
        assert!(out.starts_with("a\r\n#### --- GENERATED --- ####\r\nnew\n"));
        assert!(out.ends_with("#### --- END GENERATED --- ####\r\nz\r\n"));
    }

    #[test]
    fn test_marker_on_last_line_is_unterminated() {
        let err = splice("a\n#### --- GENERATED --- ####", &Markers::sources(), "x\n").unwrap_err();
        assert!(matches!(err, SpliceError::Unterminated { line: 2, .. }));
    }

    #[test]
    fn test_open_marker_must_be_whole_line() {
        let existing = "# see #### --- GENERATED --- #### below\n";
        assert_eq!(splice(existing, &Markers::sources(), "x\n").unwrap(), None);
    }
}
