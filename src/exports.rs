// src/exports.rs

//! Symbol export definitions
//!
//! libvpx lists its public symbols in `exports_*` files:
//!
//! ```text
//! # encoder interface
//! text vpx_codec_enc_init_ver
//! data vpx_codec_vp8_cx_algo
//! ```
//!
//! These are translated into a Windows module definition file, a GNU
//! linker version script, or a macOS exported-symbols list.

use clap::ValueEnum;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(text|data)\s+(.+)$").unwrap());

/// Errors in an export list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("{origin}:{line}: Unknown line: {text}")]
    UnknownLine {
        origin: String,
        line: usize,
        text: String,
    },
}

/// Whether a symbol names a function or a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Text,
    Data,
}

/// A symbol to export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSymbol {
    pub name: String,
    pub kind: SymbolKind,
}

/// Output flavour of the definition file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Module definition (`.def`) for LINK.EXE
    #[default]
    Win,
    /// Linker version script
    Linux,
    /// `-exported_symbols_list` file
    Mac,
}

/// Parse an export list
///
/// Blank lines and `#` comments are ignored; anything else that is not a
/// `text`/`data` entry is an error. An entry may name several symbols.
pub fn parse_export_list(origin: &str, content: &str) -> Result<Vec<ExportedSymbol>, ExportError> {
    let mut symbols = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(caps) = SYMBOL_RE.captures(line) else {
            return Err(ExportError::UnknownLine {
                origin: origin.to_string(),
                line: idx + 1,
                text: line.to_string(),
            });
        };

        let kind = if &caps[1] == "data" {
            SymbolKind::Data
        } else {
            SymbolKind::Text
        };
        symbols.extend(
            caps[2]
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(|name| ExportedSymbol {
                    name: name.to_string(),
                    kind,
                }),
        );
    }

    Ok(symbols)
}

/// Render the definition file, one entry per line
pub fn render_exports(symbols: &[ExportedSymbol], format: ExportFormat, underscore: bool) -> Vec<String> {
    let prefix = if underscore { "_" } else { "" };
    let mut lines = Vec::with_capacity(symbols.len() + 2);

    match format {
        ExportFormat::Win => {
            lines.push("EXPORTS".to_string());
            for sym in symbols {
                let suffix = if sym.kind == SymbolKind::Data { "\tDATA" } else { "" };
                lines.push(format!("\t{}{}{}", prefix, sym.name, suffix));
            }
        }
        ExportFormat::Linux => {
            lines.push("{ global:".to_string());
            for sym in symbols {
                lines.push(format!("{}{};", prefix, sym.name));
            }
            lines.push("local: *; };".to_string());
        }
        ExportFormat::Mac => {
            for sym in symbols {
                lines.push(format!("{}{}", prefix, sym.name));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = "\
# encoder
text vpx_codec_enc_init_ver

data vpx_codec_vp8_cx_algo
text vpx_a, vpx_b
";

    #[test]
    fn test_parse_export_list() {
        let symbols = parse_export_list("exports_enc", LIST).unwrap();
        let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["vpx_codec_enc_init_ver", "vpx_codec_vp8_cx_algo", "vpx_a", "vpx_b"]);
        assert_eq!(symbols[1].kind, SymbolKind::Data);
        assert_eq!(symbols[3].kind, SymbolKind::Text);
    }

    #[test]
    fn test_unknown_line() {
        let err = parse_export_list("exports_dec", "text ok\nfunc bad\n").unwrap_err();
        assert_eq!(
            err,
            ExportError::UnknownLine {
                origin: "exports_dec".to_string(),
                line: 2,
                text: "func bad".to_string()
            }
        );
    }

    #[test]
    fn test_render_win() {
        let symbols = parse_export_list("x", LIST).unwrap();
        let lines = render_exports(&symbols[..2], ExportFormat::Win, false);
        assert_eq!(
            lines,
            vec!["EXPORTS", "\tvpx_codec_enc_init_ver", "\tvpx_codec_vp8_cx_algo\tDATA"]
        );
    }

    #[test]
    fn test_render_linux_with_underscore() {
        let symbols = parse_export_list("x", "text a\ndata b\n").unwrap();
        let lines = render_exports(&symbols, ExportFormat::Linux, true);
        assert_eq!(lines, vec!["{ global:", "_a;", "_b;", "local: *; };"]);
    }

    #[test]
    fn test_render_mac() {
        let symbols = parse_export_list("x", "text a\ndata b\n").unwrap();
        assert_eq!(render_exports(&symbols, ExportFormat::Mac, true), vec!["_a", "_b"]);
    }
}
