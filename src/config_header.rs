// src/config_header.rs

//! Translation of the generated `vpx_config.h`
//!
//! The configure step writes its decisions as preprocessor defines:
//!
//! ```c
//! #define VPX_ARCH_X86_64 1
//! #define HAVE_SSE2 1
//! #define CONFIG_VP9_HIGHBITDEPTH 0
//! #define VERSION_STRING " v1.14.0"
//! ```
//!
//! The same switches are needed by the Makefile-based helper scripts
//! (`config.mk`) and by the assembler sources (`vpx_config.asm`).

use clap::ValueEnum;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static SWITCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#define\s+((?:VPX_ARCH|HAVE|CONFIG)_[A-Z0-9_]+)\s+([01])").unwrap()
});
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^#define\s+(VERSION_STRING)\s+"(.+)""#).unwrap());

/// Assembler dialect of the generated config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AsmFormat {
    /// yasm/nasm `equ`
    Yasm,
    /// ARM assembler `EQU` with a trailing `END`
    #[default]
    Ads,
    /// GNU as `.equ`
    Gas,
}

/// Licence banner carried by every generated file
pub fn webm_license(prefix: &str, suffix: &str) -> Vec<String> {
    [
        " Copyright (c) 2011 The WebM project authors. All Rights Reserved.",
        " ",
        " Use of this source code is governed by a BSD-style license",
        " that can be found in the LICENSE file in the root of the source",
        " tree. An additional intellectual property rights grant can be found",
        " in the file PATENTS.  All contributing project authors may",
        " be found in the AUTHORS file in the root of the source tree.",
    ]
    .iter()
    .map(|text| format!("{}{}{}", prefix, text, suffix))
    .collect()
}

/// Collect every 0/1 switch; a repeated name keeps its first position
pub fn parse_switches(content: &str) -> IndexMap<String, String> {
    let mut switches = IndexMap::new();
    for line in content.lines() {
        if let Some(caps) = SWITCH_RE.captures(line) {
            switches.insert(caps[1].to_string(), caps[2].to_string());
        }
    }
    switches
}

/// `config.mk` assignments: `NAME=yes` for enabled switches plus the version
pub fn config_mk_assignments(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    for line in content.lines() {
        if let Some(caps) = SWITCH_RE.captures(line) {
            if &caps[2] == "1" {
                out.push(format!("{}=yes", &caps[1]));
            }
        } else if let Some(caps) = VERSION_RE.captures(line) {
            out.push(format!("{}={}", &caps[1], caps[2].trim()));
        }
    }
    out
}

/// Render `config.mk` from one or more headers
pub fn render_config_mk<'a, I>(headers: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = webm_license("##", "");
    for header in headers {
        lines.extend(config_mk_assignments(header));
    }
    lines.into_iter().map(|l| l + "\n").collect()
}

/// Render the assembler include for the given switches
pub fn render_config_asm(switches: &IndexMap<String, String>, format: AsmFormat) -> String {
    let directive = match format {
        AsmFormat::Yasm => "equ",
        AsmFormat::Ads => "EQU",
        AsmFormat::Gas => ".equ",
    };

    let mut out: String = switches
        .iter()
        .map(|(k, v)| format!("{} {} {}\n", k, directive, v))
        .collect();
    if format == AsmFormat::Ads {
        out.push_str("END\n");
    }
    out
}
