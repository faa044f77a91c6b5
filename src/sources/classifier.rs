// src/sources/classifier.rs

//! Classification of Makefile source-list declarations
//!
//! The legacy build lists its sources with conditional appends:
//!
//! ```text
//! VP8_COMMON_SRCS-yes += common/alloccommon.c
//! VP8_COMMON_SRCS-$(HAVE_SSE2) += common/x86/idct_blk_sse2.c
//! VP8_COMMON_SRCS-yes += common/x86/loopfilter_x86$(ASM)
//! VPX_DSP_SRCS-$(CONFIG_VP9) += vp9_a.c \
//!                                vp9_b.c
//! ```
//!
//! Each line is matched against an ordered table of rules; the first match
//! wins. Lines that match no rule are not declarations and are ignored.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Semantic kind of a declared file, inferred from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceKind {
    /// C/C++ translation units (and `$(ASM)` sources, which build like code)
    Code,
    /// Headers
    Header,
    /// Assembly with a literal extension
    Asm,
    /// Anything else: tables, scripts, test vectors
    Data,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Header => "header",
            Self::Asm => "asm",
            Self::Data => "data",
        }
    }

    /// Map a file extension to a kind
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "c" | "cc" | "cpp" | "cxx" => Self::Code,
            "h" | "hpp" => Self::Header,
            "asm" | "s" | "S" => Self::Asm,
            _ => Self::Data,
        }
    }

    /// Infer the kind from a path; `None` when it has no extension
    pub fn from_path(path: &str) -> Option<Self> {
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .map(Self::from_extension)
    }

    /// Prefix inserted into the Meson variable names for this kind
    pub fn variable_prefix(&self) -> &'static str {
        match self {
            Self::Code => "",
            Self::Header => "headers_",
            Self::Asm => "asm_",
            Self::Data => "data_",
        }
    }

    pub fn all() -> &'static [SourceKind] {
        &[Self::Code, Self::Header, Self::Asm, Self::Data]
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The grammar variant a declaration line matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    /// `COMP-yes += a.c` or `COMP += a.c`
    Unconditional,
    /// `COMP-$(HAVE_X) += a.c`
    Conditional,
    /// `COMP-yes += a$(ASM)`
    UnconditionalAsm,
    /// `COMP-$(HAVE_X) += a$(ASM)`
    ConditionalAsm,
}

impl LineRule {
    pub fn is_conditional(&self) -> bool {
        matches!(self, Self::Conditional | Self::ConditionalAsm)
    }

    pub fn is_asm(&self) -> bool {
        matches!(self, Self::UnconditionalAsm | Self::ConditionalAsm)
    }
}

/// A classified declaration line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub rule: LineRule,
    /// Component name (`VP8_COMMON_SRCS` -> `vp8_common`)
    pub component: String,
    /// Lower-cased feature label; empty for unconditional lines
    pub label: String,
    /// Kind forced by the rule (`$(ASM)` lines build as code)
    pub kind: Option<SourceKind>,
    /// File tokens on this line, with `$(ASM)` already rewritten
    pub files: Vec<String>,
    /// The line ends with a continuation backslash
    pub continued: bool,
}

// The first token must carry an extension (`exports_enc` or
// `$(VP8_COMMON_SRCS-yes)` are not source lists) and no token may end in
// `)` or `\`, so `foo$(ASM)` never matches the plain rules.
const PLAIN_FILES: &str =
    r"(?P<files>(?:\S*\.[A-Za-z0-9]+(?:\s+\S*[^\s\\)])*)?)\s*(?P<cont>\\)?\s*$";
const ASM_FILES: &str = r"(?P<files>.*\$\(ASM\))\s*(?P<cont>\\)?\s*$";
const UNCONDITIONAL_HEAD: &str = r"^(?P<component>[A-Z0-9_]+)(?:-yes)?\s*\+=\s*";
const CONDITIONAL_HEAD: &str =
    r"^(?P<component>[A-Z0-9_]+)-.*(?:HAVE_|CONFIG_)(?P<label>[A-Z0-9_]+).*?\+=\s*";

static RULES: LazyLock<Vec<(LineRule, Regex)>> = LazyLock::new(|| {
    let rule = |head: &str, files: &str| Regex::new(&format!("{}{}", head, files)).unwrap();
    vec![
        (LineRule::Unconditional, rule(UNCONDITIONAL_HEAD, PLAIN_FILES)),
        (LineRule::Conditional, rule(CONDITIONAL_HEAD, PLAIN_FILES)),
        (LineRule::UnconditionalAsm, rule(UNCONDITIONAL_HEAD, ASM_FILES)),
        (LineRule::ConditionalAsm, rule(CONDITIONAL_HEAD, ASM_FILES)),
    ]
});

/// Remove a `#` comment and surrounding whitespace
pub fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or_default().trim()
}

/// Turn the legacy variable name into a component name
pub fn component_name(variable: &str) -> String {
    variable.replace("_SRCS", "").to_lowercase()
}

/// Does this token reference a build variable?
pub fn is_variable(token: &str) -> bool {
    token.starts_with('$')
}

fn rewrite_asm(token: &str) -> String {
    match token.strip_suffix("$(ASM)") {
        Some(stem) => format!("{}.asm", stem),
        None => token.to_string(),
    }
}

/// Split a whitespace-separated file list, handling a trailing `\`
///
/// Returns the tokens and whether the list continues on the next line.
pub fn split_file_list(fragment: &str) -> (Vec<String>, bool) {
    let trimmed = fragment.trim_end();
    let (body, continued) = match trimmed.strip_suffix('\\') {
        Some(body) => (body, true),
        None => (trimmed, false),
    };
    let files = body.split_whitespace().map(rewrite_asm).collect();
    (files, continued)
}

/// Classify one comment-stripped line
pub fn classify_line(line: &str) -> Option<Declaration> {
    for (rule, re) in RULES.iter() {
        let Some(caps) = re.captures(line) else {
            continue;
        };

        let component = component_name(&caps["component"]);
        let label = caps
            .name("label")
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        let (files, _) = split_file_list(&caps["files"]);
        let continued = caps.name("cont").is_some();
        let kind = if rule.is_asm() {
            Some(SourceKind::Code)
        } else {
            None
        };

        return Some(Declaration {
            rule: *rule,
            component,
            label,
            kind,
            files,
            continued,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconditional_yes() {
        let d = classify_line("FOO_SRCS-yes += foo/bar.c").unwrap();
        assert_eq!(d.rule, LineRule::Unconditional);
        assert_eq!(d.component, "foo");
        assert_eq!(d.label, "");
        assert_eq!(d.files, vec!["foo/bar.c"]);
        assert!(!d.continued);
        assert_eq!(d.kind, None);
    }

    #[test]
    fn test_unconditional_without_suffix() {
        let d = classify_line("VP8_COMMON_SRCS += common/blockd.h").unwrap();
        assert_eq!(d.rule, LineRule::Unconditional);
        assert_eq!(d.component, "vp8_common");
        assert_eq!(d.files, vec!["common/blockd.h"]);
    }

    #[test]
    fn test_conditional_label_from_marker() {
        let d = classify_line("FOO_SRCS-$(CONFIG_BAR) += foo/baz.c").unwrap();
        assert_eq!(d.rule, LineRule::Conditional);
        assert_eq!(d.component, "foo");
        assert_eq!(d.label, "bar");

        let d = classify_line("VP9_CX_SRCS-$(HAVE_SSE4_1) += encoder/x86/temporal_sse4.c").unwrap();
        assert_eq!(d.component, "vp9_cx");
        assert_eq!(d.label, "sse4_1");
    }

    #[test]
    fn test_conditional_uses_last_marker() {
        let d = classify_line("DSP_SRCS-$(CONFIG_VP9)$(HAVE_AVX2) += x86/a_avx2.c").unwrap();
        assert_eq!(d.label, "avx2");
    }

    #[test]
    fn test_asm_rewrite() {
        let d = classify_line("VP8_COMMON_SRCS-yes += common/x86/loopfilter_x86$(ASM)").unwrap();
        assert_eq!(d.rule, LineRule::UnconditionalAsm);
        assert_eq!(d.kind, Some(SourceKind::Code));
        assert_eq!(d.files, vec!["common/x86/loopfilter_x86.asm"]);

        let d = classify_line("DSP_SRCS-$(HAVE_SSE2) += x86/a$(ASM) x86/b$(ASM)").unwrap();
        assert_eq!(d.rule, LineRule::ConditionalAsm);
        assert_eq!(d.label, "sse2");
        assert_eq!(d.files, vec!["x86/a.asm", "x86/b.asm"]);
    }

    #[test]
    fn test_continuation() {
        let d = classify_line(r"FOO_SRCS-yes += a.c b.c \").unwrap();
        assert!(d.continued);
        assert_eq!(d.files, vec!["a.c", "b.c"]);

        let d = classify_line(r"FOO_SRCS-yes += a.c\").unwrap();
        assert!(d.continued);
        assert_eq!(d.files, vec!["a.c"]);

        let d = classify_line(r"FOO_SRCS-yes += \").unwrap();
        assert!(d.continued);
        assert!(d.files.is_empty());
    }

    #[test]
    fn test_not_declarations() {
        assert_eq!(classify_line(""), None);
        assert_eq!(classify_line("include $(SRC_PATH_BARE)/foo.mk"), None);
        assert_eq!(classify_line("FOO_SRCS-no += a.c"), None);
        assert_eq!(classify_line("FOO_SRCS-$(ARCH_X86) += a.c"), None);
        assert_eq!(classify_line("FOO_SRCS-yes := a.c"), None);
    }

    #[test]
    fn test_lists_without_extension_are_not_declarations() {
        assert_eq!(classify_line("VP8_CX_EXPORTS += exports_enc"), None);
        assert_eq!(classify_line("VP9_DX_EXPORTS += exports_dec"), None);
        assert_eq!(classify_line("VP8_CX_SRCS-yes += $(VP8_COMMON_SRCS-yes)"), None);
        assert_eq!(classify_line("VP8_CX_SRCS_REMOVE-yes += encoder/dir.v2/file"), None);
    }

    #[test]
    fn test_arch_conditions_are_not_declarations() {
        assert_eq!(classify_line("VP8_COMMON_SRCS-$(ARCH_X86)$(ARCH_X86_64) += common/x86/filter_x86.c"), None);
    }

    #[test]
    fn test_variable_prefixed_file_is_declaration() {
        let d = classify_line("FOO_SRCS-yes += $(BUILD_PFX)gen_rtcd.c").unwrap();
        assert_eq!(d.rule, LineRule::Unconditional);
        assert_eq!(d.files, vec!["$(BUILD_PFX)gen_rtcd.c"]);
    }

    #[test]
    fn test_later_tokens_need_no_extension() {
        let d = classify_line("FOO_SRCS-$(CONFIG_BAR) += a.c README").unwrap();
        assert_eq!(d.files, vec!["a.c", "README"]);
    }

    #[test]
    fn test_split_file_list() {
        assert_eq!(
            split_file_list("  a.c   b$(ASM) \\"),
            (vec!["a.c".to_string(), "b.asm".to_string()], true)
        );
        assert_eq!(split_file_list("x.h"), (vec!["x.h".to_string()], false));
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("  FOO-yes += a.c # trailing  "), "FOO-yes += a.c");
        assert_eq!(strip_comment("# whole line"), "");
    }

    #[test]
    fn test_kind_from_path() {
        assert_eq!(SourceKind::from_path("a/b.c"), Some(SourceKind::Code));
        assert_eq!(SourceKind::from_path("a/b.cc"), Some(SourceKind::Code));
        assert_eq!(SourceKind::from_path("a/b.h"), Some(SourceKind::Header));
        assert_eq!(SourceKind::from_path("a/b.S"), Some(SourceKind::Asm));
        assert_eq!(SourceKind::from_path("a/rtcd_defs.pl"), Some(SourceKind::Data));
        assert_eq!(SourceKind::from_path("a/noext"), None);
    }
}
