// src/options/configure.rs

//! Parser for `./configure --help` listings

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use super::{option_key, BuildOption, FeatureDefault, OptionKind, OptionSet};

static BOOLEAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--(enable|disable)-(\S+)\s+(.+)").unwrap());
static COMBO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--([a-z0-9_\-]+)=\{?([A-Za-z]+\|[A-Za-z|]+)\}?\s+(.+)$").unwrap()
});
static CODEC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9_\-]+):\s+(encoder|decoder)(?:\s+)?(encoder|decoder)?$").unwrap()
});
static STOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--([a-z0-9_\-]+)(?:=[A-Za-z]+)?\s+(.+)$").unwrap());
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".+<[a-z]+>").unwrap());

fn insert_codec(options: &mut OptionSet, codec: &str, first: &str, second: Option<&str>) {
    let upper = codec.to_uppercase();
    let feature = |description: String| BuildOption::feature(FeatureDefault::Unset, description);

    options.insert(
        option_key(&format!("{}_{}", codec, first)),
        feature(format!("Enable the {} {} only", upper, first)),
    );

    match second {
        Some(second) => {
            options.insert(
                option_key(&format!("{}_{}", codec, second)),
                feature(format!("Enable the {} {} only", upper, second)),
            );
            options.insert(option_key(codec), feature(format!("Enable the {} codec", upper)));
        }
        None => {
            options.insert(option_key(codec), feature(format!("Enable the {} {}", upper, first)));
        }
    }
}

/// Parse the lines of a `configure --help` listing
///
/// Recognised forms, first match wins:
///
/// ```text
/// --disable-vp8            VP8 codec support          feature, enabled
/// --enable-shared          shared library support     feature
/// --cpu={generic|native}   CPU to optimize for        combo
///   vp8:  encoder decoder                             per-codec features
/// --prefix=PREFIX          install prefix             string
/// ```
///
/// A listed `--disable-x` means `x` is on by default.
pub fn parse_configure_help<'a, I>(lines: I) -> OptionSet
where
    I: IntoIterator<Item = &'a str>,
{
    let mut options = OptionSet::new();

    for line in lines {
        let line = line.trim();

        if let Some(caps) = BOOLEAN_RE.captures(line) {
            let default = if &caps[1] == "disable" {
                FeatureDefault::Enabled
            } else {
                FeatureDefault::Unset
            };
            options.insert(
                option_key(&caps[2]),
                BuildOption::feature(default, caps[3].trim()),
            );
        } else if let Some(caps) = COMBO_RE.captures(line) {
            options.insert(
                option_key(&caps[1]),
                BuildOption {
                    kind: OptionKind::Combo(caps[2].split('|').map(String::from).collect()),
                    description: caps[3].to_string(),
                },
            );
        } else if let Some(caps) = CODEC_RE.captures(line) {
            insert_codec(
                &mut options,
                &caps[1],
                caps[2].trim(),
                caps.get(3).map(|m| m.as_str().trim()),
            );
        } else if let Some(caps) = STOCK_RE.captures(line) {
            options.insert(
                option_key(&caps[1]),
                BuildOption {
                    kind: OptionKind::String(None),
                    description: caps[2].to_string(),
                },
            );
        } else if line.starts_with("--") && !PLACEHOLDER_RE.is_match(line) {
            warn!("Unhandled option: {}", line);
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELP: &str = "\
Usage: configure [options]
Options:

Build options:
  --help                      print this message
  --log=yes|no|FILE           file configure log is written to [config.log]
  --target=TARGET             target platform tuple [generic-gnu]
  --enable-werror             treat warnings as errors
  --disable-optimizations     turn on/off compiler optimization flags

Codecs:
  Codecs can be selectively enabled or disabled individually, or by family:
      --disable-<codec>
  is equivalent to:
      --disable-<codec>-encoder
      --disable-<codec>-decoder

  Codecs available in this distribution:
    vp8:    encoder decoder
    vp9:    encoder decoder

Advanced options:
  --disable-vp8                   VP8 codec support
  --enable-multi-res-encoding     enable multiple-resolution encoding
  --size-limit=WxH                max size to allow in the decoder
  --as={yasm|nasm|auto}           use specified assembler [auto, yasm preferred]
";

    #[test]
    fn test_boolean_options() {
        let set = parse_configure_help(HELP.lines());

        let werror = set.get("werror").unwrap();
        assert_eq!(werror.kind, OptionKind::Feature(FeatureDefault::Unset));
        assert_eq!(werror.description, "treat warnings as errors");

        let opt = set.get("optimizations").unwrap();
        assert_eq!(opt.kind, OptionKind::Feature(FeatureDefault::Enabled));

        assert!(set.contains("multi_res_encoding"));
    }

    #[test]
    fn test_codec_options() {
        let set = parse_configure_help(HELP.lines());

        assert_eq!(set.get("vp9_encoder").unwrap().description, "Enable the VP9 encoder only");
        assert_eq!(set.get("vp9_decoder").unwrap().description, "Enable the VP9 decoder only");
        assert_eq!(set.get("vp9").unwrap().description, "Enable the VP9 codec");
        // the later --disable-vp8 overrides the codec entry
        assert_eq!(set.get("vp8").unwrap().description, "VP8 codec support");
        assert_eq!(set.get("vp8").unwrap().kind, OptionKind::Feature(FeatureDefault::Enabled));
    }

    #[test]
    fn test_single_role_codec() {
        let set = parse_configure_help(["    vp10:    decoder"]);
        assert_eq!(set.get("vp10_decoder").unwrap().description, "Enable the VP10 decoder only");
        assert_eq!(set.get("vp10").unwrap().description, "Enable the VP10 decoder");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_combo_and_string_options() {
        let set = parse_configure_help(HELP.lines());

        assert_eq!(
            set.get("as").unwrap().kind,
            OptionKind::Combo(vec!["yasm".into(), "nasm".into(), "auto".into()])
        );
        assert_eq!(set.get("size_limit").unwrap().kind, OptionKind::String(None));
        assert_eq!(set.get("help").unwrap().kind, OptionKind::String(None));
        assert_eq!(set.get("target").unwrap().kind, OptionKind::String(None));
    }

    #[test]
    fn test_placeholder_lines_not_options() {
        let set = parse_configure_help(HELP.lines());
        assert!(!set.contains("<codec>"));
        assert!(set.iter().all(|(k, _)| !k.contains('<')));
    }

    #[test]
    fn test_order_is_first_seen() {
        let set = parse_configure_help(HELP.lines());
        let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(&keys[..3], &["help", "log", "target"]);
        let vp8 = keys.iter().position(|k| *k == "vp8").unwrap();
        let vp9 = keys.iter().position(|k| *k == "vp9").unwrap();
        assert!(vp8 < vp9);
    }
}
