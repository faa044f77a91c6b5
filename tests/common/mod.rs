// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `files` (path, content) under `root`, creating directories.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

pub const VP8_COMMON_MK: &str = "\
## Copyright (c) 2010 The WebM project authors.
VP8_COMMON_SRCS-yes += vp8_common.mk
VP8_COMMON_SRCS-yes += common/alloccommon.c
VP8_COMMON_SRCS-yes += common/alloccommon.h

# x86
VP8_COMMON_SRCS-$(HAVE_SSE2) += common/x86/idct_sse2.c
VP8_COMMON_SRCS-$(HAVE_SSE2) += common/x86/loop$(ASM)

# arm, not present in this tree
VP8_COMMON_SRCS-$(HAVE_NEON) += common/arm/neon/idct_neon.c
";

pub const VP8_MESON_BUILD: &str = "\
vp8_deps = []
#### --- GENERATED --- ####
stale = true
#### --- END GENERATED --- ####
vp8_lib = static_library('vp8', vp8_common_sources)
";

/// The block expected for [`VP8_COMMON_MK`] in the fixture tree.
pub const VP8_EXPECTED_BLOCK: &str = "\
vp8_common_sources = files(
\t'common/alloccommon.c',
)

vp8_common_optional_sources = {
\t# 'neon' : files(
\t# ),
\t'sse2' : files(
\t\t'common/x86/idct_sse2.c',
\t\t'common/x86/loop.asm'
\t),
}

vp8_common_headers_sources = files(
\t'common/alloccommon.h',
)

vp8_common_headers_optional_sources = {
}

vp8_common_data_sources = [
\t'vp8_common.mk',
]

vp8_common_data_optional_sources = {
}

";

/// A libvpx-like tree with one `vp8` target.
///
/// Returns the TempDir - keep it alive to prevent cleanup.
pub fn libvpx_fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_tree(
        dir.path(),
        &[
            ("vp8/vp8_common.mk", VP8_COMMON_MK),
            ("vp8/common/alloccommon.c", ""),
            ("vp8/common/alloccommon.h", ""),
            ("vp8/common/x86/idct_sse2.c", ""),
            ("vp8/common/x86/loop.asm", ""),
            ("vp8/meson.build", VP8_MESON_BUILD),
        ],
    );
    dir
}
