// src/cli/mod.rs
//! CLI definitions for mesonport
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Porting commands, run by a maintainer in the libvpx tree:
//! - `sources` - Regenerate source tables from the `.mk` files
//! - `options` - Regenerate options from `configure --help` output
//! - `toggles` - Regenerate options from the configure toggle tables
//!
//! Build-time commands, invoked from `meson.build`:
//! - `exports` - Symbol export definition files
//! - `config-mk` / `config-asm` - Translate `vpx_config.h`
//! - `check-test-data` - Verify test vectors
//! - `build-options` - Print the recorded build options

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use mesonport::config_header::AsmFormat;
use mesonport::exports::ExportFormat;

#[derive(Parser)]
#[command(name = "mesonport")]
#[command(author = "mesonport contributors")]
#[command(version)]
#[command(about = "Keep a Meson build of libvpx in sync with its Makefiles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    // =========================================================================
    // Porting
    // =========================================================================
    /// Regenerate the source tables of each target's meson.build
    ///
    /// Targets come from --target/--makefile, from a porting manifest, or
    /// from the built-in libvpx layout, in that order of preference.
    Sources {
        /// Porting manifest (TOML)
        #[arg(short, long, conflicts_with = "target")]
        manifest: Option<PathBuf>,

        /// libvpx source root
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Single target directory, relative to the root
        #[arg(short, long, requires = "makefile")]
        target: Option<PathBuf>,

        /// Declaration file for --target (repeatable)
        #[arg(long, requires = "target")]
        makefile: Vec<PathBuf>,

        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Regenerate options from a saved `configure --help` listing
    Options {
        /// libvpx source root
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// File holding the `configure --help` output
        help_txt: PathBuf,
    },

    /// Regenerate options from the `${toggle_*}` tables of the configure scripts
    Toggles {
        /// libvpx source root
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Scripts to scan, relative to the root
        /// (default: build/make/configure.sh configure)
        scripts: Vec<PathBuf>,
    },

    // =========================================================================
    // Build-time tools
    // =========================================================================
    /// Generate a symbol export definition file
    Exports {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Definition file flavour
        #[arg(short, long, value_enum, default_value = "win")]
        format: ExportFormat,

        /// Prefix every symbol with an underscore
        #[arg(long)]
        underscore: bool,

        /// Export lists to read
        #[arg(required = true)]
        lists: Vec<PathBuf>,
    },

    /// Translate vpx_config.h into config.mk
    ConfigMk {
        /// File to write
        output: PathBuf,

        /// Config headers to read
        #[arg(required = true)]
        headers: Vec<PathBuf>,
    },

    /// Translate vpx_config.h into an assembler include
    ConfigAsm {
        /// Assembler dialect
        #[arg(short, long, value_enum, default_value = "ads")]
        format: AsmFormat,

        /// Config header to read
        header: PathBuf,

        /// File to write
        output: PathBuf,
    },

    /// Verify test vectors against a digest manifest
    CheckTestData {
        /// Directory the manifest paths are relative to
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Digest manifest, e.g. test/test-data.sha1
        manifest: PathBuf,
    },

    /// Print the build options recorded in the Meson log
    BuildOptions {
        /// Meson build directory
        #[arg(long, env = "MESON_BUILD_ROOT")]
        build_root: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
