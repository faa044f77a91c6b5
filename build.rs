// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: libvpx source root
fn root_arg() -> Arg {
    Arg::new("root")
        .short('r')
        .long("root")
        .value_name("DIR")
        .default_value(".")
        .help("libvpx source root")
}

fn build_cli() -> Command {
    Command::new("mesonport")
        .version(env!("CARGO_PKG_VERSION"))
        .author("mesonport contributors")
        .about("Keep a Meson build of libvpx in sync with its Makefiles")
        .subcommand_required(false)
        .subcommand(
            Command::new("sources")
                .about("Regenerate the source tables of each target's meson.build")
                .arg(Arg::new("manifest").short('m').long("manifest").help("Porting manifest (TOML)"))
                .arg(root_arg())
                .arg(Arg::new("target").short('t').long("target").help("Single target directory"))
                .arg(
                    Arg::new("makefile")
                        .long("makefile")
                        .action(ArgAction::Append)
                        .help("Declaration file for --target (repeatable)"),
                )
                .arg(
                    Arg::new("dry_run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Show what would change without writing"),
                ),
        )
        .subcommand(
            Command::new("options")
                .about("Regenerate options from a saved `configure --help` listing")
                .arg(root_arg())
                .arg(Arg::new("help_txt").required(true).help("configure --help output")),
        )
        .subcommand(
            Command::new("toggles")
                .about("Regenerate options from the configure toggle tables")
                .arg(root_arg())
                .arg(Arg::new("scripts").num_args(0..).help("Scripts to scan")),
        )
        .subcommand(
            Command::new("exports")
                .about("Generate a symbol export definition file")
                .arg(Arg::new("out").short('o').long("out").help("Output file (stdout if omitted)"))
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_parser(["win", "linux", "mac"])
                        .default_value("win")
                        .help("Definition file flavour"),
                )
                .arg(
                    Arg::new("underscore")
                        .long("underscore")
                        .action(ArgAction::SetTrue)
                        .help("Prefix every symbol with an underscore"),
                )
                .arg(Arg::new("lists").required(true).num_args(1..).help("Export lists")),
        )
        .subcommand(
            Command::new("config-mk")
                .about("Translate vpx_config.h into config.mk")
                .arg(Arg::new("output").required(true).help("File to write"))
                .arg(Arg::new("headers").required(true).num_args(1..).help("Config headers")),
        )
        .subcommand(
            Command::new("config-asm")
                .about("Translate vpx_config.h into an assembler include")
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_parser(["yasm", "ads", "gas"])
                        .default_value("ads")
                        .help("Assembler dialect"),
                )
                .arg(Arg::new("header").required(true).help("Config header"))
                .arg(Arg::new("output").required(true).help("File to write")),
        )
        .subcommand(
            Command::new("check-test-data")
                .about("Verify test vectors against a digest manifest")
                .arg(root_arg())
                .arg(Arg::new("manifest").required(true).help("Digest manifest")),
        )
        .subcommand(
            Command::new("build-options")
                .about("Print the build options recorded in the Meson log")
                .arg(
                    Arg::new("build_root")
                        .long("build-root")
                        .env("MESON_BUILD_ROOT")
                        .help("Meson build directory"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("mesonport.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
