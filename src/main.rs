// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries generated output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sources {
            manifest,
            root,
            target,
            makefile,
            dry_run,
        }) => commands::cmd_sources(
            manifest.as_deref(),
            &root,
            target.as_deref(),
            &makefile,
            dry_run,
        ),
        Some(Commands::Options { root, help_txt }) => commands::cmd_options(&root, &help_txt),
        Some(Commands::Toggles { root, scripts }) => commands::cmd_toggles(&root, &scripts),
        Some(Commands::Exports {
            out,
            format,
            underscore,
            lists,
        }) => commands::cmd_exports(out.as_deref(), format, underscore, &lists),
        Some(Commands::ConfigMk { output, headers }) => commands::cmd_config_mk(&output, &headers),
        Some(Commands::ConfigAsm {
            format,
            header,
            output,
        }) => commands::cmd_config_asm(format, &header, &output),
        Some(Commands::CheckTestData { root, manifest }) => {
            commands::cmd_check_test_data(&root, &manifest)
        }
        Some(Commands::BuildOptions { build_root }) => commands::cmd_build_options(&build_root),
        Some(Commands::Completions { shell }) => commands::cmd_completions(shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
