//! Octoship CLI - deploy a static site revision to S3
//!
//! Usage: octoship <COMMAND>
//!
//! Commands:
//!   deploy        Build a revision in a scratch workspace and sync it to a bucket
//!   distance      Count commits in NEWER that are not in OLDER
//!   fast-forward  Check whether NEWER contains all of OLDER
//!   version       Show version and tool configuration

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use octoship::config::Config;

use cli::{Cli, Commands};
use commands::deploy::DeployArgs;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.name();
    let json = cli.json;

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, command, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let ui = UiContext::new(cli.json, cli.verbose);
    let cwd = std::env::current_dir().context("could not determine the current directory")?;

    let loaded = Config::discover(cli.config.as_deref(), &cwd)?;
    ui::output::print_config_warnings(&loaded.warnings, &ui);
    let config = &loaded.config;

    match cli.command {
        Commands::Deploy {
            bucket,
            revision,
            source_root,
            repo,
            require_fast_forward_from,
            dry_run,
            yes,
        } => commands::deploy::cmd_deploy(
            DeployArgs {
                bucket,
                revision,
                source_root,
                repo,
                require_fast_forward_from,
                dry_run,
                yes,
            },
            config,
            &cwd,
            ui,
        ),
        Commands::Distance { older, newer, repo } => {
            commands::revision::cmd_distance(&older, &newer, repo, config, &cwd, ui)
        }
        Commands::FastForward { older, newer, repo } => {
            commands::revision::cmd_fast_forward(&older, &newer, repo, config, &cwd, ui)
        }
        Commands::Version => commands::version::cmd_version(&loaded, ui),
    }
}
