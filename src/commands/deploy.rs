use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use octoship::config::Config;
use octoship::{BucketName, DeployOptions, Deployer, Revision, RevisionComparator, SystemCommandRunner};

use super::{event_sink, resolve_dir};
use crate::ui::context::UiContext;
use crate::ui::views::deploy::{render_deploy_header, render_deploy_summary, DeployHeader};

pub struct DeployArgs {
    pub bucket: String,
    pub revision: String,
    pub source_root: Option<PathBuf>,
    pub repo: Option<PathBuf>,
    pub require_fast_forward_from: Option<String>,
    pub dry_run: bool,
    pub yes: bool,
}

pub fn cmd_deploy(args: DeployArgs, config: &Config, cwd: &Path, ui: UiContext) -> Result<ExitCode> {
    let bucket = BucketName::parse(&args.bucket)?;
    let revision = Revision::parse(&args.revision)?;
    let marker = args
        .require_fast_forward_from
        .as_deref()
        .map(Revision::parse)
        .transpose()?;

    let repo_root = resolve_dir(cwd, args.repo);
    let source_root = match args.source_root {
        Some(dir) => cwd.join(dir),
        None => repo_root.clone(),
    };

    if !ui.json {
        print!(
            "{}",
            render_deploy_header(
                &DeployHeader {
                    bucket: bucket.as_str(),
                    revision: revision.as_str(),
                    repo_root: &repo_root,
                    source_root: &source_root,
                    fast_forward_from: marker.as_ref().map(Revision::as_str),
                    dry_run: args.dry_run,
                },
                ui.color,
                ui.unicode,
            )
        );
    }

    let events = event_sink("deploy", ui);
    let runner = SystemCommandRunner::new();

    if let Some(marker) = &marker {
        let comparator = RevisionComparator::new(runner, &config.tools.git, &repo_root)
            .with_events(events.clone());
        if !comparator.is_fast_forward(marker, &revision)? {
            bail!("'{revision}' is not a fast-forward of '{marker}', refusing to deploy");
        }
    }

    if !args.yes && !args.dry_run && ui.interactive {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Upload '{}' to {}?", revision, bucket.url()))
            .default(false)
            .interact()?;
        if !confirmed {
            bail!("deploy cancelled, nothing was uploaded");
        }
    }

    let options = DeployOptions::new(&repo_root)
        .with_source_root(source_root)
        .with_dry_run(args.dry_run)
        .with_stream_output(!ui.json);

    let report = Deployer::new(runner, config.clone(), options)
        .deploy_to_bucket_from_commit_with_events(&bucket, &revision, events)?;

    if !ui.json {
        println!();
        print!("{}", render_deploy_summary(&report, ui.color, ui.unicode));
    }

    Ok(ExitCode::SUCCESS)
}
