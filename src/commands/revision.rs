use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use octoship::config::Config;
use octoship::{Revision, RevisionComparator, SystemCommandRunner};

use super::{event_sink, resolve_dir};
use crate::ui::context::UiContext;
use crate::ui::json;

pub fn cmd_distance(
    older: &str,
    newer: &str,
    repo: Option<PathBuf>,
    config: &Config,
    cwd: &Path,
    ui: UiContext,
) -> Result<ExitCode> {
    let older = Revision::parse(older)?;
    let newer = Revision::parse(newer)?;

    let comparator = RevisionComparator::new(
        SystemCommandRunner::new(),
        &config.tools.git,
        resolve_dir(cwd, repo),
    )
    .with_events(event_sink("distance", ui));

    let distance = comparator.distance_between(&older, &newer)?;

    if ui.json {
        json::emit(
            "distance",
            serde_json::json!({
                "event": "distance",
                "older": older.as_str(),
                "newer": newer.as_str(),
                "distance": distance,
            }),
        )?;
    } else {
        println!("{distance}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Exit status carries the answer: 0 for a fast-forward, 1 otherwise
pub fn cmd_fast_forward(
    older: &str,
    newer: &str,
    repo: Option<PathBuf>,
    config: &Config,
    cwd: &Path,
    ui: UiContext,
) -> Result<ExitCode> {
    let older = Revision::parse(older)?;
    let newer = Revision::parse(newer)?;

    let comparator = RevisionComparator::new(
        SystemCommandRunner::new(),
        &config.tools.git,
        resolve_dir(cwd, repo),
    )
    .with_events(event_sink("fast-forward", ui));

    let fast_forward = comparator.is_fast_forward(&older, &newer)?;

    if ui.json {
        json::emit(
            "fast-forward",
            serde_json::json!({
                "event": "fast_forward",
                "older": older.as_str(),
                "newer": newer.as_str(),
                "fast_forward": fast_forward,
            }),
        )?;
    } else {
        println!("{}", if fast_forward { "yes" } else { "no" });
    }

    Ok(if fast_forward {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
