use octoship::{DeployError, HistoryQueryError, OctoshipError};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn deploy_error(err: &anyhow::Error) -> Option<&DeployError> {
    err.chain().find_map(|cause| {
        cause.downcast_ref::<DeployError>().or_else(|| {
            match cause.downcast_ref::<OctoshipError>() {
                Some(OctoshipError::Deploy(inner)) => Some(inner),
                _ => None,
            }
        })
    })
}

fn history_error(err: &anyhow::Error) -> Option<&HistoryQueryError> {
    err.chain().find_map(|cause| {
        cause.downcast_ref::<HistoryQueryError>().or_else(|| {
            match cause.downcast_ref::<OctoshipError>() {
                Some(OctoshipError::History(inner)) => Some(inner),
                _ => None,
            }
        })
    })
}

/// A next step for the user, where one is obvious from the error
pub fn fix_hint(err: &anyhow::Error) -> Option<String> {
    if let Some(deploy) = deploy_error(err) {
        return Some(match deploy {
            DeployError::Workspace(_) => {
                "Check that the temporary directory (TMPDIR) exists and is writable".to_string()
            }
            DeployError::Extraction { revision, .. } => {
                format!("Check that the revision exists: git rev-parse --verify {revision}")
            }
            DeployError::DependencyPrep { path, .. } => format!(
                "Install the bundle first (bundle install --path vendor/bundle), \
                 or point --source-root at a directory containing {}",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            ),
            DeployError::Build { .. } => {
                "Run the build in a checkout of the same revision to see the full output"
                    .to_string()
            }
            DeployError::Sync { .. } => {
                "Check the s3cmd credentials (s3cmd --configure) and that the bucket exists"
                    .to_string()
            }
        });
    }

    if let Some(history) = history_error(err) {
        return match history {
            HistoryQueryError::Spawn { .. } => {
                Some("Install git, or set OCTOSHIP_GIT to its location".to_string())
            }
            HistoryQueryError::Rejected { .. } => {
                Some("Check that both revisions exist in this repository".to_string())
            }
            HistoryQueryError::Unrelated { .. } => None,
        };
    }

    match err.downcast_ref::<OctoshipError>() {
        Some(OctoshipError::Config { .. }) => {
            Some("Fix the file, or remove it to use the built-in defaults".to_string())
        }
        Some(OctoshipError::InvalidBucket { .. }) => {
            Some("Bucket names are 3-63 lowercase letters, digits, dots or hyphens".to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("Error:").bold().render(supports_color),
        err
    );

    if let Some(hint) = fix_hint(err) {
        out.push_str(&format!(
            "  {} {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim("Fix:").render(supports_color),
            hint
        ));
    }
    out
}

/// NDJSON form of an error, for `--json`
pub fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let mut event = serde_json::json!({
        "event": "error",
        "message": err.to_string(),
    });

    if let Some(deploy) = deploy_error(err) {
        event["step"] = deploy.step().label().into();
    }
    if let Some(output) = history_error(err).and_then(HistoryQueryError::output) {
        event["output"] = output.into();
    }
    if let Some(hint) = fix_hint(err) {
        event["fix"] = hint.into();
    }
    event
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if json {
        let _ = crate::ui::json::emit(command, error_event(err));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
