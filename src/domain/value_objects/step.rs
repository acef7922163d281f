//! Pipeline steps of a deployment, in execution order.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Workspace,
    Extract,
    PrepareDependencies,
    Build,
    Sync,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Workspace,
        Step::Extract,
        Step::PrepareDependencies,
        Step::Build,
        Step::Sync,
    ];

    /// Short label used in console output and JSON events
    pub fn label(&self) -> &'static str {
        match self {
            Step::Workspace => "workspace",
            Step::Extract => "extract",
            Step::PrepareDependencies => "prepare_dependencies",
            Step::Build => "build",
            Step::Sync => "sync",
        }
    }

    /// Human description for the console
    pub fn describe(&self) -> &'static str {
        match self {
            Step::Workspace => "Creating workspace",
            Step::Extract => "Extracting revision",
            Step::PrepareDependencies => "Copying dependency snapshot",
            Step::Build => "Building site",
            Step::Sync => "Syncing to bucket",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
