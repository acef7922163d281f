//! Assertion helpers with descriptive failure messages.

use std::path::Path;

/// Names of leftover deployment workspaces or archive directories under `dir`
pub fn leftover_workspaces(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .filter(|name| {
                    name.starts_with("octopress_deployment") || name.starts_with("octoship-archive")
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Assert that stdout or stderr contains the expected text.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "site build failed");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $expected:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($expected),
            "Expected output to contain '{}', but it didn't.\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $expected,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that no deployment workspace survived the run.
#[macro_export]
macro_rules! assert_no_workspace_left {
    ($env:expr) => {
        let leftovers = $crate::common::leftover_workspaces($env.tmp_dir.path());
        assert!(
            leftovers.is_empty(),
            "Expected every workspace to be removed, found: {:?}",
            leftovers
        );
    };
}
