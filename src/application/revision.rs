//! Revision Comparison
//!
//! Read-only queries over repository history. Nothing here mutates the
//! repository, and no result is cached.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec, Event, EventSink, NoopEventSink};
use crate::domain::value_objects::Revision;
use crate::error::HistoryQueryError;

/// Compares revisions of one repository
pub struct RevisionComparator<R: CommandRunner> {
    runner: R,
    git: String,
    repo_root: PathBuf,
    events: Arc<dyn EventSink>,
}

impl<R: CommandRunner> RevisionComparator<R> {
    pub fn new(runner: R, git: impl Into<String>, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            git: git.into(),
            repo_root: repo_root.into(),
            events: Arc::new(NoopEventSink),
        }
    }

    /// Send query failures (with the raw git output) to `events`
    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Number of commits reachable from `newer` but not from `older`
    pub fn distance_between(
        &self,
        older: &Revision,
        newer: &Revision,
    ) -> Result<usize, HistoryQueryError> {
        self.ensure_related(older, newer)?;

        let output = self.git(["rev-list", older.range_to(newer).as_str()])?;
        if !output.success {
            return Err(self.rejected(older, newer, &output));
        }

        Ok(count_revisions(&output.stdout))
    }

    /// True when `newer` contains every commit of `older`
    pub fn is_fast_forward(
        &self,
        older: &Revision,
        newer: &Revision,
    ) -> Result<bool, HistoryQueryError> {
        Ok(self.distance_between(newer, older)? == 0)
    }

    /// `git merge-base` exits 1 with no output when there is no common ancestor
    fn ensure_related(&self, older: &Revision, newer: &Revision) -> Result<(), HistoryQueryError> {
        let output = self.git(["merge-base", older.as_str(), newer.as_str()])?;
        if output.success {
            return Ok(());
        }

        if output.code == Some(1) && output.combined().trim().is_empty() {
            return Err(HistoryQueryError::Unrelated {
                older: older.to_string(),
                newer: newer.to_string(),
            });
        }

        Err(self.rejected(older, newer, &output))
    }

    fn git<const N: usize>(&self, args: [&str; N]) -> Result<CommandOutput, HistoryQueryError> {
        let spec = CommandSpec::new(&self.git)
            .args(args)
            .current_dir(&self.repo_root);

        self.runner
            .run(&spec)
            .map_err(|source| HistoryQueryError::Spawn {
                program: self.git.clone(),
                source,
            })
    }

    fn rejected(
        &self,
        older: &Revision,
        newer: &Revision,
        output: &CommandOutput,
    ) -> HistoryQueryError {
        let raw = output.combined();
        self.events.on_event(Event::HistoryQueryFailed {
            range: older.range_to(newer),
            output: raw.clone(),
        });

        HistoryQueryError::Rejected {
            older: older.to_string(),
            newer: newer.to_string(),
            code: output.code,
            output: raw,
        }
    }
}

/// Count revisions in `git rev-list` output: one per non-empty line
pub fn count_revisions(output: &str) -> usize {
    output.lines().filter(|line| !line.trim().is_empty()).count()
}
