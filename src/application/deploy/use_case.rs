//! Deploy Use Case
//!
//! Orchestrates one deployment:
//! 1. Create a scoped workspace
//! 2. Extract the revision into it (`git archive` + `tar`)
//! 3. Copy the dependency snapshot into it
//! 4. Build the site inside it
//! 5. Sync the built site to the bucket
//!
//! Each step is a hard precondition for the next. The workspace is removed
//! on every exit path, and the current process's working directory is never
//! touched: the workspace is handed to subprocesses as their working directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tempfile::TempDir;

use crate::config::Config;
use crate::domain::ports::{
    CommandOutput, CommandRunner, CommandSpec, Event, EventSink, NoopEventSink, OutputMode,
};
use crate::domain::value_objects::{BucketName, Revision, Step};
use crate::error::DeployError;
use crate::infrastructure::fs::{copy_dir_all, unlink_if_symlink};

use super::options::DeployOptions;
use super::result::DeployReport;

/// Flags passed to the sync tool on every upload.
///
/// Public-read objects, never delete remote objects missing locally,
/// reduced-redundancy storage class.
pub const SYNC_FLAGS: [&str; 3] = ["--acl-public", "--no-delete-removed", "--reduced-redundancy"];

/// Deploy use case, parameterized by the command runner
pub struct Deployer<R: CommandRunner> {
    runner: R,
    config: Config,
    options: DeployOptions,
}

impl<R: CommandRunner> Deployer<R> {
    pub fn new(runner: R, config: Config, options: DeployOptions) -> Self {
        Self {
            runner,
            config,
            options,
        }
    }

    /// Deploy `revision` to `bucket`
    pub fn deploy_to_bucket_from_commit(
        &self,
        bucket: &BucketName,
        revision: &Revision,
    ) -> Result<DeployReport, DeployError> {
        self.deploy_to_bucket_from_commit_with_events(bucket, revision, Arc::new(NoopEventSink))
    }

    /// Deploy `revision` to `bucket`, reporting progress to `events`
    pub fn deploy_to_bucket_from_commit_with_events(
        &self,
        bucket: &BucketName,
        revision: &Revision,
        events: Arc<dyn EventSink>,
    ) -> Result<DeployReport, DeployError> {
        let started_at = Utc::now();
        let clock = Instant::now();
        let destination = bucket.url();

        events.on_event(Event::Started {
            bucket: bucket.to_string(),
            revision: revision.to_string(),
            destination: destination.clone(),
            dry_run: self.options.dry_run,
        });

        let workspace = self.run_step(&*events, Step::Workspace, || self.create_workspace())?;
        let workspace_path = workspace.path().to_path_buf();

        let outcome = self.run_pipeline(&workspace_path, bucket, revision, &*events);

        if let Err(e) = workspace.close() {
            events.on_event(Event::WorkspaceCleanupFailed {
                path: workspace_path.clone(),
                error: e.to_string(),
            });
        }

        let uploaded = outcome?;
        let elapsed = clock.elapsed();

        events.on_event(Event::Completed {
            destination: destination.clone(),
            uploaded: uploaded.len(),
            elapsed,
        });

        Ok(DeployReport {
            bucket: bucket.to_string(),
            revision: revision.to_string(),
            destination,
            uploaded,
            dry_run: self.options.dry_run,
            workspace: workspace_path,
            started_at,
            elapsed,
        })
    }

    fn run_pipeline(
        &self,
        workspace: &Path,
        bucket: &BucketName,
        revision: &Revision,
        events: &dyn EventSink,
    ) -> Result<Vec<PathBuf>, DeployError> {
        self.run_step(events, Step::Extract, || {
            self.extract_revision(revision, workspace, events)
        })?;
        self.run_step(events, Step::PrepareDependencies, || {
            self.prepare_dependencies(workspace)
        })?;
        let entries = self.run_step(events, Step::Build, || self.build_site(workspace, events))?;
        self.run_step(events, Step::Sync, || {
            self.sync_site(workspace, bucket, &entries, events)
        })?;
        Ok(entries)
    }

    fn run_step<T>(
        &self,
        events: &dyn EventSink,
        step: Step,
        f: impl FnOnce() -> Result<T, DeployError>,
    ) -> Result<T, DeployError> {
        events.on_event(Event::StepStarted { step });
        let clock = Instant::now();

        match f() {
            Ok(value) => {
                events.on_event(Event::StepCompleted {
                    step,
                    elapsed: clock.elapsed(),
                });
                Ok(value)
            }
            Err(e) => {
                events.on_event(Event::StepFailed {
                    step,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn create_workspace(&self) -> Result<TempDir, DeployError> {
        tempfile::Builder::new()
            .prefix(&self.config.workspace.prefix)
            .tempdir()
            .map_err(DeployError::Workspace)
    }

    fn output_mode(&self) -> OutputMode {
        if self.options.stream_output {
            OutputMode::Inherit
        } else {
            OutputMode::Capture
        }
    }

    /// Run `spec`, mapping a spawn failure or non-zero exit to a message
    fn run_command(
        &self,
        events: &dyn EventSink,
        step: Step,
        spec: CommandSpec,
    ) -> Result<CommandOutput, String> {
        if events.wants_detailed_events() {
            events.on_event(Event::CommandSpawned {
                step,
                program: spec.program.clone(),
                args: spec.args_lossy(),
            });
        }

        let output = self
            .runner
            .run(&spec)
            .map_err(|e| format!("could not run {}: {}", spec.program, e))?;

        if output.success {
            Ok(output)
        } else {
            Err(output.failure_summary(&spec.program))
        }
    }

    fn extract_revision(
        &self,
        revision: &Revision,
        workspace: &Path,
        events: &dyn EventSink,
    ) -> Result<(), DeployError> {
        let fail = |message: String| DeployError::Extraction {
            revision: revision.to_string(),
            message,
        };

        // The tarball must not land inside the tree that gets built.
        let archive_dir = tempfile::Builder::new()
            .prefix("octoship-archive")
            .tempdir()
            .map_err(|e| fail(format!("could not create archive directory: {e}")))?;
        let tarball = archive_dir.path().join("revision.tar");

        let mut output_arg = OsString::from("--output=");
        output_arg.push(tarball.as_os_str());

        let archive = CommandSpec::new(&self.config.tools.git)
            .arg("archive")
            .arg("--format=tar")
            .arg(output_arg)
            .arg(revision.as_str())
            .current_dir(&self.options.repo_root);
        self.run_command(events, Step::Extract, archive).map_err(fail)?;

        let unpack = CommandSpec::new(&self.config.tools.tar)
            .arg("-x")
            .arg("-f")
            .arg(tarball.as_os_str())
            .arg("-C")
            .arg(workspace.as_os_str());
        self.run_command(events, Step::Extract, unpack).map_err(fail)?;

        archive_dir
            .close()
            .map_err(|e| fail(format!("could not remove archive directory: {e}")))
    }

    fn prepare_dependencies(&self, workspace: &Path) -> Result<(), DeployError> {
        let sources: Vec<(PathBuf, &PathBuf)> = self
            .config
            .build
            .dependency_dirs
            .iter()
            .map(|dir| (self.options.source_root.join(dir), dir))
            .collect();

        // Check all of them before copying anything.
        for (from, _) in &sources {
            if !from.is_dir() {
                return Err(DeployError::DependencyPrep {
                    path: from.clone(),
                    message: "directory not found".to_string(),
                });
            }
        }

        // The extracted tree may contain symlinks at these paths; they are
        // replaced, never written through.
        for (from, dir) in &sources {
            unlink_symlinked_parents(workspace, dir)
                .and_then(|_| copy_dir_all(from, &workspace.join(dir)))
                .map_err(|e| DeployError::DependencyPrep {
                    path: from.clone(),
                    message: e.to_string(),
                })?;
        }

        Ok(())
    }

    /// Build the site and return the top-level entries of its output directory
    fn build_site(
        &self,
        workspace: &Path,
        events: &dyn EventSink,
    ) -> Result<Vec<PathBuf>, DeployError> {
        let fail = |message: String| DeployError::Build { message };

        let (program, args) = self
            .config
            .build
            .command
            .split_first()
            .ok_or_else(|| fail("build command is empty".to_string()))?;

        let build = CommandSpec::new(program)
            .args(args)
            .current_dir(workspace)
            .output(self.output_mode());
        self.run_command(events, Step::Build, build).map_err(fail)?;

        let output_dir = &self.config.build.output_dir;
        let entries = site_entries(workspace, output_dir).map_err(|e| {
            fail(format!(
                "build produced no {} directory: {}",
                output_dir.display(),
                e
            ))
        })?;

        if entries.is_empty() {
            return Err(fail(format!(
                "build left {} empty, nothing to upload",
                output_dir.display()
            )));
        }

        Ok(entries)
    }

    fn sync_site(
        &self,
        workspace: &Path,
        bucket: &BucketName,
        entries: &[PathBuf],
        events: &dyn EventSink,
    ) -> Result<(), DeployError> {
        let destination = bucket.url();

        let mut sync = CommandSpec::new(&self.config.sync.program)
            .arg("sync")
            .args(SYNC_FLAGS);
        if self.options.dry_run {
            sync = sync.arg("--dry-run");
        }
        let sync = sync
            .args(entries.iter().map(|e| e.as_os_str().to_os_string()))
            .arg(&destination)
            .current_dir(workspace)
            .output(self.output_mode());

        self.run_command(events, Step::Sync, sync)
            .map(|_| ())
            .map_err(|message| DeployError::Sync {
                destination,
                message,
            })
    }
}

/// Remove symlinks among the intermediate directories of `workspace/dir`
fn unlink_symlinked_parents(workspace: &Path, dir: &Path) -> std::io::Result<()> {
    let mut path = workspace.to_path_buf();
    if let Some(parent) = dir.parent() {
        for component in parent.components() {
            path.push(component);
            unlink_if_symlink(&path)?;
        }
    }
    Ok(())
}

/// Non-hidden top-level entries of `workspace/output_dir`, sorted, relative
/// to the workspace. Same set a shell would produce for `public/*`.
pub fn site_entries(workspace: &Path, output_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for entry in std::fs::read_dir(workspace.join(output_dir))? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        entries.push(output_dir.join(name));
    }

    entries.sort();
    Ok(entries)
}
