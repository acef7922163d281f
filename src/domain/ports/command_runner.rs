//! Command Runner Port
//!
//! Every external tool (git, tar, the site build, s3cmd) is reached through
//! this trait. Commands are argument vectors with an explicit working
//! directory; nothing goes through a shell and nothing changes the working
//! directory of the current process.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Where a subprocess's stdout/stderr go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Collect into [`CommandOutput`]
    #[default]
    Capture,
    /// Stream to the parent's terminal; the captured fields stay empty
    Inherit,
}

/// A single subprocess invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<OsString>,
    pub cwd: Option<PathBuf>,
    pub output: OutputMode,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            output: OutputMode::default(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn output(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }

    /// Arguments as strings (lossy), for events and assertions
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

/// Exit status and captured output of a finished subprocess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Lines of captured stderr kept in failure messages
    const STDERR_TAIL_LINES: usize = 12;

    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// stdout followed by stderr, as a terminal would have shown them
    pub fn combined(&self) -> String {
        let mut out = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&self.stderr);
        }
        out
    }

    /// One-paragraph description of a failed run: exit code plus stderr tail
    pub fn failure_summary(&self, program: &str) -> String {
        let mut summary = match self.code {
            Some(code) => format!("{program} exited with code {code}"),
            None => format!("{program} was terminated by a signal"),
        };

        let lines: Vec<&str> = self.stderr.lines().filter(|l| !l.trim().is_empty()).collect();
        if !lines.is_empty() {
            let start = lines.len().saturating_sub(Self::STDERR_TAIL_LINES);
            summary.push_str(":\n");
            summary.push_str(&lines[start..].join("\n"));
        }
        summary
    }
}

/// Runs external commands to completion, blocking the caller
pub trait CommandRunner: Send + Sync {
    /// Run `spec` and wait for it.
    ///
    /// `Err` means the process could not be started at all; a process that
    /// ran and failed is `Ok` with `success == false`.
    fn run(&self, spec: &CommandSpec) -> std::io::Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<R> {
    fn run(&self, spec: &CommandSpec) -> std::io::Result<CommandOutput> {
        (**self).run(spec)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, spec: &CommandSpec) -> std::io::Result<CommandOutput> {
        (**self).run(spec)
    }
}

/// Scripted runner for tests
///
/// Records every invocation and answers with a caller-supplied handler, which
/// may also touch the filesystem to imitate the real tool.
#[cfg(test)]
pub struct ScriptedRunner {
    calls: std::sync::Mutex<Vec<CommandSpec>>,
    handler: Box<dyn Fn(&CommandSpec) -> std::io::Result<CommandOutput> + Send + Sync>,
}

#[cfg(test)]
impl ScriptedRunner {
    pub fn new(
        handler: impl Fn(&CommandSpec) -> std::io::Result<CommandOutput> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: std::sync::Mutex::new(Vec::new()),
            handler: Box::new(handler),
        }
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, program: &str) -> Vec<CommandSpec> {
        self.calls()
            .into_iter()
            .filter(|c| c.program == program)
            .collect()
    }
}

#[cfg(test)]
impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> std::io::Result<CommandOutput> {
        self.calls.lock().unwrap().push(spec.clone());
        (self.handler)(spec)
    }
}
