//! Test environment for isolated Octoship testing.
//!
//! `TestEnv` owns a real git repository with a dependency snapshot
//! (`.bundle`, `vendor`) plus stub build and sync tools, and runs the
//! `octoship` binary against them with a private TMPDIR and HOME.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{BUNDLE_CONFIG, INDEX_HTML, STUB_BUILD, STUB_SYNC};

/// Result of running an Octoship CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// stdout parsed as NDJSON, one value per non-empty line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Isolated test environment.
pub struct TestEnv {
    /// Git repository the site is deployed from
    pub repo: TempDir,
    /// Stub tools and the logs they write
    pub tools_dir: TempDir,
    /// TMPDIR for the binary, so leftover workspaces can be detected
    pub tmp_dir: TempDir,
    /// HOME / XDG_CONFIG_HOME for the binary
    pub home_dir: TempDir,
    octoship_bin: PathBuf,
}

impl TestEnv {
    /// A repository with one commit containing `source/index.html`, and a
    /// dependency snapshot next to it.
    pub fn new() -> Self {
        let env = Self::bare();
        env.write_repo_file("source/index.html", INDEX_HTML);
        env.commit_all("Initial site");
        env.write_repo_file(".bundle/config", BUNDLE_CONFIG);
        env.write_repo_file("vendor/bundle/.keep", "");
        env
    }

    /// An empty repository (no commits) with the stub tools installed
    pub fn bare() -> Self {
        let env = Self {
            repo: TempDir::new().expect("Failed to create repo temp dir"),
            tools_dir: TempDir::new().expect("Failed to create tools temp dir"),
            tmp_dir: TempDir::new().expect("Failed to create tmp temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
            octoship_bin: PathBuf::from(env!("CARGO_BIN_EXE_octoship")),
        };

        env.git(&["init", "-q"]);
        env.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);

        env.write_tool("build-site", STUB_BUILD);
        env.write_tool("s3cmd", STUB_SYNC);
        std::fs::create_dir_all(env.log_dir()).expect("Failed to create log dir");
        env
    }

    pub fn repo_path(&self, relative: &str) -> PathBuf {
        self.repo.path().join(relative)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.tools_dir.path().join("logs")
    }

    /// Contents of a stub tool log, if the tool ran
    pub fn read_log(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.log_dir().join(name)).ok()
    }

    /// Argument vector the sync stub received
    pub fn sync_args(&self) -> Option<Vec<String>> {
        self.read_log("sync_args")
            .map(|s| s.lines().map(str::to_string).collect())
    }

    pub fn write_repo_file(&self, relative: &str, content: &str) {
        let path = self.repo_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Run git in the repository with a fixed identity
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .current_dir(self.repo.path())
            .args([
                "-c",
                "user.name=Octoship Tests",
                "-c",
                "user.email=tests@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .output()
            .expect("Failed to run git");

        assert!(
            output.status.success(),
            "git {:?} failed:\n{}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Commit only `source/` and return the new commit id
    pub fn commit_all(&self, message: &str) -> String {
        self.git(&["add", "source"]);
        self.git(&["commit", "-q", "--allow-empty", "-m", message]);
        self.git(&["rev-parse", "HEAD"])
    }

    /// Write a file under `source/` and commit it
    pub fn commit_file(&self, relative: &str, content: &str, message: &str) -> String {
        self.write_repo_file(&format!("source/{relative}"), content);
        self.commit_all(message)
    }

    /// Run octoship from the repository root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run octoship from the repository root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.repo.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.octoship_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("TMPDIR", self.tmp_dir.path())
            .env("NO_COLOR", "1")
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("STUB_LOG_DIR", self.log_dir())
            .env(
                "OCTOSHIP_BUILD_COMMAND",
                self.tools_dir.path().join("build-site"),
            )
            .env("OCTOSHIP_SYNC_PROGRAM", self.tools_dir.path().join("s3cmd"))
            .env_remove("OCTOSHIP_GIT")
            .env_remove("OCTOSHIP_TAR")
            .env_remove("OCTOSHIP_OUTPUT_DIR")
            .env_remove("OCTOSHIP_WORKSPACE_PREFIX")
            .env_remove("STUB_BUILD_FAIL")
            .env_remove("STUB_SYNC_EXIT");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute octoship");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    fn write_tool(&self, name: &str, script: &str) {
        let path = self.tools_dir.path().join(name);
        std::fs::write(&path, script).expect("Failed to write stub tool");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make stub tool executable");
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
