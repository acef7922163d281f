//! Configuration module for Octoship
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the command layer)
//! 2. Environment variables (OCTOSHIP_*)
//! 3. Explicit `--config` file, else `octoship.toml` in the working directory
//! 4. User config (~/.config/octoship/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OctoshipError, OctoshipResult};

/// Project config file name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "octoship.toml";

/// External tool locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_git")]
    pub git: String,

    #[serde(default = "default_tar")]
    pub tar: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: default_git(),
            tar: default_tar(),
        }
    }
}

fn default_git() -> String {
    "git".to_string()
}

fn default_tar() -> String {
    "tar".to_string()
}

/// Site build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Build command argv, run inside the workspace
    #[serde(default = "default_build_command")]
    pub command: Vec<String>,

    /// Directory (relative to the workspace) the build writes the site into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directories copied from the source root into the workspace before building
    #[serde(default = "default_dependency_dirs")]
    pub dependency_dirs: Vec<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: default_build_command(),
            output_dir: default_output_dir(),
            dependency_dirs: default_dependency_dirs(),
        }
    }
}

fn default_build_command() -> Vec<String> {
    ["bundle", "exec", "rake", "generate"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_dependency_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from(".bundle"), PathBuf::from("vendor")]
}

/// Storage sync configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_sync_program")]
    pub program: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            program: default_sync_program(),
        }
    }
}

fn default_sync_program() -> String {
    "s3cmd".to_string()
}

/// Workspace configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default = "default_workspace_prefix")]
    pub prefix: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            prefix: default_workspace_prefix(),
        }
    }
}

fn default_workspace_prefix() -> String {
    "octopress_deployment".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from (None = built-in defaults)
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> OctoshipResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> OctoshipResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| OctoshipError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Resolve the config file to use, load it, apply env overrides and validate.
    ///
    /// An explicit path must exist. Otherwise `octoship.toml` in `cwd` wins over
    /// the user config; with neither present the defaults are used.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> OctoshipResult<LoadedConfig> {
        let candidate = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let project = cwd.join(PROJECT_CONFIG_FILE);
                if project.is_file() {
                    Some(project)
                } else {
                    dirs_config_dir()
                        .map(|dir| dir.join("octoship/config.toml"))
                        .filter(|p| p.is_file())
                }
            }
        };

        let (config, warnings) = match &candidate {
            Some(path) => Self::load_with_warnings(path)?,
            None => (Self::default(), Vec::new()),
        };

        let config = config.with_env_overrides();
        config.validate(candidate.as_deref().unwrap_or(Path::new("<defaults>")))?;

        Ok(LoadedConfig {
            config,
            path: candidate,
            warnings,
        })
    }

    /// Apply environment variable overrides (OCTOSHIP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_env_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_env_overrides_from(mut self, get_env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(git) = get_env("OCTOSHIP_GIT").filter(|v| !v.is_empty()) {
            self.tools.git = git;
        }

        if let Some(tar) = get_env("OCTOSHIP_TAR").filter(|v| !v.is_empty()) {
            self.tools.tar = tar;
        }

        // OCTOSHIP_BUILD_COMMAND (whitespace-separated argv)
        if let Some(command) = get_env("OCTOSHIP_BUILD_COMMAND") {
            let argv: Vec<String> = command.split_whitespace().map(str::to_string).collect();
            if !argv.is_empty() {
                self.build.command = argv;
            }
        }

        if let Some(dir) = get_env("OCTOSHIP_OUTPUT_DIR").filter(|v| !v.is_empty()) {
            self.build.output_dir = PathBuf::from(dir);
        }

        if let Some(program) = get_env("OCTOSHIP_SYNC_PROGRAM").filter(|v| !v.is_empty()) {
            self.sync.program = program;
        }

        if let Some(prefix) = get_env("OCTOSHIP_WORKSPACE_PREFIX").filter(|v| !v.is_empty()) {
            self.workspace.prefix = prefix;
        }

        self
    }

    /// Reject configurations that could never deploy or that point outside the workspace
    pub fn validate(&self, file: &Path) -> OctoshipResult<()> {
        let invalid = |message: String| OctoshipError::Config {
            file: file.to_path_buf(),
            message,
        };

        if self.build.command.is_empty() || self.build.command[0].trim().is_empty() {
            return Err(invalid("build.command must name a program".to_string()));
        }
        if self.tools.git.trim().is_empty() || self.tools.tar.trim().is_empty() {
            return Err(invalid("tools.git and tools.tar must not be empty".to_string()));
        }
        if self.sync.program.trim().is_empty() {
            return Err(invalid("sync.program must not be empty".to_string()));
        }
        let prefix = &self.workspace.prefix;
        if prefix.is_empty() || prefix.contains(['/', '\\']) || prefix == "." || prefix == ".." {
            return Err(invalid(format!(
                "workspace.prefix '{prefix}' must be a plain file name without path separators"
            )));
        }
        if !is_contained_relative(&self.build.output_dir) {
            return Err(invalid(format!(
                "build.output_dir '{}' must be a relative path inside the workspace",
                self.build.output_dir.display()
            )));
        }
        for dir in &self.build.dependency_dirs {
            if !is_contained_relative(dir) {
                return Err(invalid(format!(
                    "build.dependency_dirs entry '{}' must be a relative path without '..'",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}

/// Relative, non-empty, and never climbs out with `..`
fn is_contained_relative(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && path.components().any(|c| matches!(c, Component::Normal(_)))
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tools",
        "git",
        "tar",
        "build",
        "command",
        "output_dir",
        "dependency_dirs",
        "sync",
        "program",
        "workspace",
        "prefix",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
