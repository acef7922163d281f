use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Octoship - deploy a static site revision to S3
#[derive(Parser, Debug)]
#[command(name = "octoship")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events (for CI)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v shows every command before it runs)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./octoship.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a revision in a scratch workspace and sync it to a bucket
    Deploy {
        /// Destination bucket name
        #[arg(short, long)]
        bucket: String,

        /// Revision to deploy (commit, tag, or branch)
        #[arg(short, long)]
        revision: String,

        /// Directory holding the dependency snapshot (.bundle, vendor)
        #[arg(long, value_name = "DIR")]
        source_root: Option<PathBuf>,

        /// Repository to read the revision from (default: current directory)
        #[arg(long, value_name = "DIR")]
        repo: Option<PathBuf>,

        /// Refuse to deploy unless the revision is a fast-forward of this one
        #[arg(long, value_name = "REV")]
        require_fast_forward_from: Option<String>,

        /// Ask the sync tool what it would upload, without uploading
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Count commits in NEWER that are not in OLDER
    Distance {
        older: String,
        newer: String,

        /// Repository to query (default: current directory)
        #[arg(long, value_name = "DIR")]
        repo: Option<PathBuf>,
    },

    /// Check whether NEWER contains all of OLDER (exit 0 if so, 1 if not)
    FastForward {
        older: String,
        newer: String,

        /// Repository to query (default: current directory)
        #[arg(long, value_name = "DIR")]
        repo: Option<PathBuf>,
    },

    /// Show version information and the resolved tool configuration
    Version,
}

impl Commands {
    /// Name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Deploy { .. } => "deploy",
            Commands::Distance { .. } => "distance",
            Commands::FastForward { .. } => "fast-forward",
            Commands::Version => "version",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_deploy() {
        let cli = Cli::try_parse_from([
            "octoship",
            "deploy",
            "--bucket",
            "www.example.com",
            "--revision",
            "main",
        ])
        .unwrap();

        if let Commands::Deploy {
            bucket,
            revision,
            source_root,
            repo,
            require_fast_forward_from,
            dry_run,
            yes,
        } = cli.command
        {
            assert_eq!(bucket, "www.example.com");
            assert_eq!(revision, "main");
            assert_eq!(source_root, None);
            assert_eq!(repo, None);
            assert_eq!(require_fast_forward_from, None);
            assert!(!dry_run);
            assert!(!yes);
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_deploy_requires_bucket_and_revision() {
        assert!(Cli::try_parse_from(["octoship", "deploy", "--bucket", "b"]).is_err());
        assert!(Cli::try_parse_from(["octoship", "deploy", "--revision", "main"]).is_err());
    }

    #[test]
    fn test_cli_parse_deploy_with_options() {
        let cli = Cli::try_parse_from([
            "octoship",
            "deploy",
            "-b",
            "www.example.com",
            "-r",
            "v2.0",
            "--source-root",
            "/srv/blog",
            "--require-fast-forward-from",
            "preprod",
            "--dry-run",
            "-y",
        ])
        .unwrap();

        if let Commands::Deploy {
            source_root,
            require_fast_forward_from,
            dry_run,
            yes,
            ..
        } = cli.command
        {
            assert_eq!(source_root, Some(PathBuf::from("/srv/blog")));
            assert_eq!(require_fast_forward_from.as_deref(), Some("preprod"));
            assert!(dry_run);
            assert!(yes);
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_distance() {
        let cli = Cli::try_parse_from(["octoship", "distance", "v1.0", "main"]).unwrap();
        if let Commands::Distance { older, newer, repo } = cli.command {
            assert_eq!(older, "v1.0");
            assert_eq!(newer, "main");
            assert_eq!(repo, None);
        } else {
            panic!("Expected Distance command");
        }
    }

    #[test]
    fn test_cli_parse_fast_forward() {
        let cli = Cli::try_parse_from(["octoship", "fast-forward", "preprod", "main"]).unwrap();
        assert!(matches!(cli.command, Commands::FastForward { .. }));
        assert_eq!(cli.command.name(), "fast-forward");
    }

    #[test]
    fn test_cli_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["octoship", "version", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_verbose_and_config_are_global() {
        let cli = Cli::try_parse_from([
            "octoship",
            "-vv",
            "distance",
            "a",
            "b",
            "--config",
            "ship.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("ship.toml")));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["octoship"]).is_err());
    }
}
