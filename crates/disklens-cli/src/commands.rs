use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use disklens_core::Platform;

#[derive(Debug, Parser)]
#[command(name = "disklens")]
#[command(version, about = "Analyse a disk usage snapshot (WizTree-style CSV export)", long_about = None)]
pub struct Cli {
    /// Path to the snapshot CSV
    pub snapshot: PathBuf,

    /// Path convention and classification rule set (defaults to the host platform)
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Windows,
    Unix,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Unix => Platform::Unix,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Disk usage summary with the heaviest extensions
    Summary,
    /// Potentially cleanable files grouped by category and safety
    Cleanable,
    /// Largest files
    Largest {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Space usage by file extension
    ByType {
        #[arg(long, default_value_t = 30)]
        limit: usize,
    },
    /// Largest folders at a given depth below the scan root
    TopFolders {
        #[arg(long, default_value_t = 2)]
        depth: usize,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Explore a folder's contents
    Folder {
        path: String,
        #[arg(long, default_value_t = 1)]
        depth: usize,
    },
    /// Search entries by glob pattern (* and ?)
    Search {
        pattern: String,
        /// Force case-sensitive matching regardless of platform
        #[arg(long, conflicts_with = "ignore_case")]
        case_sensitive: bool,
        /// Force case-insensitive matching regardless of platform
        #[arg(long)]
        ignore_case: bool,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
    /// Filter files by conditions, e.g. "size>1GB,ext=.log"
    Filter {
        conditions: String,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
    /// Large files not modified recently
    Stale {
        #[arg(long, default_value_t = 180)]
        days: u64,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_use_kebab_case_with_defaults() {
        let cli = Cli::try_parse_from(["disklens", "snap.csv", "top-folders"]).unwrap();
        match cli.command {
            Command::TopFolders { depth, limit } => {
                assert_eq!(depth, 2);
                assert_eq!(limit, 10);
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from(["disklens", "snap.csv", "by-type", "--limit", "5"]).unwrap();
        match cli.command {
            Command::ByType { limit } => assert_eq!(limit, 5),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn platform_flag_is_optional_and_precedes_the_subcommand() {
        let cli =
            Cli::try_parse_from(["disklens", "snap.csv", "--platform", "unix", "summary"]).unwrap();
        assert_eq!(cli.platform, Some(PlatformArg::Unix));
    }

    #[test]
    fn search_case_flags_conflict() {
        let err = Cli::try_parse_from([
            "disklens",
            "snap.csv",
            "search",
            "*.tmp",
            "--case-sensitive",
            "--ignore-case",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        assert!(Cli::try_parse_from(["disklens", "snap.csv"]).is_err());
    }
}
