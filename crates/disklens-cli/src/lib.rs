/// Command-line frontend: parse arguments, run one analysis command, print
/// its JSON object to stdout.
///
/// Exit codes: 0 on success — including query misses, which produce empty
/// results; 1 when the snapshot is missing or unreadable; 2 for bad flags
/// or malformed filter/search syntax (clap's own convention for usage
/// errors, reused for argument errors raised by the engine).
pub mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use disklens_core::model::size;
use disklens_core::{analysis, ingest, query, report, Error, PathIndex, Platform};

use commands::{Cli, Command};

/// Parse the command line and run it. Clap handles usage errors itself
/// (printing to stderr and exiting 2); everything else funnels through
/// [`execute`] and maps onto the exit-code contract here.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            match err.downcast_ref::<Error>() {
                Some(Error::Argument { .. }) => ExitCode::from(2),
                _ => ExitCode::from(1),
            }
        }
    }
}

/// Entries shown per folder drill-down, matching the snapshot producers'
/// own listing cap.
const FOLDER_CHILD_LIMIT: usize = 50;

/// Extensions shown in `summary`.
const SUMMARY_TOP_EXTENSIONS: usize = 10;

/// Entries listed per cleanable category; totals always cover everything.
const CLEANABLE_ENTRY_CAP: usize = 50;

fn execute(cli: Cli) -> anyhow::Result<()> {
    let platform: Platform = cli.platform.map(Into::into).unwrap_or_else(Platform::host);
    let dataset = ingest::read_snapshot(&cli.snapshot)?;

    let file_bytes: u64 = dataset
        .entries
        .iter()
        .filter(|e| !e.is_dir)
        .map(|e| e.size)
        .sum();
    info!(
        entries = %size::format_count(dataset.entries.len() as u64),
        skipped = dataset.skipped_rows,
        total = %size::format_size(file_bytes),
        "snapshot ingested"
    );

    let json = match cli.command {
        Command::Summary => {
            let summary = analysis::summarise(&dataset, SUMMARY_TOP_EXTENSIONS);
            report::to_json(&report::SummaryReport::from_summary(summary))?
        }
        Command::Cleanable => {
            let index = PathIndex::build(&dataset.entries, platform);
            let groups = analysis::cleanable(&index, CLEANABLE_ENTRY_CAP);
            report::to_json(&report::CleanableReport::from_groups(groups))?
        }
        Command::Largest { limit } => {
            let top = analysis::largest(&dataset.entries, limit);
            report::to_json(&report::LargestReport::from_entries(&top))?
        }
        Command::ByType { limit } => {
            let stats = analysis::by_type(&dataset.entries, limit);
            report::to_json(&report::ByTypeReport::from_stats(stats))?
        }
        Command::TopFolders { depth, limit } => {
            let index = PathIndex::build(&dataset.entries, platform);
            let groups = analysis::top_folders(&index, depth, limit);
            report::to_json(&report::TopFoldersReport::from_groups(groups))?
        }
        Command::Folder { path, depth } => {
            let index = PathIndex::build(&dataset.entries, platform);
            let view = analysis::folder(&index, &path, depth, FOLDER_CHILD_LIMIT);
            report::to_json(&report::FolderReport::from_view(view))?
        }
        Command::Search {
            pattern,
            case_sensitive,
            ignore_case,
            limit,
        } => {
            let case_insensitive = if case_sensitive {
                false
            } else if ignore_case {
                true
            } else {
                platform.case_insensitive()
            };
            let found = query::search(&dataset.entries, &pattern, case_insensitive, limit)?;
            report::to_json(&report::MatchReport::from_entries(&found))?
        }
        Command::Filter { conditions, limit } => {
            let parsed = query::parse_conditions(&conditions)?;
            let found = query::run_filter(&dataset.entries, &parsed, limit);
            report::to_json(&report::MatchReport::from_entries(&found))?
        }
        Command::Stale { days, limit } => {
            let now = chrono::Local::now().naive_local();
            let stale = analysis::find_stale(&dataset.entries, now, days, limit);
            report::to_json(&report::StaleReport::from_stale(&stale))?
        }
    };

    println!("{json}");
    Ok(())
}
