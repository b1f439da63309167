/// Report formatter — one fixed, machine-parseable schema per command.
///
/// Every command emits exactly one JSON object with camelCase keys and raw
/// byte sizes; no command path produces free-form text, so an automated
/// caller never has to parse prose. The structs here are the schemas; the
/// `from_*` constructors adapt the analysis results into them.
use serde::Serialize;

use crate::analysis::{CategoryGroup, ExtensionStat, FolderView, StaleFile, Summary};
use crate::classify::{Category, Safety};
use crate::error::Error;
use crate::model::Entry;

/// Render any report as pretty-printed JSON.
pub fn to_json<T: Serialize>(report: &T) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// `{path, size}` — the common listing row.
#[derive(Debug, Serialize)]
pub struct PathSize {
    pub path: String,
    pub size: u64,
}

impl PathSize {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            path: entry.path.trim_end_matches(['/', '\\']).to_owned(),
            size: entry.size,
        }
    }
}

/// `summary` schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub total_size: u64,
    pub total_files: u64,
    pub total_dirs: u64,
    pub top_extensions: Vec<ExtensionSize>,
    pub skipped_rows: u64,
}

#[derive(Debug, Serialize)]
pub struct ExtensionSize {
    pub ext: String,
    pub size: u64,
}

impl SummaryReport {
    pub fn from_summary(summary: Summary) -> Self {
        Self {
            total_size: summary.total_size,
            total_files: summary.total_files,
            total_dirs: summary.total_dirs,
            top_extensions: summary
                .top_extensions
                .into_iter()
                .map(|s| ExtensionSize {
                    ext: s.ext,
                    size: s.size,
                })
                .collect(),
            skipped_rows: summary.skipped_rows,
        }
    }
}

/// `cleanable` schema.
#[derive(Debug, Serialize)]
pub struct CleanableReport {
    pub categories: Vec<CleanableCategory>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanableCategory {
    pub category: Category,
    pub safety: Safety,
    pub total_size: u64,
    pub entries: Vec<CleanableRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanableRow {
    pub path: String,
    pub size: u64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_hint: Option<String>,
}

impl CleanableReport {
    pub fn from_groups(groups: Vec<CategoryGroup<'_>>) -> Self {
        Self {
            categories: groups
                .into_iter()
                .map(|group| CleanableCategory {
                    category: group.category,
                    safety: group.safety,
                    total_size: group.total_size,
                    entries: group
                        .entries
                        .into_iter()
                        .map(|row| CleanableRow {
                            path: row.entry.path.trim_end_matches(['/', '\\']).to_owned(),
                            size: row.size,
                            reason: row.reason.to_owned(),
                            migration_hint: row.migration_hint.map(str::to_owned),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// `largest` schema.
#[derive(Debug, Serialize)]
pub struct LargestReport {
    pub entries: Vec<PathSize>,
}

impl LargestReport {
    pub fn from_entries(entries: &[&Entry]) -> Self {
        Self {
            entries: entries.iter().map(|e| PathSize::from_entry(e)).collect(),
        }
    }
}

/// `by-type` schema.
#[derive(Debug, Serialize)]
pub struct ByTypeReport {
    pub types: Vec<TypeRow>,
}

#[derive(Debug, Serialize)]
pub struct TypeRow {
    pub ext: String,
    pub size: u64,
    pub count: u64,
}

impl ByTypeReport {
    pub fn from_stats(stats: Vec<ExtensionStat>) -> Self {
        Self {
            types: stats
                .into_iter()
                .map(|s| TypeRow {
                    ext: s.ext,
                    size: s.size,
                    count: s.count,
                })
                .collect(),
        }
    }
}

/// `top-folders` schema.
#[derive(Debug, Serialize)]
pub struct TopFoldersReport {
    pub folders: Vec<PathSize>,
}

impl TopFoldersReport {
    pub fn from_groups(groups: Vec<crate::index::FolderGroup>) -> Self {
        Self {
            folders: groups
                .into_iter()
                .map(|g| PathSize {
                    path: g.path,
                    size: g.size,
                })
                .collect(),
        }
    }
}

/// `folder` schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderReport {
    pub path: String,
    pub self_size: u64,
    pub children: Vec<FolderChildRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderChildRow {
    pub path: String,
    pub size: u64,
    pub is_directory: bool,
}

impl FolderReport {
    pub fn from_view(view: FolderView) -> Self {
        Self {
            path: view.path,
            self_size: view.self_size,
            children: view
                .children
                .into_iter()
                .map(|c| FolderChildRow {
                    path: c.path,
                    size: c.size,
                    is_directory: c.is_dir,
                })
                .collect(),
        }
    }
}

/// `search` and `filter` schema.
#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub matches: Vec<PathSize>,
}

impl MatchReport {
    pub fn from_entries(entries: &[&Entry]) -> Self {
        Self {
            matches: entries.iter().map(|e| PathSize::from_entry(e)).collect(),
        }
    }
}

/// `stale` schema.
#[derive(Debug, Serialize)]
pub struct StaleReport {
    pub entries: Vec<StaleRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaleRow {
    pub path: String,
    pub size: u64,
    pub age_days: u64,
}

impl StaleReport {
    pub fn from_stale(files: &[StaleFile<'_>]) -> Self {
        Self {
            entries: files
                .iter()
                .map(|s| StaleRow {
                    path: s.entry.path.clone(),
                    size: s.entry.size,
                    age_days: s.age_days,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;
    use crate::ingest::Dataset;
    use crate::model::Platform;
    use crate::PathIndex;

    fn file(path: &str, size: u64) -> Entry {
        Entry::new(path.to_owned(), size, false, None)
    }

    #[test]
    fn summary_serialises_with_camel_case_keys() {
        let ds = Dataset {
            entries: vec![file("/a/x.log", 10)],
            skipped_rows: 2,
        };
        let json = to_json(&SummaryReport::from_summary(analysis::summarise(&ds, 10))).unwrap();
        assert!(json.contains("\"totalSize\": 10"));
        assert!(json.contains("\"totalFiles\": 1"));
        assert!(json.contains("\"skippedRows\": 2"));
        assert!(json.contains("\"topExtensions\""));
    }

    #[test]
    fn cleanable_omits_missing_hints_and_lowercases_enums() {
        let entries = vec![file("/u/x.tmp", 5), file("/u/y.log", 7)];
        let index = PathIndex::build(&entries, Platform::Unix);
        let json = to_json(&CleanableReport::from_groups(analysis::cleanable(&index, 50))).unwrap();
        assert!(json.contains("\"category\": \"temp\""));
        assert!(json.contains("\"safety\": \"check\""));
        assert!(!json.contains("migrationHint"), "absent hints are omitted");
    }

    #[test]
    fn folder_report_uses_is_directory_key() {
        let entries = vec![
            Entry::new("/u".to_owned(), 0, true, None),
            file("/u/x.bin", 3),
        ];
        let index = PathIndex::build(&entries, Platform::Unix);
        let json = to_json(&FolderReport::from_view(analysis::folder(&index, "/u", 1, 50))).unwrap();
        assert!(json.contains("\"selfSize\": 3"));
        assert!(json.contains("\"isDirectory\": false"));
    }

    /// Rendering the same result twice yields byte-identical JSON.
    #[test]
    fn rendering_is_idempotent() {
        let entries = vec![file("/a/x.bin", 1), file("/a/y.bin", 2)];
        let first = to_json(&MatchReport::from_entries(
            &entries.iter().collect::<Vec<_>>(),
        ))
        .unwrap();
        let second = to_json(&MatchReport::from_entries(
            &entries.iter().collect::<Vec<_>>(),
        ))
        .unwrap();
        assert_eq!(first, second);
    }
}
