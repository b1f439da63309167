/// Dataset summary — totals plus the heaviest extensions.
use crate::ingest::Dataset;

use super::file_types::{extension_totals, ExtensionStat};

/// Totals for one dataset. `skipped_rows` carries the ingestion diagnostic
/// so a caller can tell a clean snapshot from a damaged one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Sum of file bytes. Directory rows are excluded so producer-supplied
    /// directory sizes can never double-count.
    pub total_size: u64,
    pub total_files: u64,
    pub total_dirs: u64,
    pub top_extensions: Vec<ExtensionStat>,
    pub skipped_rows: u64,
}

/// Summarise a dataset, keeping the `top_k` extensions by summed file size.
pub fn summarise(dataset: &Dataset, top_k: usize) -> Summary {
    let mut total_size = 0u64;
    let mut total_files = 0u64;
    let mut total_dirs = 0u64;
    for entry in &dataset.entries {
        if entry.is_dir {
            total_dirs += 1;
        } else {
            total_files += 1;
            total_size += entry.size;
        }
    }

    // Extensionless files are left out here; `by-type` reports them under
    // its own "(no extension)" bucket.
    let mut top_extensions = extension_totals(&dataset.entries, false);
    top_extensions.truncate(top_k);

    Summary {
        total_size,
        total_files,
        total_dirs,
        top_extensions,
        skipped_rows: dataset.skipped_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    fn dataset(entries: Vec<Entry>, skipped: u64) -> Dataset {
        Dataset {
            entries,
            skipped_rows: skipped,
        }
    }

    fn file(path: &str, size: u64) -> Entry {
        Entry::new(path.to_owned(), size, false, None)
    }

    #[test]
    fn totals_split_files_and_directories() {
        let ds = dataset(
            vec![
                file("/a/x.log", 100),
                file("/a/y.log", 50),
                file("/a/z.png", 400),
                Entry::new("/a".to_owned(), 9_999, true, None),
            ],
            3,
        );
        let s = summarise(&ds, 10);
        assert_eq!(s.total_size, 550, "directory sizes never count");
        assert_eq!(s.total_files, 3);
        assert_eq!(s.total_dirs, 1);
        assert_eq!(s.skipped_rows, 3);
        assert_eq!(s.top_extensions[0].ext, ".png");
    }

    #[test]
    fn empty_dataset_summarises_to_zeroes() {
        let s = summarise(&dataset(Vec::new(), 0), 10);
        assert_eq!(s.total_size, 0);
        assert_eq!(s.total_files, 0);
        assert_eq!(s.total_dirs, 0);
        assert!(s.top_extensions.is_empty());
    }

    #[test]
    fn top_k_truncates_extension_list() {
        let ds = dataset(
            (0..20).map(|i| file(&format!("/a/f{i}.e{i}"), 10)).collect(),
            0,
        );
        assert_eq!(summarise(&ds, 5).top_extensions.len(), 5);
    }
}
