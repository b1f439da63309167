/// Space usage grouped by file extension.
use std::collections::HashMap;

use crate::model::Entry;

/// Label used by `by-type` for files with no extension.
pub const NO_EXTENSION: &str = "(no extension)";

/// Size and count totals for one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionStat {
    pub ext: String,
    pub size: u64,
    pub count: u64,
}

/// Sum file sizes per extension, sorted by size descending with the
/// extension as tie-break. Directories never contribute.
///
/// `include_extensionless` folds extensionless files into a
/// [`NO_EXTENSION`] bucket; otherwise they are dropped.
pub(crate) fn extension_totals(entries: &[Entry], include_extensionless: bool) -> Vec<ExtensionStat> {
    let mut map: HashMap<&str, (u64, u64)> = HashMap::new();
    for entry in entries {
        if entry.is_dir {
            continue;
        }
        let ext = if entry.ext.is_empty() {
            if !include_extensionless {
                continue;
            }
            NO_EXTENSION
        } else {
            entry.ext.as_str()
        };
        let slot = map.entry(ext).or_insert((0, 0));
        slot.0 += entry.size;
        slot.1 += 1;
    }

    let mut stats: Vec<ExtensionStat> = map
        .into_iter()
        .map(|(ext, (size, count))| ExtensionStat {
            ext: ext.to_owned(),
            size,
            count,
        })
        .collect();
    stats.sort_unstable_by(|a, b| b.size.cmp(&a.size).then_with(|| a.ext.cmp(&b.ext)));
    stats
}

/// The `by-type` operation: per-extension totals, largest first, capped at
/// `limit`.
pub fn by_type(entries: &[Entry], limit: usize) -> Vec<ExtensionStat> {
    let mut stats = extension_totals(entries, true);
    stats.truncate(limit);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, size: u64) -> Entry {
        Entry::new(path.to_owned(), size, false, None)
    }

    #[test]
    fn groups_and_sorts_by_size() {
        let entries = vec![
            file("/a/one.log", 100),
            file("/a/two.log", 150),
            file("/a/big.zip", 400),
            Entry::new("/a".to_owned(), 1_000, true, None),
        ];
        let stats = by_type(&entries, 30);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].ext, ".zip");
        assert_eq!(stats[1], ExtensionStat { ext: ".log".into(), size: 250, count: 2 });
    }

    #[test]
    fn extensionless_files_get_their_own_bucket() {
        let entries = vec![file("/a/Makefile", 10), file("/a/LICENSE", 5)];
        let stats = by_type(&entries, 30);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].ext, NO_EXTENSION);
        assert_eq!(stats[0].count, 2);
    }

    #[test]
    fn equal_sizes_order_by_extension() {
        let entries = vec![file("/a/x.bbb", 10), file("/a/x.aaa", 10)];
        let stats = by_type(&entries, 30);
        assert_eq!(stats[0].ext, ".aaa");
    }

    #[test]
    fn limit_is_applied_after_sorting() {
        let entries = vec![
            file("/a/x.big", 100),
            file("/a/x.mid", 50),
            file("/a/x.small", 1),
        ];
        let stats = by_type(&entries, 2);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].ext, ".big");
    }
}
