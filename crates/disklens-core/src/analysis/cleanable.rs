/// Cleanable-space report: classify everything, group by category and
/// safety, count each subtree's bytes exactly once.
use std::collections::HashMap;

use rayon::prelude::*;

use crate::classify::{match_rule, Category, Rule, Safety};
use crate::index::PathIndex;
use crate::model::{path, Entry};

/// One classified entry contributing to a category group.
#[derive(Debug, Clone)]
pub struct CleanableEntry<'a> {
    pub entry: &'a Entry,
    /// Bytes attributed to this entry: its own size for files, the subtree
    /// rollup (or the producer-reported size when no file rows exist) for
    /// directories.
    pub size: u64,
    pub reason: &'static str,
    pub migration_hint: Option<&'static str>,
}

/// All entries of one (category, safety) pair, largest first.
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub safety: Safety,
    pub total_size: u64,
    pub entries: Vec<CleanableEntry<'a>>,
}

/// The `cleanable` operation.
///
/// Classification runs sharded across the thread pool; each entry is a
/// pure function of its own fields and the merge is plain concatenation in
/// entry order, so shard count never changes the result.
///
/// A classified directory absorbs its whole subtree: descendants are
/// suppressed and their file bytes roll up into the directory's entry, so
/// a `node_modules` directory is counted once whether or not its files
/// also appear in the snapshot. Entries matching no rule (`other`) are
/// omitted entirely.
///
/// Per-group entry lists are capped at `per_group_cap`; totals always
/// cover every contributing entry.
pub fn cleanable<'a>(index: &PathIndex<'a>, per_group_cap: usize) -> Vec<CategoryGroup<'a>> {
    let entries = index.entries();
    let table = index.platform().rules();
    let matched: Vec<Option<&'static Rule>> = entries
        .par_iter()
        .map(|entry| match_rule(entry, table))
        .collect();

    // Walk in sorted path order so each classified directory's descendants
    // are the contiguous run right after it.
    struct OpenDir {
        position: usize,
        rule: &'static Rule,
        key: String,
        rollup: u64,
    }
    let mut accepted: Vec<(usize, &'static Rule, u64)> = Vec::new();
    let mut open: Option<OpenDir> = None;

    let mut close = |open: &mut Option<OpenDir>, accepted: &mut Vec<(usize, &'static Rule, u64)>| {
        if let Some(dir) = open.take() {
            let size = if dir.rollup > 0 {
                dir.rollup
            } else {
                entries[dir.position].size
            };
            accepted.push((dir.position, dir.rule, size));
        }
    };

    for i in index.sorted_positions() {
        let key = index.key_at(i);
        let absorbed = match &mut open {
            Some(dir) if path::is_descendant(key, &dir.key) => {
                if !entries[i].is_dir {
                    dir.rollup += entries[i].size;
                }
                true
            }
            _ => false,
        };
        if absorbed {
            continue;
        }
        close(&mut open, &mut accepted);
        let Some(rule) = matched[i] else { continue };
        if entries[i].is_dir {
            open = Some(OpenDir {
                position: i,
                rule,
                key: key.to_owned(),
                rollup: 0,
            });
        } else {
            accepted.push((i, rule, entries[i].size));
        }
    }
    close(&mut open, &mut accepted);

    // Group by (category, safety). Sums are associative, so accumulation
    // order cannot affect totals.
    let mut groups: HashMap<(Category, Safety), CategoryGroup<'a>> = HashMap::new();
    for (i, rule, size) in accepted {
        let group = groups
            .entry((rule.category, rule.safety))
            .or_insert_with(|| CategoryGroup {
                category: rule.category,
                safety: rule.safety,
                total_size: 0,
                entries: Vec::new(),
            });
        group.total_size += size;
        group.entries.push(CleanableEntry {
            entry: &entries[i],
            size,
            reason: rule.reason,
            migration_hint: rule.migration_hint,
        });
    }

    let mut result: Vec<CategoryGroup<'a>> = groups.into_values().collect();
    for group in &mut result {
        group
            .entries
            .sort_unstable_by(|a, b| b.size.cmp(&a.size).then_with(|| a.entry.path.cmp(&b.entry.path)));
        group.entries.truncate(per_group_cap);
    }
    result.sort_unstable_by(|a, b| {
        b.total_size
            .cmp(&a.total_size)
            .then_with(|| (a.category, a.safety).cmp(&(b.category, b.safety)))
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Platform;

    fn file(path: &str, size: u64) -> Entry {
        Entry::new(path.to_owned(), size, false, None)
    }

    fn dir(path: &str, size: u64) -> Entry {
        Entry::new(path.to_owned(), size, true, None)
    }

    fn find<'a, 'b>(
        groups: &'b [CategoryGroup<'a>],
        category: Category,
        safety: Safety,
    ) -> Option<&'b CategoryGroup<'a>> {
        groups
            .iter()
            .find(|g| g.category == category && g.safety == safety)
    }

    /// Directory rows with no children carry their reported sizes, and
    /// nothing classifies as `other`.
    #[test]
    fn directory_only_snapshot_uses_reported_sizes() {
        let entries = vec![
            dir("/u/.cache/pip", 2 << 30),
            dir("/u/project/node_modules", 500 << 20),
            file("/u/Downloads/installer.dmg", 1 << 30),
        ];
        let index = PathIndex::build(&entries, Platform::Unix);
        let groups = cleanable(&index, 50);

        assert_eq!(groups.len(), 3);
        let cache = find(&groups, Category::Cache, Safety::Safe).expect("cache group");
        assert_eq!(cache.total_size, 2 << 30);
        let dev = find(&groups, Category::Dev, Safety::Safe).expect("dev group");
        assert_eq!(dev.total_size, 500 << 20);
        let dl = find(&groups, Category::Download, Safety::Check).expect("download group");
        assert_eq!(dl.total_size, 1 << 30);
        assert!(!groups.iter().any(|g| g.category == Category::Other));
    }

    /// When both the directory row and its files are present, the subtree
    /// is counted exactly once via the rollup.
    #[test]
    fn classified_directory_absorbs_descendants() {
        let entries = vec![
            dir("/u/p/node_modules", 0),
            file("/u/p/node_modules/a/x.js", 300),
            file("/u/p/node_modules/b/y.js", 200),
            file("/u/p/node_modules/npm-debug.log", 100),
        ];
        let index = PathIndex::build(&entries, Platform::Unix);
        let groups = cleanable(&index, 50);

        assert_eq!(groups.len(), 1, "descendants are suppressed");
        let dev = find(&groups, Category::Dev, Safety::Safe).expect("dev group");
        assert_eq!(dev.total_size, 600, "rollup replaces the zero dir size");
        assert_eq!(dev.entries.len(), 1);
        assert_eq!(dev.entries[0].entry.path, "/u/p/node_modules");
    }

    /// Without a directory row, matching files count individually.
    #[test]
    fn loose_files_count_individually() {
        let entries = vec![
            file("/var/log/app.log", 100),
            file("/var/log/app.log.1", 50),
            file("/u/notes.txt", 10),
        ];
        let index = PathIndex::build(&entries, Platform::Unix);
        let groups = cleanable(&index, 50);
        let logs = find(&groups, Category::Log, Safety::Check).expect("log group");
        assert_eq!(logs.total_size, 150);
        assert_eq!(logs.entries.len(), 2);
    }

    /// Same dataset, same result, regardless of how rayon shards the
    /// classification pass.
    #[test]
    fn repeated_runs_are_identical() {
        let entries: Vec<Entry> = (0..200)
            .map(|i| file(&format!("/u/logs/app-{i:03}.log"), i))
            .collect();
        let index = PathIndex::build(&entries, Platform::Unix);
        let a = cleanable(&index, 50);
        let b = cleanable(&index, 50);
        assert_eq!(a.len(), b.len());
        for (ga, gb) in a.iter().zip(&b) {
            assert_eq!(ga.total_size, gb.total_size);
            let pa: Vec<&str> = ga.entries.iter().map(|e| e.entry.path.as_str()).collect();
            let pb: Vec<&str> = gb.entries.iter().map(|e| e.entry.path.as_str()).collect();
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn per_group_cap_limits_entries_not_totals() {
        let entries: Vec<Entry> = (0..10)
            .map(|i| file(&format!("/u/t{i}.tmp"), 10))
            .collect();
        let index = PathIndex::build(&entries, Platform::Unix);
        let groups = cleanable(&index, 3);
        let temp = find(&groups, Category::Temp, Safety::Safe).expect("temp group");
        assert_eq!(temp.entries.len(), 3);
        assert_eq!(temp.total_size, 100);
    }
}
