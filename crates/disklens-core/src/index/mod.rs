/// Path index — hierarchy reconstructed from flat paths on demand.
///
/// No parent/child node graph is ever built. Entries are sorted once by
/// their path-segment sequence; after that, every folder's members form a
/// contiguous run, so grouping at any depth is a single linear walk over
/// the sorted order. Sorting by segments rather than raw bytes matters:
/// raw string order would interleave `/a!x` between `/a` and `/a/b` and
/// split the `/a` group in two.
///
/// Rollup totals always sum *file* bytes, never source-reported directory
/// sizes, so a folder's total means "file bytes transitively under it"
/// regardless of producer quirks, and totals conserve mass across depths.
use std::collections::HashMap;

use tracing::debug;

use crate::model::{path, Entry, Platform};

/// Immutable index over one dataset's entries.
pub struct PathIndex<'a> {
    entries: &'a [Entry],
    platform: Platform,
    /// Entry positions sorted by normalised segment sequence.
    order: Vec<u32>,
    /// Normalised lookup key per entry, aligned with `entries`.
    keys: Vec<String>,
    by_key: HashMap<String, u32>,
}

/// One prefix group produced by [`PathIndex::groups_at_depth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderGroup {
    /// Display path: the original path truncated at the group depth.
    pub path: String,
    /// Total file bytes under this prefix.
    pub size: u64,
}

impl<'a> PathIndex<'a> {
    /// Build the index: normalise keys, sort by segments, map paths to
    /// positions. Duplicate paths violate the dataset invariant; the first
    /// occurrence wins and the duplicate is logged.
    pub fn build(entries: &'a [Entry], platform: Platform) -> Self {
        let fold = platform.case_insensitive();
        let keys: Vec<String> = entries.iter().map(|e| path::key(&e.path, fold)).collect();

        let mut order: Vec<u32> = (0..entries.len() as u32).collect();
        order.sort_unstable_by(|&a, &b| {
            let (ka, kb) = (&keys[a as usize], &keys[b as usize]);
            path::segments(ka)
                .cmp(path::segments(kb))
                .then_with(|| ka.cmp(kb))
        });

        let mut by_key: HashMap<String, u32> = HashMap::with_capacity(entries.len());
        for (i, key) in keys.iter().enumerate() {
            if let Some(first) = by_key.get(key) {
                debug!(path = %entries[i].path, kept = %entries[*first as usize].path,
                    "duplicate path in snapshot; keeping first");
                continue;
            }
            by_key.insert(key.clone(), i as u32);
        }

        Self {
            entries,
            platform,
            order,
            keys,
            by_key,
        }
    }

    pub fn entries(&self) -> &'a [Entry] {
        self.entries
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Look an entry up by path, applying the platform's case policy.
    pub fn get(&self, path_str: &str) -> Option<&'a Entry> {
        let key = path::key(path_str, self.platform.case_insensitive());
        self.by_key
            .get(&key)
            .map(|&i| &self.entries[i as usize])
    }

    /// Normalised key for a path under this index's case policy.
    pub fn key_for(&self, path_str: &str) -> String {
        path::key(path_str, self.platform.case_insensitive())
    }

    /// Iterate entry positions in sorted segment order.
    pub(crate) fn sorted_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().map(|&i| i as usize)
    }

    pub(crate) fn key_at(&self, position: usize) -> &str {
        &self.keys[position]
    }

    /// Group every entry by its path truncated to `depth` components below
    /// the scan root, clamped to the entry's own depth for shallower
    /// entries. Each group's size is the sum of its file entries' bytes, so
    /// for any D1 < D2 the D2 groups under one D1 group sum exactly to it.
    pub fn groups_at_depth(&self, depth: usize) -> Vec<FolderGroup> {
        let depth = depth.max(1);
        let mut groups: Vec<FolderGroup> = Vec::new();
        let mut current: Option<(String, FolderGroup)> = None;

        for i in self.sorted_positions() {
            let entry = &self.entries[i];
            let key_prefix = path::truncate(&self.keys[i], depth);
            let file_bytes = if entry.is_dir { 0 } else { entry.size };

            match &mut current {
                Some((prefix, group)) if prefix.as_str() == key_prefix => {
                    group.size += file_bytes;
                }
                _ => {
                    if let Some((_, group)) = current.take() {
                        groups.push(group);
                    }
                    let display =
                        path::truncate(entry.path.trim_end_matches(['/', '\\']), depth).to_owned();
                    current = Some((
                        key_prefix.to_owned(),
                        FolderGroup {
                            path: display,
                            size: file_bytes,
                        },
                    ));
                }
            }
        }
        if let Some((_, group)) = current {
            groups.push(group);
        }
        groups
    }

    /// Sum of file bytes strictly under the given path.
    pub fn subtree_file_size(&self, path_str: &str) -> u64 {
        let target = self.key_for(path_str);
        self.entries
            .iter()
            .zip(&self.keys)
            .filter(|(e, k)| !e.is_dir && path::is_descendant(k, &target))
            .map(|(e, _)| e.size)
            .sum()
    }

    /// `true` if any entry lies strictly under the given normalised key.
    pub fn has_descendants(&self, target_key: &str) -> bool {
        self.keys.iter().any(|k| path::is_descendant(k, target_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, size: u64) -> Entry {
        Entry::new(path.to_owned(), size, false, None)
    }

    fn dir(path: &str) -> Entry {
        Entry::new(path.to_owned(), 0, true, None)
    }

    fn sample() -> Vec<Entry> {
        vec![
            dir("/u"),
            dir("/u/proj"),
            file("/u/proj/main.rs", 100),
            file("/u/proj/lib.rs", 200),
            dir("/u/media"),
            file("/u/media/clip.mp4", 700),
            file("/u/readme.txt", 50),
        ]
    }

    #[test]
    fn lookup_by_path() {
        let entries = sample();
        let index = PathIndex::build(&entries, Platform::Unix);
        assert_eq!(index.get("/u/proj/main.rs").unwrap().size, 100);
        assert!(index.get("/u/PROJ/main.rs").is_none(), "unix is case-sensitive");
    }

    #[test]
    fn lookup_folds_case_on_windows() {
        let entries = vec![file("C:\\Users\\Jane\\File.TXT", 10)];
        let index = PathIndex::build(&entries, Platform::Windows);
        assert!(index.get("c:\\users\\jane\\file.txt").is_some());
    }

    #[test]
    fn groups_sum_file_bytes_only() {
        let entries = sample();
        let index = PathIndex::build(&entries, Platform::Unix);
        let groups = index.groups_at_depth(2);
        let find = |p: &str| groups.iter().find(|g| g.path == p).map(|g| g.size);
        assert_eq!(find("/u/proj"), Some(300));
        assert_eq!(find("/u/media"), Some(700));
        // The shallow file is clamped to its own depth.
        assert_eq!(find("/u/readme.txt"), Some(50));
        // The /u directory row is its own zero-byte group at depth 1 comps.
        assert_eq!(find("/u"), Some(0));
    }

    /// Mass conservation: for D1 < D2 the deeper groups under one shallow
    /// group sum to exactly the shallow group's size.
    #[test]
    fn groups_conserve_mass_across_depths() {
        let entries = vec![
            dir("/u"),
            dir("/u/a"),
            file("/u/a/x.bin", 10),
            dir("/u/a/sub"),
            file("/u/a/sub/y.bin", 20),
            file("/u/a/sub/z.bin", 30),
            file("/u/top.bin", 5),
        ];
        let index = PathIndex::build(&entries, Platform::Unix);
        for (d1, d2) in [(1usize, 2usize), (1, 3), (2, 3)] {
            let shallow = index.groups_at_depth(d1);
            let deep = index.groups_at_depth(d2);
            for group in &shallow {
                let nested: u64 = deep
                    .iter()
                    .filter(|g| {
                        g.path == group.path
                            || path::is_descendant(
                                &path::key(&g.path, false),
                                &path::key(&group.path, false),
                            )
                    })
                    .map(|g| g.size)
                    .sum();
                assert_eq!(nested, group.size, "mass lost between depth {d1} and {d2}");
            }
        }
    }

    /// Raw byte order would split this group: '!' sorts before '/'.
    #[test]
    fn segment_sort_keeps_groups_contiguous() {
        let entries = vec![
            dir("/a"),
            file("/a!side", 1),
            file("/a/inner.bin", 2),
            file("/a/zz.bin", 3),
        ];
        let index = PathIndex::build(&entries, Platform::Unix);
        let groups = index.groups_at_depth(1);
        let a = groups.iter().find(|g| g.path == "/a").unwrap();
        assert_eq!(a.size, 5);
        let side = groups.iter().find(|g| g.path == "/a!side").unwrap();
        assert_eq!(side.size, 1);
    }

    #[test]
    fn subtree_size_ignores_directory_rows() {
        let entries = sample();
        let index = PathIndex::build(&entries, Platform::Unix);
        assert_eq!(index.subtree_file_size("/u"), 1050);
        assert_eq!(index.subtree_file_size("/u/proj"), 300);
        assert_eq!(index.subtree_file_size("/u/none"), 0);
    }
}
