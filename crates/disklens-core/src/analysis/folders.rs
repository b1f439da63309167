/// Folder rankings and drill-down views.
use std::collections::HashMap;

use crate::index::{FolderGroup, PathIndex};
use crate::model::path;

/// The `limit` largest folder groups at `depth` components below the scan
/// root. Totals come from [`PathIndex::groups_at_depth`], so they are file
/// bytes only; size ties rank by path ascending.
pub fn top_folders(index: &PathIndex<'_>, depth: usize, limit: usize) -> Vec<FolderGroup> {
    let mut groups = index.groups_at_depth(depth);
    groups.sort_unstable_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    groups.truncate(limit);
    groups
}

/// One row of a folder drill-down listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderChild {
    pub path: String,
    pub size: u64,
    pub is_dir: bool,
}

/// A folder drill-down result. An unknown path yields an empty view with
/// `self_size` zero — a query miss, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderView {
    pub path: String,
    pub self_size: u64,
    pub children: Vec<FolderChild>,
}

/// Explore `target`: entries up to `depth` levels below it, largest first,
/// capped at `limit`.
///
/// Directory children report their recomputed rollup (file bytes under
/// them); the producer's own directory size is only a fallback for
/// snapshots that carry no file rows at all under the prefix. The same
/// policy applies to `self_size`.
pub fn folder(index: &PathIndex<'_>, target: &str, depth: usize, limit: usize) -> FolderView {
    let depth = depth.max(1);
    let target_key = index.key_for(target);
    let target_depth = path::depth(&target_key) as usize;
    let display_path = target.trim_end_matches(['/', '\\']).to_owned();

    let target_entry = index.get(target);
    if target_entry.is_none() && !index.has_descendants(&target_key) {
        return FolderView {
            path: display_path,
            self_size: 0,
            children: Vec::new(),
        };
    }

    // One pass over the subtree: collect the visible children and roll
    // every descendant file's bytes up into each displayed ancestor slot.
    let mut self_size = 0u64;
    let mut visible: Vec<usize> = Vec::new();
    let mut rollup: HashMap<String, u64> = HashMap::new();

    for i in index.sorted_positions() {
        let key = index.key_at(i);
        if !path::is_descendant(key, &target_key) {
            continue;
        }
        let entry = &index.entries()[i];
        let rel_depth = (entry.depth as usize).saturating_sub(target_depth);
        if (1..=depth).contains(&rel_depth) {
            visible.push(i);
        }
        if !entry.is_dir {
            self_size += entry.size;
            for level in 1..rel_depth.min(depth.saturating_add(1)) {
                let prefix = path::truncate(key, target_depth + level);
                *rollup.entry(prefix.to_owned()).or_insert(0) += entry.size;
            }
        }
    }

    let mut children: Vec<FolderChild> = visible
        .into_iter()
        .map(|i| {
            let entry = &index.entries()[i];
            let size = if entry.is_dir {
                let bytes = rollup.get(index.key_at(i)).copied().unwrap_or(0);
                if bytes > 0 {
                    bytes
                } else {
                    entry.size
                }
            } else {
                entry.size
            };
            FolderChild {
                path: entry.path.trim_end_matches(['/', '\\']).to_owned(),
                size,
                is_dir: entry.is_dir,
            }
        })
        .collect();
    children.sort_unstable_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    children.truncate(limit);

    if self_size == 0 {
        if let Some(entry) = target_entry {
            self_size = entry.size;
        }
    }

    FolderView {
        path: display_path,
        self_size,
        children,
    }
}
