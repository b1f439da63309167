/// File age analysis — find large files that have not been touched in a
/// long time, using the snapshot's modified-time column.
use chrono::NaiveDateTime;

use crate::model::Entry;

use super::by_size_desc_then_path;

/// A file identified as stale.
#[derive(Debug, Clone)]
pub struct StaleFile<'a> {
    pub entry: &'a Entry,
    pub age_days: u64,
}

/// Files whose modified time is at least `min_age_days` before `now`,
/// sorted by size descending, capped at `max_results`.
///
/// `now` is a parameter rather than the wall clock so results are
/// reproducible against a fixed snapshot. Files without a parsable
/// timestamp are skipped. The zero-cap guard also prevents the
/// `max_results - 1` pivot from underflowing in the partial sort.
pub fn find_stale<'a>(
    entries: &'a [Entry],
    now: NaiveDateTime,
    min_age_days: u64,
    max_results: usize,
) -> Vec<StaleFile<'a>> {
    if max_results == 0 {
        return Vec::new();
    }

    let mut stale: Vec<StaleFile<'a>> = entries
        .iter()
        .filter_map(|entry| {
            if entry.is_dir {
                return None;
            }
            let modified = entry.modified?;
            let age_days = (now - modified).num_days().max(0) as u64;
            if age_days >= min_age_days {
                Some(StaleFile { entry, age_days })
            } else {
                None
            }
        })
        .collect();

    if stale.len() > max_results {
        stale.select_nth_unstable_by(max_results - 1, |a, b| {
            by_size_desc_then_path(a.entry, b.entry)
        });
        stale.truncate(max_results);
    }
    stale.sort_unstable_by(|a, b| by_size_desc_then_path(a.entry, b.entry));
    stale
}
