/// Glob search over entry names and paths.
use glob::{MatchOptions, Pattern};

use crate::analysis::by_size_desc_then_path;
use crate::error::Error;
use crate::model::Entry;

/// Match entries against a glob pattern (`*`, `?`, `[...]`).
///
/// The pattern is a full match, not a substring search: `*.tmp` matches
/// `a.tmp` but not `a.tmp.bak`. It applies to the entry name unless the
/// pattern itself contains a path separator, in which case the whole path
/// is matched. Case sensitivity is the caller's policy (platform default,
/// overridable per invocation). Results are size descending with lexical
/// tie-break, capped at `limit`.
pub fn search<'a>(
    entries: &'a [Entry],
    pattern: &str,
    case_insensitive: bool,
    limit: usize,
) -> Result<Vec<&'a Entry>, Error> {
    let compiled = Pattern::new(pattern)
        .map_err(|err| Error::argument(pattern, format!("bad glob pattern: {}", err.msg)))?;
    let options = MatchOptions {
        case_sensitive: !case_insensitive,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };
    let against_path = pattern.contains(['/', '\\']);

    let mut matches: Vec<&Entry> = entries
        .iter()
        .filter(|entry| {
            let target = if against_path {
                entry.path.as_str()
            } else {
                entry.name.as_str()
            };
            compiled.matches_with(target, options)
        })
        .collect();
    matches.sort_unstable_by(|a, b| by_size_desc_then_path(a, b));
    matches.truncate(limit);
    Ok(matches)
}
