/// A single filesystem object from the ingested snapshot.
use chrono::NaiveDateTime;
use compact_str::CompactString;

use super::path;

/// One file or directory record.
///
/// Entries are immutable once ingested; every query recomputes its results
/// from these fields. Hierarchy is never stored — ancestor/descendant
/// relationships are reconstructed from the path string on demand, so there
/// is no parent/child graph to keep consistent.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Absolute path as reported by the snapshot producer. Unique within
    /// one dataset.
    pub path: String,

    /// Final path component.
    pub name: CompactString,

    /// `true` if this record is a directory.
    pub is_dir: bool,

    /// Size in bytes. For directories this is whatever the producer
    /// reported (possibly zero); rollup math never trusts it and always
    /// re-derives folder sizes from descendant file bytes.
    pub size: u64,

    /// Lowercased extension including the leading dot (`.log`), empty for
    /// directories and extensionless files.
    pub ext: CompactString,

    /// Number of path components below the scan root.
    pub depth: u32,

    /// Last-modified timestamp, when the snapshot carried one.
    pub modified: Option<NaiveDateTime>,
}

impl Entry {
    /// Build an entry, deriving `name`, `ext`, and `depth` from the path.
    pub fn new(path: String, size: u64, is_dir: bool, modified: Option<NaiveDateTime>) -> Self {
        let trimmed = path.trim_end_matches(['/', '\\']);
        let name = CompactString::new(path::segments(trimmed).last().unwrap_or(trimmed));
        let ext = if is_dir {
            CompactString::const_new("")
        } else {
            extension_of(&name)
        };
        let depth = path::depth(trimmed);
        Self {
            path,
            name,
            is_dir,
            size,
            ext,
            depth,
            modified,
        }
    }
}

/// Lowercased suffix of a file name, with the leading dot.
///
/// Mirrors the usual suffix rules: a leading dot is not an extension
/// (`.bashrc` has none) and neither is a trailing one (`archive.`).
fn extension_of(name: &str) -> CompactString {
    match name.rfind('.') {
        Some(i) if i > 0 && i + 1 < name.len() => CompactString::new(name[i..].to_lowercase()),
        _ => CompactString::const_new(""),
    }
}
