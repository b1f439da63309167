/// Tolerant header matching for snapshot CSVs.
///
/// Producers disagree on column names ("File Name" vs "path", "Size" vs
/// "Allocated") and may reorder columns between versions, so columns are
/// resolved by name, never by position. Unknown columns are ignored.
use csv::StringRecord;

/// Resolved column positions for one snapshot file.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub path: usize,
    /// Logical size column. When absent, `allocated` is the fallback.
    pub size: Option<usize>,
    pub allocated: Option<usize>,
    pub modified: Option<usize>,
    /// Boolean-ish directory column (`is_dir`, `type`, ...).
    pub is_dir: Option<usize>,
    /// Raw attribute bitmask column (WizTree exports one).
    pub attributes: Option<usize>,
    pub files: Option<usize>,
    pub folders: Option<usize>,
}

impl ColumnMap {
    /// Try to interpret a record as the header row. Returns `None` when the
    /// record has no path column or no usable size column — the caller
    /// keeps scanning in that case.
    pub fn detect(record: &StringRecord) -> Option<Self> {
        let mut path = None;
        let mut size = None;
        let mut allocated = None;
        let mut modified = None;
        let mut is_dir = None;
        let mut attributes = None;
        let mut files = None;
        let mut folders = None;

        for (i, raw) in record.iter().enumerate() {
            let label = raw.trim_start_matches('\u{feff}').trim().to_lowercase();
            match label.as_str() {
                "file name" | "filename" | "name" | "path" | "file" => path = Some(i),
                "size" | "size bytes" | "size_bytes" => size = Some(i),
                "allocated" | "allocated size" => allocated = Some(i),
                "modified" | "modified time" | "date modified" | "mtime" => modified = Some(i),
                "is_dir" | "isdir" | "directory" | "folder" | "type" => is_dir = Some(i),
                "attributes" | "attrs" => attributes = Some(i),
                "files" | "files_count" | "file count" => files = Some(i),
                "folders" | "folders_count" | "folder count" => folders = Some(i),
                _ => {}
            }
        }

        let path = path?;
        if size.is_none() && allocated.is_none() {
            return None;
        }
        Some(Self {
            path,
            size,
            allocated,
            modified,
            is_dir,
            attributes,
            files,
            folders,
        })
    }

    /// The column that supplies byte sizes: `size` when present, the
    /// allocated-size alternate otherwise.
    pub fn size_column(&self) -> usize {
        self.size.or(self.allocated).expect("detect() guarantees one")
    }
}
