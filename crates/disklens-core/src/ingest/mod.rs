/// Snapshot ingestion — streams tabular rows into typed entries.
///
/// The reader holds one CSV record in memory at a time; peak memory is the
/// constructed entry vector, never the input text. A malformed row (missing
/// path, unparsable size) is skipped and counted, and the count surfaces in
/// the `summary` diagnostics. A missing or unreadable input source, or a
/// file with rows but no recognisable header, is fatal. Restarting the
/// sequence means rescanning the source; there is no rewind.
pub mod columns;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use tracing::{debug, trace};

use crate::error::Error;
use crate::model::{size, Entry};
use columns::ColumnMap;

/// Timestamp formats the known producers emit.
const MODIFIED_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// One ingested snapshot: the entries plus the skipped-row diagnostic.
#[derive(Debug, Default)]
pub struct Dataset {
    pub entries: Vec<Entry>,
    pub skipped_rows: u64,
}

/// Why a row was skipped. Skips are recoverable by design; they are counted
/// and reported, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowSkip {
    MissingPath,
    BadSize,
}

/// Read a snapshot CSV from disk.
pub fn read_snapshot(path: &Path) -> Result<Dataset, Error> {
    let file = File::open(path).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })?;
    read_from(BufReader::new(file)).ok_or_else(|| Error::Header {
        path: path.to_path_buf(),
    })
}

/// Stream rows from any reader. Returns `None` when the input contained
/// rows but no recognisable header — column names are matched tolerantly,
/// never assumed positionally. A completely empty input is a valid empty
/// dataset, not an error.
fn read_from<R: io::Read>(reader: R) -> Option<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut record = StringRecord::new();
    let mut map: Option<ColumnMap> = None;
    let mut dataset = Dataset::default();
    let mut saw_rows = false;

    loop {
        match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(err) => {
                saw_rows = true;
                if err.is_io_error() {
                    debug!(%err, "aborting read: snapshot stream failed");
                    break;
                }
                if map.is_some() {
                    trace!(%err, "skipping unreadable row");
                    dataset.skipped_rows += 1;
                }
                continue;
            }
        }
        saw_rows = true;

        let Some(columns) = &map else {
            // Preamble handling: WizTree exports lead with a
            // "Generated by ..." banner line before the header.
            if is_banner(&record) {
                continue;
            }
            if let Some(detected) = ColumnMap::detect(&record) {
                debug!(?detected, "resolved snapshot columns");
                map = Some(detected);
            }
            continue;
        };

        match parse_row(columns, &record) {
            Ok(entry) => dataset.entries.push(entry),
            Err(reason) => {
                trace!(?reason, row = ?record, "skipping malformed row");
                dataset.skipped_rows += 1;
            }
        }
    }

    if map.is_none() && saw_rows {
        return None;
    }
    Some(dataset)
}

fn is_banner(record: &StringRecord) -> bool {
    record
        .get(0)
        .is_some_and(|c| c.trim_start_matches('\u{feff}').trim().to_lowercase().starts_with("generated"))
}

fn parse_row(map: &ColumnMap, record: &StringRecord) -> Result<Entry, RowSkip> {
    let path = record
        .get(map.path)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or(RowSkip::MissingPath)?;

    let raw_size = record.get(map.size_column()).unwrap_or("").trim();
    let size = if raw_size.is_empty() {
        0
    } else {
        size::parse_size(raw_size).ok_or(RowSkip::BadSize)?
    };

    let modified = map
        .modified
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(parse_modified);

    let is_dir = interpret_is_dir(map, record, path);

    Ok(Entry::new(path.to_owned(), size, is_dir, modified))
}

/// Parse the optional modified-time column. An unrecognisable timestamp
/// leaves the field empty rather than skipping the row.
fn parse_modified(value: &str) -> Option<NaiveDateTime> {
    MODIFIED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Decide whether a row is a directory.
///
/// In order of trust: an explicit boolean-ish column, the directory bit of
/// a raw attribute mask (0x10 is FILE_ATTRIBUTE_DIRECTORY), nonzero
/// Files/Folders counts, and finally a trailing separator on the path.
fn interpret_is_dir(map: &ColumnMap, record: &StringRecord, path: &str) -> bool {
    if let Some(flag) = map
        .is_dir
        .and_then(|i| record.get(i))
        .and_then(parse_bool)
    {
        return flag;
    }
    if let Some(mask) = map
        .attributes
        .and_then(|i| record.get(i))
        .and_then(|v| v.trim().parse::<u64>().ok())
    {
        if mask & 0x10 != 0 {
            return true;
        }
    }
    let count_at = |col: Option<usize>| {
        col.and_then(|i| record.get(i))
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0)
    };
    if count_at(map.files) > 0 || count_at(map.folders) > 0 {
        return true;
    }
    path.ends_with(['/', '\\'])
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "d" | "dir" | "directory" | "folder" => Some(true),
        "0" | "false" | "no" | "f" | "file" => Some(false),
        _ => None,
    }
}
