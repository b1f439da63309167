/// The condition-filter language: `size>1GB,ext=.log,path~Downloads`.
///
/// A comma-separated list of conditions, AND-combined. Fields are `size`,
/// `ext`, `path`, and `name`; operators are `>` `<` `>=` `<=` `=` and `~`
/// (substring containment). Sizes accept `KB`/`MB`/`GB`/`TB` suffixes with
/// base-1024 semantics. A condition that does not parse is an argument
/// error naming the offending fragment — never silently ignored.
use crate::analysis::by_size_desc_then_path;
use crate::error::Error;
use crate::model::{size, Entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Size,
    Ext,
    Path,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
    Contains,
}

/// One parsed condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: Field,
    pub op: Op,
    value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Bytes(u64),
    /// Lowercased text; extension values are normalised to a leading dot.
    Text(String),
}

/// Operators listed longest-first so `>=` wins over `>` at the same
/// position.
const OPERATORS: [(&str, Op); 6] = [
    (">=", Op::Ge),
    ("<=", Op::Le),
    (">", Op::Gt),
    ("<", Op::Lt),
    ("=", Op::Eq),
    ("~", Op::Contains),
];

/// Parse a comma-separated condition list.
pub fn parse_conditions(input: &str) -> Result<Vec<Condition>, Error> {
    let fragments: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();
    if fragments.is_empty() {
        return Err(Error::argument(input, "no filter conditions given"));
    }
    fragments.into_iter().map(parse_condition).collect()
}

fn parse_condition(fragment: &str) -> Result<Condition, Error> {
    let found = OPERATORS
        .iter()
        .filter_map(|&(symbol, op)| fragment.find(symbol).map(|at| (at, symbol, op)))
        .min_by_key(|&(at, symbol, _)| (at, std::cmp::Reverse(symbol.len())));
    let Some((at, symbol, op)) = found else {
        return Err(Error::argument(
            fragment,
            "expected an operator: > < >= <= = ~",
        ));
    };

    let field = match fragment[..at].trim().to_lowercase().as_str() {
        "size" => Field::Size,
        "ext" => Field::Ext,
        "path" => Field::Path,
        "name" => Field::Name,
        other => {
            return Err(Error::argument(
                fragment,
                format!("unknown field '{other}' (expected size, ext, path, or name)"),
            ))
        }
    };

    let raw_value = fragment[at + symbol.len()..].trim();
    if raw_value.is_empty() {
        return Err(Error::argument(fragment, "missing value after operator"));
    }

    let value = match field {
        Field::Size => {
            if op == Op::Contains {
                return Err(Error::argument(fragment, "'~' does not apply to size"));
            }
            let bytes = size::parse_size(raw_value).ok_or_else(|| {
                Error::argument(fragment, format!("unparsable size '{raw_value}'"))
            })?;
            Value::Bytes(bytes)
        }
        Field::Ext => {
            if op != Op::Eq {
                return Err(Error::argument(fragment, "ext supports '=' only"));
            }
            let lower = raw_value.to_lowercase();
            let normalised = if lower.starts_with('.') {
                lower
            } else {
                format!(".{lower}")
            };
            Value::Text(normalised)
        }
        Field::Path | Field::Name => {
            if !matches!(op, Op::Eq | Op::Contains) {
                return Err(Error::argument(
                    fragment,
                    "path and name support '=' and '~' only",
                ));
            }
            Value::Text(raw_value.to_lowercase())
        }
    };

    Ok(Condition { field, op, value })
}

impl Condition {
    /// Evaluate against one entry. Text comparison is case-insensitive,
    /// matching how both snapshot producers behave.
    fn matches(&self, entry: &Entry) -> bool {
        match (&self.value, self.field) {
            (Value::Bytes(bytes), Field::Size) => match self.op {
                Op::Gt => entry.size > *bytes,
                Op::Lt => entry.size < *bytes,
                Op::Ge => entry.size >= *bytes,
                Op::Le => entry.size <= *bytes,
                Op::Eq => entry.size == *bytes,
                Op::Contains => false,
            },
            (Value::Text(text), Field::Ext) => entry.ext.as_str() == text.as_str(),
            (Value::Text(text), Field::Path) => {
                let path = entry.path.to_lowercase();
                match self.op {
                    Op::Contains => path.contains(text.as_str()),
                    _ => path == *text,
                }
            }
            (Value::Text(text), Field::Name) => {
                let name = entry.name.to_lowercase();
                match self.op {
                    Op::Contains => name.contains(text.as_str()),
                    _ => name == *text,
                }
            }
            _ => false,
        }
    }
}

/// Apply a condition list to the dataset: file entries matching every
/// condition, size descending with lexical tie-break, capped at `limit`.
pub fn run_filter<'a>(
    entries: &'a [Entry],
    conditions: &[Condition],
    limit: usize,
) -> Vec<&'a Entry> {
    let mut matches: Vec<&Entry> = entries
        .iter()
        .filter(|e| !e.is_dir && conditions.iter().all(|c| c.matches(e)))
        .collect();
    matches.sort_unstable_by(|a, b| by_size_desc_then_path(a, b));
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, size: u64) -> Entry {
        Entry::new(path.to_owned(), size, false, None)
    }

    fn apply<'a>(entries: &'a [Entry], input: &str) -> Vec<&'a Entry> {
        run_filter(entries, &parse_conditions(input).unwrap(), 100)
    }

    /// `size>1GB,ext=.log` keeps the big log and drops the big zip.
    #[test]
    fn size_and_extension_conditions_combine_with_and() {
        let entries = vec![
            file("/u/server.log", 2 << 30),
            file("/u/archive.zip", 2 << 30),
            file("/u/small.log", 100),
        ];
        let found = apply(&entries, "size>1GB,ext=.log");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "/u/server.log");
    }

    #[test]
    fn extension_value_gets_a_leading_dot() {
        let entries = vec![file("/u/app.log", 10)];
        assert_eq!(apply(&entries, "ext=log").len(), 1);
        assert_eq!(apply(&entries, "ext=.LOG").len(), 1);
    }

    #[test]
    fn path_containment_is_case_insensitive() {
        let entries = vec![file("/u/Downloads/setup.exe", 10), file("/u/docs/a.txt", 5)];
        let found = apply(&entries, "path~downloads");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "/u/Downloads/setup.exe");
    }

    #[test]
    fn size_bounds_work_inclusively_and_exclusively() {
        let entries = vec![file("/a", 1024), file("/b", 1025)];
        assert_eq!(apply(&entries, "size>1KB").len(), 1);
        assert_eq!(apply(&entries, "size>=1KB").len(), 2);
        assert_eq!(apply(&entries, "size=1KB")[0].path, "/a");
    }

    #[test]
    fn directories_never_match() {
        let entries = vec![Entry::new("/u/logs".to_owned(), 1 << 30, true, None)];
        assert!(apply(&entries, "size>0").is_empty());
    }

    #[test]
    fn malformed_conditions_name_the_fragment() {
        let err = parse_conditions("size>1GB,bogus").unwrap_err();
        match err {
            Error::Argument { fragment, .. } => assert_eq!(fragment, "bogus"),
            other => panic!("expected argument error, got {other:?}"),
        }

        assert!(parse_conditions("speed>9000").is_err());
        assert!(parse_conditions("size~1GB").is_err());
        assert!(parse_conditions("size>big").is_err());
        assert!(parse_conditions("ext>.log").is_err());
        assert!(parse_conditions("name>x").is_err());
        assert!(parse_conditions("size>").is_err());
        assert!(parse_conditions("").is_err());
    }

    #[test]
    fn operator_at_same_position_prefers_two_characters() {
        let c = parse_conditions("size>=10").unwrap();
        assert_eq!(c[0].op, Op::Ge);
    }

    #[test]
    fn results_rank_size_desc() {
        let entries = vec![file("/a", 1), file("/b", 3), file("/c", 2)];
        let found = apply(&entries, "size>0");
        let paths: Vec<&str> = found.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["/b", "/c", "/a"]);
    }
}
