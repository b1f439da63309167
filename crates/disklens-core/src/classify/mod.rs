/// Cleanup classification engine.
///
/// Classification is a pure function of one entry against an ordered,
/// declarative rule table: the first matching rule wins, and an entry that
/// matches nothing is [`Category::Other`]. Rules differ per platform only in
/// which table is active ([`crate::model::Platform::rules`]); the engine is
/// shared and holds no state, so the same entry always classifies the same
/// way regardless of processing order or batching.
pub mod rules;

use serde::Serialize;

use crate::model::Entry;

/// Cleanup category assigned to an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Temp,
    Cache,
    Log,
    Dev,
    Browser,
    Backup,
    Download,
    Duplicate,
    System,
    Other,
}

impl Category {
    /// Stable lowercase label, matching the serialised form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Temp => "temp",
            Self::Cache => "cache",
            Self::Log => "log",
            Self::Dev => "dev",
            Self::Browser => "browser",
            Self::Backup => "backup",
            Self::Download => "download",
            Self::Duplicate => "duplicate",
            Self::System => "system",
            Self::Other => "other",
        }
    }
}

/// How safe it is to delete what a rule matched.
///
/// `Safe` regenerates automatically, `Check` deserves a look first, and
/// `Admin` needs elevated rights or a system setting to reclaim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Safety {
    Safe,
    Check,
    Admin,
}

/// Declarative predicate kinds a rule can use.
///
/// Matching is case-insensitive: `path` and `name` arrive pre-lowercased
/// and every pattern in the tables is written in lowercase. Patterns embed
/// the separator convention of their platform's table.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Path contains the substring.
    PathContains(&'static str),
    /// Path contains every one of the substrings, in any position.
    PathContainsAll(&'static [&'static str]),
    /// Path contains the substring and the extension is in the set.
    PathContainsExt(&'static str, &'static [&'static str]),
    /// Final component equals one of the names exactly.
    NameIs(&'static [&'static str]),
    /// Final component ends with one of the suffixes.
    NameEndsWith(&'static [&'static str]),
    /// File extension is in the set. Never matches directories.
    ExtIn(&'static [&'static str]),
    /// Rotated log name: contains `.log.` with a numeric tail (`app.log.3`).
    RotatedLog,
    /// Numbered duplicate: stem ends in `(N)` and the extension is in the
    /// set (`photo (2).jpg`).
    NumberedCopy(&'static [&'static str]),
    /// Copy-suffix duplicate: stem ends in `copy` preceded by a space or
    /// dash, extension in the set (`movie - copy.mp4`).
    CopySuffix(&'static [&'static str]),
}

/// Membership test for the small static sets rules carry.
fn in_set(set: &[&str], value: &str) -> bool {
    set.iter().any(|s| *s == value)
}

impl Matcher {
    fn matches(&self, path: &str, name: &str, ext: &str, is_dir: bool) -> bool {
        match *self {
            Self::PathContains(sub) => path.contains(sub),
            Self::PathContainsAll(subs) => subs.iter().all(|s| path.contains(s)),
            Self::PathContainsExt(sub, exts) => {
                !is_dir && path.contains(sub) && in_set(exts, ext)
            }
            Self::NameIs(names) => in_set(names, name),
            Self::NameEndsWith(suffixes) => suffixes.iter().any(|s| name.ends_with(s)),
            Self::ExtIn(exts) => !is_dir && in_set(exts, ext),
            Self::RotatedLog => {
                !is_dir
                    && name
                        .rsplit_once('.')
                        .is_some_and(|(stem, tail)| {
                            stem.ends_with(".log")
                                && !tail.is_empty()
                                && tail.bytes().all(|b| b.is_ascii_digit())
                        })
            }
            Self::NumberedCopy(exts) => {
                !is_dir && in_set(exts, ext) && stem_of(name).is_some_and(is_numbered_stem)
            }
            Self::CopySuffix(exts) => {
                !is_dir && in_set(exts, ext) && stem_of(name).is_some_and(is_copy_stem)
            }
        }
    }
}

/// One row of a classification table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub safety: Safety,
    pub matcher: Matcher,
    pub reason: &'static str,
    pub migration_hint: Option<&'static str>,
}

/// A derived, read-only classification result. Recomputed per query.
#[derive(Debug, Clone, Copy)]
pub struct Classification<'a> {
    pub entry: &'a Entry,
    pub category: Category,
    pub safety: Safety,
    pub reason: Option<&'static str>,
    pub migration_hint: Option<&'static str>,
}

/// Find the first rule in the table that matches the entry, or `None` when
/// the entry is uncategorised (`other`).
pub fn match_rule(entry: &Entry, table: &'static [Rule]) -> Option<&'static Rule> {
    let path = entry.path.to_lowercase();
    let name = entry.name.to_lowercase();
    table
        .iter()
        .find(|rule| rule.matcher.matches(&path, &name, &entry.ext, entry.is_dir))
}

/// Classify one entry against the table. Entries matching no rule come back
/// as [`Category::Other`] with [`Safety::Check`] and no reason.
pub fn classify<'a>(entry: &'a Entry, table: &'static [Rule]) -> Classification<'a> {
    match match_rule(entry, table) {
        Some(rule) => Classification {
            entry,
            category: rule.category,
            safety: rule.safety,
            reason: Some(rule.reason),
            migration_hint: rule.migration_hint,
        },
        None => Classification {
            entry,
            category: Category::Other,
            safety: Safety::Check,
            reason: None,
            migration_hint: None,
        },
    }
}

/// File name without its extension, `None` when there is no extension.
fn stem_of(name: &str) -> Option<&str> {
    name.rfind('.').filter(|&i| i > 0).map(|i| &name[..i])
}

/// `true` for stems ending in `(N)` with at least one digit: `img (3)`.
fn is_numbered_stem(stem: &str) -> bool {
    let Some(open) = stem.rfind('(') else {
        return false;
    };
    let Some(inner) = stem[open + 1..].strip_suffix(')') else {
        return false;
    };
    !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit())
}

/// `true` for stems ending in `copy` preceded by whitespace or a dash.
fn is_copy_stem(stem: &str) -> bool {
    stem.strip_suffix("copy")
        .and_then(|rest| rest.chars().next_back())
        .is_some_and(|c| c.is_whitespace() || c == '-')
}
