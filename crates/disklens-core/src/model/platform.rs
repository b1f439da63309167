/// Platform parameterisation — one engine, pluggable per-platform knobs.
///
/// The only things that differ between operating systems are the path
/// separator, the default case policy, and which classification rules are
/// present (a hibernation-file rule makes no sense on Unix). Everything
/// else is shared; there are no platform branches inside the engine.
use crate::classify::{rules, Rule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this binary is running on. Snapshots from another
    /// platform can still be analysed by passing the platform explicitly.
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Preferred separator when rebuilding display paths.
    pub fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Unix => '/',
        }
    }

    /// Default case policy for name/path matching: Windows filesystems are
    /// case-insensitive, Unix ones are not. Search accepts an override per
    /// invocation.
    pub fn case_insensitive(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// The ordered classification rule table for this platform.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Self::Windows => rules::WINDOWS_RULES,
            Self::Unix => rules::UNIX_RULES,
        }
    }
}
