/// Analysis modules — aggregate and drill-down queries over one dataset.

pub mod age;
pub mod cleanable;
pub mod file_types;
pub mod folders;
pub mod largest;
pub mod summary;

pub use age::{find_stale, StaleFile};
pub use cleanable::{cleanable, CategoryGroup};
pub use file_types::{by_type, ExtensionStat};
pub use folders::{folder, top_folders, FolderChild, FolderView};
pub use largest::largest;
pub use summary::{summarise, Summary};

use crate::model::Entry;

/// Shared ordering for size-ranked listings: bytes descending, then path
/// ascending so equal sizes rank deterministically.
pub(crate) fn by_size_desc_then_path(a: &Entry, b: &Entry) -> std::cmp::Ordering {
    b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path))
}
