/// Data model for snapshot entries.
///
/// Re-exports the entry record and the supporting path/size/platform types.
pub mod entry;
pub mod path;
pub mod platform;
pub mod size;

pub use entry::Entry;
pub use platform::Platform;
