//! Media storage implementations

mod fs;

pub use fs::FsMediaStore;
