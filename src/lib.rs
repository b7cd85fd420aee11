pub mod config;
pub mod document;
pub mod error;
pub mod finder;
pub mod path;

// Convenient re-exports
pub use finder::{find, find_all, PathFinder};
pub use path::{Path, PathSegment};
