//! Route discovery pipeline: classify, filter, normalize.
//!
//! Each stage is a pure function over its input and returns a new list;
//! nothing here writes to the file system.

pub mod discover;
pub mod filter;
pub mod normalize;

pub use discover::{discover_routes, resolve_route_root, walk_routes, ScanRules};
pub use filter::{apply_filters, compile_rules, FilterRule};
pub use normalize::normalize_routes;
