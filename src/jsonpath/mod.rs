//! Slash-delimited path access into nested event records
//!
//! A path expression such as `user/address/city` addresses one slot in a
//! record. Each segment indexes into an object; arrays and scalars are never
//! traversed.
//!
//! - `Path`: parsed expression and its segments
//! - `SingleJsonPath`: read and write through one path
//! - `JsonPaths`: batched read and write through many paths

pub mod path;
pub mod single;
pub mod paths;

pub use path::Path;
pub use single::SingleJsonPath;
pub use paths::JsonPaths;
