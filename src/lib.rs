//! # Eventpath - path-based field access for event records
//!
//! Read and write values in nested JSON event records, addressed by
//! slash-delimited key paths such as `user/address/city`.
//!
//! ## Modules
//!
//! - **jsonpath**: parse path expressions and traverse records through them
//! - **stream**: apply a path set to a newline-delimited event stream
//! - **config**: load path configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use eventpath::{JsonPaths, Record};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let paths = JsonPaths::new(["user/id", "context/ip"]);
//!
//! let mut event: Record = serde_json::from_value(json!({"user": {"id": 42}}))?;
//! let extraction = paths.get(&event);
//! assert!(extraction.any_found);
//! assert_eq!(extraction.values["user/id"], json!(42));
//! assert_eq!(extraction.values["context/ip"], json!(null));
//!
//! let values = serde_json::from_value(json!({"context/ip": "10.0.0.1"}))?;
//! paths.set(&mut event, &values)?;
//! assert_eq!(event["context"]["ip"], json!("10.0.0.1"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod jsonpath;
pub mod report;
pub mod stream;
pub mod types;
pub mod writer;

// Re-export commonly used types for convenience
pub use config::PathsConfig;
pub use error::PathError;
pub use jsonpath::{JsonPaths, Path, SingleJsonPath};
pub use report::ErrorResponse;
pub use stream::{extract_events, inject_events, StreamStats};
pub use types::{Extraction, Record};
pub use writer::RecordWriter;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_round_trip() {
        let paths = JsonPaths::new(["user/address/city"]);
        let mut event = Record::new();

        let values = serde_json::from_value(json!({"user/address/city": "Oslo"})).unwrap();
        paths.set(&mut event, &values).unwrap();

        let extraction = paths.get(&event);
        assert!(extraction.any_found);
        assert_eq!(extraction.values["user/address/city"], json!("Oslo"));
    }
}
