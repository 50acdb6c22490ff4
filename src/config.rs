use crate::jsonpath::JsonPaths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Path configuration, typically loaded once at startup
///
/// ```json
/// { "paths": ["user/id", "context/ip"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path expressions to read or write, in application order
    #[serde(default)]
    pub paths: Vec<String>,
}

impl PathsConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Append expressions given as repeated or comma-separated values
    pub fn extend_from_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.paths.extend(
                arg.as_ref()
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
        }
    }

    /// Append expressions that are not configured yet, keeping existing order
    pub fn include_paths<I, S>(&mut self, expressions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for expression in expressions {
            let expression = expression.as_ref();
            if !self.paths.iter().any(|p| p == expression) {
                self.paths.push(expression.to_string());
            }
        }
    }

    pub fn build(&self) -> JsonPaths {
        JsonPaths::new(self.paths.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"paths": ["user/id", "context/ip"]}}"#).unwrap();

        let config = PathsConfig::from_file(file.path()).unwrap();
        assert_eq!(config.paths, vec!["user/id", "context/ip"]);
        assert_eq!(config.build().to_string(), "[user/id, context/ip]");
    }

    #[test]
    fn test_missing_paths_key_defaults_empty() {
        let config: PathsConfig = serde_json::from_str("{}").unwrap();
        assert!(config.build().is_empty());
    }

    #[test]
    fn test_from_file_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = PathsConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_extend_from_args() {
        let mut config = PathsConfig {
            paths: vec!["a".to_string()],
        };
        config.extend_from_args(["b/c, d", "e"]);

        assert_eq!(config.paths, vec!["a", "b/c", "d", "e"]);
    }

    #[test]
    fn test_include_paths_appends_missing_only() {
        let mut config = PathsConfig {
            paths: vec!["user/id".to_string(), "event".to_string()],
        };
        config.include_paths(["event", "user/country", "user/country"]);

        assert_eq!(config.paths, vec!["user/id", "event", "user/country"]);
        let paths = config.build();
        assert!(paths.contains("user/country"));
        assert_eq!(paths.len(), 3);
    }
}
