use crate::error::PathError;
use crate::jsonpath::single::SingleJsonPath;
use crate::types::{Extraction, Record};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, trace};

/// A set of path expressions applied together to each record
///
/// ```text
/// "key1/key2/key3" -> [key1, key2, key3]
/// "key4/key5/key6" -> [key4, key5, key6]
/// ```
///
/// Paths are kept in configured order, so batched `set` applies them in the
/// order they were given. Duplicate expressions collapse into one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct JsonPaths {
    paths: IndexMap<String, SingleJsonPath>,
}

impl JsonPaths {
    /// Parse every expression. No validation beyond splitting is done.
    pub fn new<I, S>(expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut paths = IndexMap::new();
        for expression in expressions {
            let expression = expression.into();
            let path = SingleJsonPath::new(expression.clone());
            paths.insert(expression, path);
        }

        let paths = JsonPaths { paths };
        debug!(paths = %paths, "configured json paths");
        paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, expression: &str) -> bool {
        self.paths.contains_key(expression)
    }

    /// Configured expressions, in configured order
    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    /// Get the parsed path for an expression
    pub fn path(&self, expression: &str) -> Option<&SingleJsonPath> {
        self.paths.get(expression)
    }

    /// Read every configured path from the same record.
    ///
    /// Paths that do not resolve map to `null`, the same as a present null;
    /// use [`JsonPaths::lookup`] when the two must be told apart.
    pub fn get(&self, record: &Record) -> Extraction {
        let mut values = Record::with_capacity(self.paths.len());
        let mut any_found = false;

        for (expression, path) in &self.paths {
            let value = path.get(record);
            any_found |= value.is_some();
            values.insert(expression.clone(), value.cloned().unwrap_or(Value::Null));
        }

        Extraction::new(values, any_found)
    }

    /// Per-path lookup keeping the found/not-found distinction
    pub fn lookup<'r>(&self, record: &'r Record) -> Vec<(&str, Option<&'r Value>)> {
        self.paths
            .iter()
            .map(|(expression, path)| (expression.as_str(), path.get(record)))
            .collect()
    }

    /// Write values into the record, keyed by path expression.
    ///
    /// Paths missing from `values` or mapped to `null` are left untouched.
    /// The first conflict aborts the call; paths written before it stay
    /// written.
    pub fn set(&self, record: &mut Record, values: &Record) -> Result<(), PathError> {
        for (expression, path) in &self.paths {
            match values.get(expression) {
                None | Some(Value::Null) => {
                    trace!(path = %expression, "no value to set, skipping");
                }
                Some(value) => path.set(record, value.clone())?,
            }
        }

        Ok(())
    }
}

impl From<Vec<String>> for JsonPaths {
    fn from(expressions: Vec<String>) -> Self {
        JsonPaths::new(expressions)
    }
}

impl From<JsonPaths> for Vec<String> {
    fn from(paths: JsonPaths) -> Self {
        paths.paths.into_keys().collect()
    }
}

impl fmt::Display for JsonPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, expression) in self.paths.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", expression)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_get_empty_record() {
        let paths = JsonPaths::new(["a/b", "c"]);
        let extraction = paths.get(&Record::new());

        assert!(!extraction.any_found);
        assert_eq!(extraction.values, record(json!({"a/b": null, "c": null})));
    }

    #[test]
    fn test_get_partial() {
        let paths = JsonPaths::new(["user/id", "user/email"]);
        let rec = record(json!({"user": {"id": 42}}));
        let extraction = paths.get(&rec);

        assert!(extraction.any_found);
        assert_eq!(extraction.get("user/id"), Some(&json!(42)));
        assert_eq!(extraction.get("user/email"), Some(&Value::Null));
    }

    #[test]
    fn test_lookup_keeps_found_flag() {
        let paths = JsonPaths::new(["a", "b"]);
        let rec = record(json!({"a": null}));

        assert_eq!(paths.lookup(&rec), vec![("a", Some(&Value::Null)), ("b", None)]);
        // the aggregate view flattens both to null
        assert_eq!(paths.get(&rec).values, record(json!({"a": null, "b": null})));
    }

    #[test]
    fn test_set_multiple_paths() {
        let paths = JsonPaths::new(["a/b", "c/d"]);
        let mut rec = Record::new();

        paths.set(&mut rec, &record(json!({"a/b": 1, "c/d": 2}))).unwrap();

        assert_eq!(rec, record(json!({"a": {"b": 1}, "c": {"d": 2}})));
        let extraction = paths.get(&rec);
        assert!(extraction.any_found);
        assert_eq!(extraction.values, record(json!({"a/b": 1, "c/d": 2})));
    }

    #[test]
    fn test_set_skips_null_and_absent() {
        let paths = JsonPaths::new(["p", "q", "r"]);
        let mut rec = record(json!({"p": "keep"}));

        paths.set(&mut rec, &record(json!({"p": null, "r": 3}))).unwrap();

        assert_eq!(rec, record(json!({"p": "keep", "r": 3})));
    }

    #[test]
    fn test_set_ignores_unconfigured_keys() {
        let paths = JsonPaths::new(["a"]);
        let mut rec = Record::new();

        paths.set(&mut rec, &record(json!({"a": 1, "b": 2}))).unwrap();

        assert_eq!(rec, record(json!({"a": 1})));
    }

    #[test]
    fn test_set_fails_fast_without_rollback() {
        let paths = JsonPaths::new(["x/y", "a/b", "z"]);
        let mut rec = record(json!({"a": 5}));

        let err = paths
            .set(&mut rec, &record(json!({"x/y": 1, "a/b": 2, "z": 3})))
            .unwrap_err();

        assert_eq!(err.segment(), "b");
        assert_eq!(rec["x"]["y"], json!(1));
        assert_eq!(rec["a"], json!(5));
        // paths after the failing one are not applied
        assert!(!rec.contains_key("z"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let paths = JsonPaths::new(["a/b", "c", "a/b"]);

        assert_eq!(paths.len(), 2);
        assert_eq!(paths.expressions().collect::<Vec<_>>(), vec!["a/b", "c"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(JsonPaths::new(["a/b", "c/d"]).to_string(), "[a/b, c/d]");
        assert_eq!(JsonPaths::new(Vec::<String>::new()).to_string(), "[]");
    }

    #[test]
    fn test_serde_list_form() {
        let paths: JsonPaths = serde_json::from_value(json!(["user/id", "event"])).unwrap();

        assert!(paths.contains("user/id"));
        assert!(paths.contains("event"));
        assert_eq!(serde_json::to_value(&paths).unwrap(), json!(["user/id", "event"]));
    }
}
