use crate::error::PathError;
use crate::jsonpath::path::Path;
use crate::types::{kind_of, Record};
use serde_json::{Map, Value};
use tracing::debug;

/// One parsed path bound to read/write traversal over a record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleJsonPath {
    path: Path,
}

impl SingleJsonPath {
    /// Parse a path expression. Never fails; an empty expression yields a
    /// path that resolves nothing and writes nothing.
    pub fn new(expression: impl Into<String>) -> Self {
        SingleJsonPath {
            path: Path::parse(expression),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn expression(&self) -> &str {
        self.path.expression()
    }

    /// Look up the value at this path.
    ///
    /// Returns `None` when any segment is missing or an intermediate node is
    /// not an object. A present `null` comes back as `Some(&Value::Null)`.
    pub fn get<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        let (last, parents) = self.path.split_last()?;

        let mut current = record;
        for segment in parents {
            current = current.get(segment)?.as_object()?;
        }

        current.get(last)
    }

    /// Write `value` at this path, mutating `record` in place.
    ///
    /// Missing intermediate objects are created. An intermediate slot that
    /// holds a non-object fails with [`PathError::PathConflict`] and is left
    /// as it was. The final slot is always overwritten; writing `Value::Null`
    /// stores an explicit null.
    pub fn set(&self, record: &mut Record, value: Value) -> Result<(), PathError> {
        let Some((last, parents)) = self.path.split_last() else {
            return Ok(());
        };

        let mut current = record;
        for (i, segment) in parents.iter().enumerate() {
            let slot = current
                .entry(segment.as_str())
                .or_insert_with(|| Value::Object(Map::new()));

            current = match slot {
                Value::Object(map) => map,
                other => {
                    let err = PathError::PathConflict {
                        path: self.path.expression().to_string(),
                        segment: self.path.segments()[i + 1].clone(),
                        found: kind_of(other),
                    };
                    debug!(path = %self.path, segment = %segment, "path conflict on set");
                    return Err(err);
                }
            };
        }

        current.insert(last.clone(), value);
        Ok(())
    }
}
