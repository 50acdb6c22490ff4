use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A decoded event: a schema-less mapping from keys to JSON values
pub type Record = Map<String, Value>;

/// Result of reading every configured path from one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Path expression -> extracted value (`null` when the path did not resolve)
    pub values: Record,

    /// Whether at least one configured path resolved
    #[serde(rename = "found")]
    pub any_found: bool,
}

impl Extraction {
    pub fn new(values: Record, any_found: bool) -> Self {
        Extraction { values, any_found }
    }

    /// Get the extracted value for a path expression
    pub fn get(&self, expression: &str) -> Option<&Value> {
        self.values.get(expression)
    }
}

/// Name of the JSON kind held by a value, used in diagnostics
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
