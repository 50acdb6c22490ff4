use std::fmt;
use std::hash::{Hash, Hasher};

/// Separator between path segments
pub const SEPARATOR: char = '/';

/// A parsed slash-delimited path expression, e.g. `user/address/city`
///
/// Identity is the original expression; the segment list is derived from it.
#[derive(Debug, Clone)]
pub struct Path {
    expression: String,
    segments: Vec<String>,
}

impl Path {
    /// Split an expression into segments. Empty segments are dropped, so
    /// `""` and `"/"` parse to a zero-length path.
    pub fn parse(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        let segments = expression
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Path {
            expression,
            segments,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment and the intermediate segments leading to it
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.segments.split_last()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.expression.hash(state);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
