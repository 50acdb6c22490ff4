use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Writes serializable items as newline-delimited JSON
pub struct RecordWriter<W: Write> {
    writer: W,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Self {
        RecordWriter { writer }
    }

    /// Write one item as a single JSON line
    pub fn write_line<T: Serialize>(&mut self, item: &T) -> Result<()> {
        let json = serde_json::to_string(item)
            .context("Failed to serialize record")?;
        writeln!(self.writer, "{}", json)
            .context("Failed to write record")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_writes_one_line_per_item() {
        let mut buffer = Vec::new();
        let mut writer = RecordWriter::new(&mut buffer);

        writer.write_line(&json!({"name": "Alice"})).unwrap();
        writer.write_line(&json!({"name": "Bob"})).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "{\"name\":\"Alice\"}\n{\"name\":\"Bob\"}\n");
    }
}
