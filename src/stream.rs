//! Apply configured paths to a newline-delimited stream of events
//!
//! Each input line holds exactly one JSON event. Lines that cannot be
//! processed (invalid UTF-8, malformed or too deeply nested JSON, non-object
//! events, path conflicts) are reported on the error sink as
//! [`ErrorResponse`] lines and skipped. Only I/O failures abort the stream.

use crate::jsonpath::JsonPaths;
use crate::report::ErrorResponse;
use crate::types::{kind_of, Record};
use crate::writer::RecordWriter;
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{BufRead, Write};
use tracing::debug;

/// Counters for one pass over an event stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Non-blank input lines seen
    pub processed: usize,
    /// Lines written to the output
    pub written: usize,
    /// Events reported on the error sink
    pub rejected: usize,
}

/// Read every configured path from each event and write one extraction per line
pub fn extract_events<R: BufRead, W: Write, E: Write>(
    reader: R,
    output: &mut RecordWriter<W>,
    errors: &mut RecordWriter<E>,
    paths: &JsonPaths,
) -> Result<StreamStats> {
    process_events(reader, output, errors, |record| Ok(paths.get(record)), |_, extraction| extraction)
}

/// Write `values` into each event and emit the updated events.
///
/// An event whose paths conflict is rejected as a whole; it is not written
/// half-updated.
pub fn inject_events<R: BufRead, W: Write, E: Write>(
    reader: R,
    output: &mut RecordWriter<W>,
    errors: &mut RecordWriter<E>,
    paths: &JsonPaths,
    values: &Record,
) -> Result<StreamStats> {
    process_events(
        reader,
        output,
        errors,
        |record| {
            paths
                .set(record, values)
                .map_err(|e| ErrorResponse::with_error("failed to set values", &e))
        },
        |record, ()| record,
    )
}

fn process_events<R, W, E, T, O, F, M>(
    mut reader: R,
    output: &mut RecordWriter<W>,
    errors: &mut RecordWriter<E>,
    mut apply: F,
    mut emit: M,
) -> Result<StreamStats>
where
    R: BufRead,
    W: Write,
    E: Write,
    O: serde::Serialize,
    F: FnMut(&mut Record) -> std::result::Result<T, ErrorResponse>,
    M: FnMut(Record, T) -> O,
{
    let mut stats = StreamStats::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read line")?;
        if read == 0 {
            break;
        }
        line_no += 1;
        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        stats.processed += 1;

        let outcome = parse_event(&buf).and_then(|mut record| {
            let applied = apply(&mut record)?;
            Ok(emit(record, applied))
        });

        match outcome {
            Ok(item) => {
                output.write_line(&item)?;
                stats.written += 1;
            }
            Err(response) => {
                debug!(
                    line = line_no,
                    message = %response.message,
                    error = response.error.as_deref().unwrap_or(""),
                    "rejected event"
                );
                errors.write_line(&response)?;
                stats.rejected += 1;
            }
        }
    }

    output.flush()?;
    errors.flush()?;
    debug!(?stats, "event stream done");
    Ok(stats)
}

/// Decode one event line into a record
pub fn parse_event(line: &[u8]) -> std::result::Result<Record, ErrorResponse> {
    let text = std::str::from_utf8(line)
        .map_err(|e| ErrorResponse::with_error("event is not valid UTF-8", &e))?;
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(other) => Err(ErrorResponse::new(format!(
            "event is not a JSON object, found {}",
            kind_of(&other)
        ))),
        Err(e) => Err(ErrorResponse::with_error("invalid input JSON", &e)),
    }
}
