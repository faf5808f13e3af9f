//! Reader-based event source, for stdin and in-memory input.

use std::fmt;
use std::io::Read;

use super::{parse_events, EventBatch, EventSource};
use crate::error::LoadError;

/// Reads heartbeat records from any [`Read`] implementation.
///
/// The reader is drained on the first load; later loads see whatever is
/// left, which for most readers is nothing.
pub struct ReaderSource<R> {
    reader: R,
    description: String,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader with a description used in logs and errors.
    pub fn new(reader: R, description: impl Into<String>) -> Self {
        Self {
            reader,
            description: description.into(),
        }
    }
}

impl ReaderSource<std::io::Stdin> {
    /// Read records from standard input.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin(), "stdin")
    }
}

impl<R> fmt::Debug for ReaderSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderSource")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<R: Read> EventSource for ReaderSource<R> {
    fn load(&mut self) -> Result<EventBatch, LoadError> {
        let mut content = String::new();
        self.reader
            .read_to_string(&mut content)
            .map_err(|source| LoadError::Read {
                origin: self.description.clone(),
                source,
            })?;
        parse_events(&content)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
