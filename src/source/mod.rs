//! Event sources.
//!
//! An [`EventSource`] reads raw heartbeat records from somewhere and hands
//! back the ones that validate. Where the bytes come from (a file, stdin,
//! an in-memory buffer) is the only thing that differs between sources.

mod file;
mod reader;
mod record;

pub use file::FileSource;
pub use reader::ReaderSource;
pub use record::{parse_events, validate_record, EventBatch};

use std::fmt::Debug;

use crate::error::LoadError;

/// Trait for loading heartbeat events.
///
/// # Example
///
/// ```no_run
/// use heartwatch::{EventSource, FileSource};
///
/// let mut source = FileSource::new("events.json");
/// let batch = source.load()?;
/// println!("Loaded {} valid events from {}", batch.len(), source.description());
/// # Ok::<(), heartwatch::error::LoadError>(())
/// ```
pub trait EventSource: Debug {
    /// Read and validate every record.
    ///
    /// Fails only when the source as a whole is unreadable or not a JSON
    /// array; malformed records are dropped and counted.
    fn load(&mut self) -> Result<EventBatch, LoadError>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;
}
