//! File-based event source.

use std::fs;
use std::path::{Path, PathBuf};

use super::{parse_events, EventBatch, EventSource};
use crate::error::LoadError;

/// Reads heartbeat records from a JSON file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = path.display().to_string();
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for FileSource {
    fn load(&mut self) -> Result<EventBatch, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|source| LoadError::Read {
            origin: self.description.clone(),
            source,
        })?;
        parse_events(&content)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"[
            { "service": "email", "timestamp": "2025-08-04T10:00:00.000Z" },
            { "service": "email", "timestamp": "2025-08-04T10:04:00.000Z" },
            { "service": "sms" }
        ]"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/events.json");
        assert_eq!(source.path(), Path::new("/tmp/events.json"));
        assert_eq!(source.description(), "/tmp/events.json");
    }

    #[test]
    fn test_file_source_loads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());
        let batch = source.load().unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.dropped, 1);
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/events.json");
        let err = source.load().unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/path/events.json"));
    }

    #[test]
    fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());
        assert!(matches!(source.load(), Err(LoadError::MalformedInput(_))));
    }
}
