//! Alert output.
//!
//! Alerts are written as a JSON array of
//! `{ "service": .., "alert_at": "YYYY-MM-DDTHH:mm:ss.sssZ" }` objects.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use heartwatch_types::Alert;

/// Render alerts as JSON.
pub fn render_alerts(alerts: &[Alert], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(alerts)
    } else {
        serde_json::to_string(alerts)
    }
}

/// Write rendered alerts to a file.
pub fn export_alerts(path: &Path, rendered: &str) -> Result<()> {
    fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn alerts() -> Vec<Alert> {
        vec![Alert::new("email", Utc.with_ymd_and_hms(2025, 8, 4, 10, 3, 0).unwrap())]
    }

    #[test]
    fn test_compact_output_shape() {
        assert_eq!(
            render_alerts(&alerts(), false).unwrap(),
            r#"[{"service":"email","alert_at":"2025-08-04T10:03:00.000Z"}]"#
        );
    }

    #[test]
    fn test_pretty_output() {
        let rendered = render_alerts(&alerts(), true).unwrap();
        assert!(rendered.contains("\n"));
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed[0]["alert_at"], "2025-08-04T10:03:00.000Z");
    }

    #[test]
    fn test_no_alerts() {
        assert_eq!(render_alerts(&[], true).unwrap(), "[]");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alerts.json");

        let rendered = render_alerts(&alerts(), true).unwrap();
        export_alerts(&path, &rendered).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), rendered);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let result = export_alerts(Path::new("/nonexistent/dir/alerts.json"), "[]");
        assert!(result.is_err());
    }
}
