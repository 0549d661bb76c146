// src/scan.rs
use serde::{Deserialize, Serialize};

use crate::error::{OsintError, OsintResult};

/// A single scan invocation against one target.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub target: String,
}

impl ScanRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// Outcome status of a scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// Placeholder result; no scan steps have run yet.
    Stub,
}

/// Summary emitted for every scan, one JSON object per invocation.
///
/// Field order is part of the output contract: `target` then `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub target: String,
    pub status: ScanStatus,
}

impl ScanSummary {
    /// Render the summary as a single compact JSON line.
    pub fn to_json_line(&self) -> OsintResult<String> {
        serde_json::to_string(self).map_err(|e| OsintError::Serialization(e.to_string()))
    }
}

/// Run a scan against the requested target.
pub fn run(request: &ScanRequest) -> ScanSummary {
    // TODO: replace stub with real scan steps (enumeration, passive collection)
    ScanSummary {
        target: request.target.clone(),
        status: ScanStatus::Stub,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_json_line() {
        let summary = run(&ScanRequest::new("foo"));

        assert_eq!(
            summary.to_json_line().unwrap(),
            r#"{"target":"foo","status":"stub"}"#
        );
    }

    #[test]
    fn test_summary_escapes_quotes() {
        let summary = run(&ScanRequest::new(r#"evil"corp"#));
        let line = summary.to_json_line().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["target"], r#"evil"corp"#);
        assert_eq!(parsed["status"], "stub");
    }

    #[test]
    fn test_status_is_stub() {
        let summary = run(&ScanRequest::new("example.com"));

        assert_eq!(summary.status, ScanStatus::Stub);
        assert_eq!(summary.target, "example.com");
    }
}
