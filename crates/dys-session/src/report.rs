//! Session reports and where they are written.

use std::fs;
use std::path::PathBuf;

use dys_core::{Aggregate, ResponseScore};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Who was screened and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionMetadata {
    pub subject_name: String,
    pub subject_id: String,
    /// RFC 3339 timestamp, local offset when the platform reports one.
    pub started_at: String,
}

impl SessionMetadata {
    pub fn new(subject_name: impl Into<String>, subject_id: impl Into<String>) -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self {
            subject_name: subject_name.into(),
            subject_id: subject_id.into(),
            started_at: now.format(&Rfc3339).unwrap_or_default(),
        }
    }
}

/// One accepted response and its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttemptRecord {
    /// 1-based attempt number.
    pub attempt: usize,
    pub reference: String,
    pub response: String,
    pub score: ResponseScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub metadata: SessionMetadata,
    pub attempts: Vec<AttemptRecord>,
    pub aggregate: Aggregate,
    pub verdict_threshold: f64,
}

impl SessionReport {
    pub fn responses(&self) -> impl Iterator<Item = &str> {
        self.attempts.iter().map(|a| a.response.as_str())
    }

    pub fn scores(&self) -> Vec<f64> {
        self.attempts.iter().map(|a| a.score.value).collect()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Consumer of finished session reports.
pub trait ReportSink {
    fn write(&mut self, report: &SessionReport) -> Result<(), ReportError>;
}

/// Writes each report as pretty JSON to `<dir>/<name>_<id>_dyslexia_report.json`.
pub struct JsonReportSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonReportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn path_for(&self, metadata: &SessionMetadata) -> PathBuf {
        let name = format!(
            "{}_{}_dyslexia_report.json",
            file_component(&metadata.subject_name),
            file_component(&metadata.subject_id)
        );
        self.dir.join(name)
    }

    /// Paths written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ReportSink for JsonReportSink {
    /// Atomic write: write to .tmp then rename.
    fn write(&mut self, report: &SessionReport) -> Result<(), ReportError> {
        let path = self.path_for(&report.metadata);
        let json = report.to_json()?;
        fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), "wrote report");
        self.written.push(path);
        Ok(())
    }
}

/// Keep a name usable as a single path component.
fn file_component(s: &str) -> String {
    let cleaned: String = s
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "anonymous".to_string()
    } else {
        cleaned
    }
}
