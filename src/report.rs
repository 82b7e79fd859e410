use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::checks::Status;
use crate::formatters::markdown;
use crate::types::Comparison;

/// Run identity stamped into reports.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub monitored: String,
    pub reference: String,
    pub generated_at: String,
}

impl ReportMeta {
    pub fn new(monitored: &Path, reference: &Path) -> Self {
        ReportMeta {
            monitored: monitored.display().to_string(),
            reference: reference.display().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("write report {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    meta: &'a ReportMeta,
    status: Status,
    comparison: &'a Comparison,
}

/// Writes the comparison report to `output`, picking the flavor from the
/// file extension: `.json` gets the full machine-readable document,
/// everything else a Markdown summary.
pub fn make_report(cmp: &Comparison, meta: &ReportMeta, output: &Path) -> Result<(), ReportError> {
    let body = match output.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let doc = JsonReport {
                meta,
                status: cmp.overall_status(),
                comparison: cmp,
            };
            let mut s = serde_json::to_string_pretty(&doc)?;
            s.push('\n');
            s
        }
        _ => markdown::format(cmp, meta),
    };
    fs::write(output, body).map_err(|source| ReportError::Io {
        path: output.display().to_string(),
        source,
    })
}
