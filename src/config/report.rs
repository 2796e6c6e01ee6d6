//! `[report]` section: the report output format.
use std::path::Path;

use serde::Deserialize;

use crate::{lib::errors::ConfigError, report::ReportFormat};

/// Report output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSection {
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawReportSection {
    pub format: Option<String>,
}

pub fn parse_report_section(
    raw: Option<RawReportSection>,
    path: &Path,
) -> Result<ReportSection, ConfigError> {
    let report_raw = raw.unwrap_or_default();
    let format = report_raw
        .format
        .map(|value| {
            ReportFormat::parse(&value).ok_or_else(|| ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "report.format",
                message: format!("Unknown format `{value}`; use `text` or `json`"),
            })
        })
        .transpose()?;

    Ok(ReportSection { format })
}
