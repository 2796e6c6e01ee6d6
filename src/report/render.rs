//! Text and JSON renderings of an [`AuditReport`].
use std::fmt;

use clap::ValueEnum;

use super::AuditReport;

const BANNER_TITLE: &str = "RSR Compliance Verification";
const RULE_WIDTH: usize = 70;
const FAILURE_FOOTER: &str = "⚠️  Some checks failed. See details above.";
const SUCCESS_FOOTER: &str = "✓ All RSR compliance checks passed!";

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }

    /// Parse the config-file spelling (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Render in the requested format.
pub fn render(report: &AuditReport, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &AuditReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Human-readable report. Failure messages appear only under failed checks.
pub fn render_text(report: &AuditReport) -> String {
    TextReport(report).to_string()
}

struct TextReport<'a>(&'a AuditReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{BANNER_TITLE}")?;
        writeln!(f, "{}", "=".repeat(BANNER_TITLE.len()))?;
        writeln!(f)?;
        writeln!(f, "{rule}\nRESULTS\n{rule}")?;

        for section in &report.categories {
            writeln!(f)?;
            writeln!(f, "{}:", section.name)?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            for outcome in &section.outcomes {
                if outcome.passed {
                    writeln!(f, "  🟢 ✓ {}", outcome.name)?;
                } else {
                    writeln!(f, "  🔴 ✗ {}", outcome.name)?;
                    writeln!(f, "      {}", outcome.message)?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "{rule}\nOVERALL SCORE\n{rule}")?;
        writeln!(f)?;
        writeln!(
            f,
            "Passed: {}/{} ({})",
            report.total_passed,
            report.total,
            format_percentage(report.percentage)
        )?;
        writeln!(f, "Failed: {}/{}", report.total_failed, report.total)?;
        writeln!(f)?;
        writeln!(
            f,
            "Compliance Level: {} {}",
            report.tier.badge(),
            report.tier.label()
        )?;
        writeln!(f)?;
        let footer = if report.all_passed() {
            SUCCESS_FOOTER
        } else {
            FAILURE_FOOTER
        };
        writeln!(f, "{footer}")
    }
}

fn format_percentage(percentage: Option<f64>) -> String {
    match percentage {
        Some(value) => format!("{value:.1}%"),
        None => "n/a".to_string(),
    }
}
