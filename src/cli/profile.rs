//! AuditProfile and root/format resolution.
use std::path::{Path, PathBuf};

use crate::report::ReportFormat;

/// Fully resolved settings for one audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditProfile {
    /// Absolute path of the repository to audit.
    pub root: PathBuf,
    pub format: ReportFormat,
    pub config_path: Option<PathBuf>,
}

impl AuditProfile {
    /// Profile used when no flags and no config file are given.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: ReportFormat::default(),
            config_path: None,
        }
    }
}

/// Resolve the audit root in the order: CLI flag, then config, then `cwd`.
/// Relative paths are anchored at `cwd`.
pub fn resolve_root(cli: Option<PathBuf>, configured: Option<PathBuf>, cwd: &Path) -> PathBuf {
    match cli.or(configured) {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    }
}

/// Resolve the report format in the order: CLI flag, then config, then text.
pub fn resolve_format(cli: Option<ReportFormat>, configured: Option<ReportFormat>) -> ReportFormat {
    cli.or(configured).unwrap_or_default()
}
