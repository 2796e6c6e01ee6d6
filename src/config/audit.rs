//! `[audit]` section: the repository root to audit.
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// Where the audit runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSection {
    /// Repository to audit; `None` means the working directory.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawAuditSection {
    pub root: Option<String>,
}

pub fn parse_audit_section(
    raw: Option<RawAuditSection>,
    path: &Path,
) -> Result<AuditSection, ConfigError> {
    let audit_raw = raw.unwrap_or_default();
    let root = match audit_raw.root {
        Some(value) if value.trim().is_empty() => {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "audit.root",
                message: "Remove the key or give a directory path".into(),
            })
        }
        Some(value) => Some(PathBuf::from(value.trim())),
        None => None,
    };

    Ok(AuditSection { root })
}
