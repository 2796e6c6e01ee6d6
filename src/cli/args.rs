//! CLI argument definitions and `AuditProfile` construction.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    config::{AuditConfig, ConfigSource},
    report::ReportFormat,
};

use super::{resolve_format, resolve_root, AuditProfile};

/// Command-line arguments. Every flag is optional; no flags audits the working directory.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Audit a repository against the RSR compliance checklist",
    long_about = "Audit a repository against the RSR compliance checklist.\n\nExit status is 0 when every check passes, 1 when any check fails, and 2 when the audit cannot start.",
    after_help = "Hint: set RUST_LOG=rsr_audit=debug to see why each path was treated as absent."
)]
pub struct AuditArgs {
    /// Repository to audit (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
    /// Report format (overrides the config file).
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Path to rsr-audit.toml (overrides RSR_AUDIT_CONFIG).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
}

impl AuditArgs {
    /// Load the configuration and merge it with CLI flags.
    pub fn into_profile(self) -> Result<AuditProfile> {
        let source = ConfigSource::from_env(self.config_override.clone());
        let config = AuditConfig::load(&source)?;
        self.build(config)
    }

    /// Merge CLI flags over an already loaded configuration.
    pub fn build(self, config: AuditConfig) -> Result<AuditProfile> {
        let cwd = std::env::current_dir().context("failed to obtain current directory")?;
        let root = resolve_root(self.root, config.audit.root.clone(), &cwd);
        let format = resolve_format(self.format, config.report.format);

        Ok(AuditProfile {
            root,
            format,
            config_path: config.source_path,
        })
    }
}
