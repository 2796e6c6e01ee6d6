use std::{path::Path, process::ExitCode};

use anyhow::Error;

use crate::{
    checks::{run_checks, CHECKLIST},
    cli::AuditProfile,
    lib::{
        errors::AuditError,
        fs::FsProbe,
        telemetry::{self, AuditLaunchTelemetry},
    },
    report::{render, AuditReport},
};

/// Exit status used when the audit cannot start; 0 and 1 are reserved for audit results.
pub const STARTUP_FAILURE_STATUS: u8 = 2;

/// Bundles a startup error message with an exit code.
#[derive(Debug)]
pub struct AuditExit {
    message: String,
    exit_code: u8,
}

impl AuditExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: STARTUP_FAILURE_STATUS,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }
}

/// Run every checklist row against `root` and aggregate the outcomes.
pub async fn audit_repository(root: &Path) -> Result<AuditReport, AuditError> {
    let is_dir = tokio::fs::metadata(root)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(AuditError::RootUnavailable {
            path: root.to_path_buf(),
        });
    }

    let probe = FsProbe::new(root);
    let outcomes = run_checks(&probe, CHECKLIST).await;
    Ok(AuditReport::from_outcomes(&outcomes))
}

/// Audit the profile's root, print the report to stdout and return the process exit status.
pub async fn run_audit(profile: &AuditProfile) -> Result<u8, AuditExit> {
    let root = profile.root.to_string_lossy();
    let config_path = profile
        .config_path
        .as_ref()
        .map(|path| path.to_string_lossy());
    telemetry::emit_audit_launch(&AuditLaunchTelemetry {
        root: &root,
        format: profile.format.as_str(),
        config_path: config_path.as_deref(),
        checks: CHECKLIST.len(),
    });

    let report = audit_repository(&profile.root)
        .await
        .map_err(AuditExit::from_error)?;
    let rendered = render(&report, profile.format).map_err(AuditExit::from_error)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    telemetry::emit_audit_summary(
        report.total_passed,
        report.total_failed,
        report.tier.label(),
    );
    Ok(report.exit_status())
}
