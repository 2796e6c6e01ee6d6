//! Tracing initialization and audit summary events.

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset; keeps stderr quiet so stdout carries only the report.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload for logging how an audit was launched.
#[derive(Debug, Serialize)]
pub struct AuditLaunchTelemetry<'a> {
    pub root: &'a str,
    pub format: &'a str,
    pub config_path: Option<&'a str>,
    pub checks: usize,
}

/// Emit the audit launch parameters to `tracing`.
pub fn emit_audit_launch(telemetry: &AuditLaunchTelemetry<'_>) {
    info!(
        target: "rsr_audit::runtime",
        root = telemetry.root,
        format = telemetry.format,
        config_path = telemetry.config_path.unwrap_or(""),
        checks = telemetry.checks,
        "Starting RSR audit"
    );
}

/// Emit the final totals to `tracing`.
pub fn emit_audit_summary(passed: usize, failed: usize, tier: &str) {
    info!(
        target: "rsr_audit::runtime",
        passed,
        failed,
        tier,
        "Completed RSR audit"
    );
}
