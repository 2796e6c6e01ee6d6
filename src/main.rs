//! Entry point for rsr-audit.
use std::process::ExitCode;

use clap::Parser;
use rsr_audit::{
    cli::AuditArgs,
    lib::telemetry,
    runtime::{self, AuditExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(status) => ExitCode::from(status),
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<u8, AuditExit> {
    telemetry::init_tracing().map_err(AuditExit::from_error)?;
    let args = AuditArgs::parse();
    let profile = args.into_profile().map_err(AuditExit::from_error)?;
    runtime::run_audit(&profile).await
}
