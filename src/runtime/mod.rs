//! Audit startup: root validation, check execution and report output.
mod startup;

pub use startup::{audit_repository, run_audit, AuditExit, STARTUP_FAILURE_STATUS};
