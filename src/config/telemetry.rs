//! Tracing events emitted while locating and loading the config file.
use std::path::Path;

use tracing::{debug, info};

use super::{AuditConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_env_source(path: &Path) {
    info!(
        target: "rsr_audit::config",
        path = %path.display(),
        "Loading configuration using RSR_AUDIT_CONFIG environment variable"
    );
}

pub fn log_default_missing(path: &Path) {
    debug!(
        target: "rsr_audit::config",
        path = %path.display(),
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_PATH,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &AuditConfig) {
    let source = config
        .source_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    let root = config
        .audit
        .root
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    info!(
        target: "rsr_audit::config",
        path = %source,
        root = %root,
        format = config.report.format.map(|format| format.as_str()).unwrap_or(""),
        "Configuration file loaded successfully"
    );
}
