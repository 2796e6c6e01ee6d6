//! Load and validate the optional `rsr-audit.toml` configuration.
use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod audit;
pub mod report;
pub mod telemetry;

pub use audit::{parse_audit_section, AuditSection, RawAuditSection};
pub use report::{parse_report_section, RawReportSection, ReportSection};

pub const CONFIG_ENV_KEY: &str = "RSR_AUDIT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "rsr-audit.toml";

/// Where the configuration path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` flag; the file must exist.
    Cli(PathBuf),
    /// `RSR_AUDIT_CONFIG`; the file must exist.
    Env(PathBuf),
    /// `rsr-audit.toml` in the working directory; optional.
    Default(PathBuf),
}

impl ConfigSource {
    /// Resolve in the order: CLI override, then environment value, then default.
    pub fn resolve(cli_override: Option<PathBuf>, env_value: Option<String>) -> Self {
        if let Some(path) = cli_override {
            return ConfigSource::Cli(path);
        }
        match env_value {
            Some(value) if !value.trim().is_empty() => ConfigSource::Env(PathBuf::from(value)),
            _ => ConfigSource::Default(PathBuf::from(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Same as [`ConfigSource::resolve`], reading `RSR_AUDIT_CONFIG` from the process environment.
    pub fn from_env(cli_override: Option<PathBuf>) -> Self {
        Self::resolve(cli_override, env::var(CONFIG_ENV_KEY).ok())
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Cli(path) | ConfigSource::Env(path) | ConfigSource::Default(path) => path,
        }
    }
}

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditConfig {
    pub audit: AuditSection,
    pub report: ReportSection,
    /// File the values were read from; `None` when running on defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawAuditConfig {
    audit: Option<RawAuditSection>,
    report: Option<RawReportSection>,
}

impl AuditConfig {
    /// Load from the resolved source. A missing default file yields built-in defaults.
    pub fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        match source {
            ConfigSource::Default(path) if !path.is_file() => {
                telemetry::log_default_missing(path);
                Ok(Self::default())
            }
            ConfigSource::Env(path) => {
                telemetry::log_env_source(path);
                Self::load_from_path(path.clone())
            }
            other => Self::load_from_path(other.path().to_path_buf()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder().add_source(
            config::File::from(path.as_path()).format(config::FileFormat::Toml),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "rsr_audit::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawAuditConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "rsr_audit::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "rsr_audit::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawAuditConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let audit = parse_audit_section(raw.audit, &path)?;
        let report = parse_report_section(raw.report, &path)?;

        Ok(Self {
            audit,
            report,
            source_path: Some(path),
        })
    }
}
