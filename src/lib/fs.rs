//! Read-only filesystem access used by the checks.

use std::{
    future::Future,
    io,
    path::{Path, PathBuf},
};

use tracing::debug;

/// Abstraction over the repository being audited.
///
/// Both operations are infallible: any access error reads as "absent".
pub trait RepoProbe {
    /// Whether `relative` names an existing file or directory.
    fn exists(&self, relative: &str) -> impl Future<Output = bool> + Send;
    /// Contents of `relative` decoded as UTF-8 (invalid bytes become U+FFFD),
    /// or `None` if it cannot be read.
    fn read_text(&self, relative: &str) -> impl Future<Output = Option<String>> + Send;
}

/// Probe backed by the real filesystem, rooted at the audit root.
#[derive(Debug, Clone)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

impl RepoProbe for FsProbe {
    fn exists(&self, relative: &str) -> impl Future<Output = bool> + Send {
        let path = self.resolve(relative);
        async move {
            match tokio::fs::metadata(&path).await {
                Ok(_) => true,
                Err(err) => {
                    log_access_failure(&path, &err);
                    false
                }
            }
        }
    }

    fn read_text(&self, relative: &str) -> impl Future<Output = Option<String>> + Send {
        let path = self.resolve(relative);
        async move {
            match tokio::fs::read(&path).await {
                Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
                Err(err) => {
                    log_access_failure(&path, &err);
                    None
                }
            }
        }
    }
}

fn log_access_failure(path: &Path, err: &io::Error) {
    debug!(
        target: "rsr_audit::checks",
        path = %path.display(),
        kind = ?err.kind(),
        reason = %err,
        "Path not accessible; treating as absent"
    );
}
