use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_rsr-audit");

pub const VALID_SECURITY_TXT: &str =
    "Contact: mailto:security@example.org\nExpires: 2030-12-31T23:59:59Z\n";

/// Temporary repository populated file by file.
pub struct RepoFixture {
    dir: TempDir,
}

impl RepoFixture {
    pub fn empty() -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create temporary repository")?;
        Ok(Self { dir })
    }

    /// Repository that satisfies every checklist row.
    pub fn complete() -> Result<Self> {
        let fixture = Self::empty()?;
        for file in [
            "README.md",
            "LICENSE",
            "SECURITY.md",
            "CONTRIBUTING.md",
            "MAINTAINERS.md",
            "CHANGELOG.md",
            "ARCHITECTURE.md",
            ".well-known/ai.txt",
            ".well-known/humans.txt",
            "package.json",
            "rescript.json",
            "deno.json",
            "justfile",
            "flake.nix",
            ".github/workflows/ci.yml",
            "src/Auditor.res",
            "tests/smoke_test.res",
            "examples/basic.res",
        ] {
            fixture.write(file, "placeholder\n")?;
        }
        fixture.write(".well-known/security.txt", VALID_SECURITY_TXT)?;
        fixture.write(
            "CODE_OF_CONDUCT.md",
            "# Code of Conduct\n\nContributions follow the Tri-Perimeter model.\n",
        )?;
        fixture.write(".gitignore", "node_modules/\nlib/\n")?;
        Ok(fixture)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> Result<()> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create fixture dir {}", parent.display()))?;
        }
        fs::write(&path, contents)
            .with_context(|| format!("failed to write fixture {}", path.display()))
    }

    pub fn remove(&self, relative: &str) -> Result<()> {
        let path = self.join(relative);
        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))
    }
}

/// Run the binary with `cwd` as working directory and a clean config/log environment.
pub fn run_audit(cwd: &Path, args: &[&str]) -> Result<Output> {
    Command::new(BINARY_PATH)
        .args(args)
        .current_dir(cwd)
        .env_remove("RSR_AUDIT_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .context("failed to spawn rsr-audit")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
