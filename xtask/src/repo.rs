use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Walk up from the working directory to the workspace root.
pub fn repo_root() -> anyhow::Result<PathBuf> {
    let start = env::current_dir()?;
    let mut dir = start.clone();
    loop {
        if is_workspace_root(&dir) {
            return Ok(dir);
        }
        if !dir.pop() {
            anyhow::bail!(
                "failed to find workspace root above {} (no [workspace] Cargo.toml or .git found)",
                start.display()
            );
        }
    }
}

fn is_workspace_root(dir: &Path) -> bool {
    if dir.join(".git").is_dir() {
        return true;
    }
    fs::read_to_string(dir.join("Cargo.toml"))
        .map(|manifest| manifest.lines().any(|line| line.trim() == "[workspace]"))
        .unwrap_or(false)
}

pub fn rel_from(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(p) => p.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}
