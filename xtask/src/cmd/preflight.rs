use crate::repo;
use anyhow::Result;
use std::path::Path;
use std::process::{Command, Stdio};

struct Step {
    label: &'static str,
    args: &'static [&'static str],
    release_only: bool,
}

const STEPS: &[Step] = &[
    Step {
        label: "cargo fetch",
        args: &["fetch"],
        release_only: false,
    },
    Step {
        label: "cargo check --workspace",
        args: &["check", "--workspace"],
        release_only: false,
    },
    Step {
        label: "cargo test --workspace",
        args: &["test", "--workspace"],
        release_only: false,
    },
    Step {
        label: "cargo fmt --all -- --check",
        args: &["fmt", "--all", "--", "--check"],
        release_only: false,
    },
    Step {
        label: "cargo clippy --workspace --all-targets -- -D warnings",
        args: &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
        release_only: false,
    },
    Step {
        label: "cargo build --release",
        args: &["build", "--release"],
        release_only: true,
    },
];

pub fn run(quick: bool) -> Result<()> {
    let root = repo::repo_root()?;
    for step in STEPS.iter().filter(|step| !(quick && step.release_only)) {
        run_step(&root, step)?;
    }
    eprintln!("==> preflight passed");
    Ok(())
}

fn run_step(root: &Path, step: &Step) -> Result<()> {
    eprintln!("==> {}", step.label);
    let status = Command::new("cargo")
        .args(step.args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{} failed (status {status})", step.label);
    }
    Ok(())
}
