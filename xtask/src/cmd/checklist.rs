use crate::repo;
use anyhow::{Context, Result};
use rsr_audit::checks::{Predicate, CHECKLIST};
use std::path::PathBuf;

pub fn run(out: Option<PathBuf>) -> Result<()> {
    let table = render_markdown();
    match out {
        Some(path) => {
            let root = repo::repo_root()?;
            let path = if path.is_absolute() {
                path
            } else {
                root.join(path)
            };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, table)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", repo::rel_from(&root, &path).display());
        }
        None => print!("{table}"),
    }
    Ok(())
}

fn render_markdown() -> String {
    let mut out = String::from("| Category | Check | Requirement |\n|---|---|---|\n");
    for spec in CHECKLIST {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            spec.category,
            spec.name,
            describe(&spec.predicate)
        ));
    }
    out
}

fn describe(predicate: &Predicate) -> String {
    match predicate {
        Predicate::Exists(path) => format!("`{path}` exists"),
        Predicate::ContainsAll(path, needles) => {
            format!("`{path}` contains all of {}", quote_all(needles))
        }
        Predicate::ContainsAny(path, needles) => {
            format!("`{path}` contains any of {}", quote_all(needles))
        }
        Predicate::AnyOf(alternatives) => alternatives
            .iter()
            .map(describe)
            .collect::<Vec<_>>()
            .join(" or "),
        Predicate::AllOf(requirements) => requirements
            .iter()
            .map(describe)
            .collect::<Vec<_>>()
            .join(" and "),
    }
}

fn quote_all(needles: &[&str]) -> String {
    needles
        .iter()
        .map(|needle| format!("`{needle}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
