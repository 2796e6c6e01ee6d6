use anyhow::Result;
use rsr_audit::{
    checks::CHECKLIST,
    report::{AuditReport, ComplianceTier},
    runtime::audit_repository,
};

use crate::common::{run_audit, stdout_of, RepoFixture};

fn failed_names(report: &AuditReport) -> Vec<&str> {
    report
        .categories
        .iter()
        .flat_map(|section| section.outcomes.iter())
        .filter(|outcome| !outcome.passed)
        .map(|outcome| outcome.name.as_str())
        .collect()
}

fn passed(report: &AuditReport, name: &str) -> Option<bool> {
    report
        .categories
        .iter()
        .flat_map(|section| section.outcomes.iter())
        .find(|outcome| outcome.name == name)
        .map(|outcome| outcome.passed)
}

#[tokio::test]
async fn complete_repository_is_gold() -> Result<()> {
    let repo = RepoFixture::complete()?;

    let report = audit_repository(repo.path()).await?;

    assert!(failed_names(&report).is_empty(), "{:?}", failed_names(&report));
    assert_eq!(report.total, CHECKLIST.len());
    assert_eq!(report.total_passed, CHECKLIST.len());
    assert_eq!(report.percentage, Some(100.0));
    assert_eq!(report.tier, ComplianceTier::Gold);
    assert_eq!(report.exit_status(), 0);
    Ok(())
}

#[tokio::test]
async fn missing_license_and_security_txt_fail_three_checks() -> Result<()> {
    let repo = RepoFixture::complete()?;
    repo.remove("LICENSE")?;
    repo.remove(".well-known/security.txt")?;

    let report = audit_repository(repo.path()).await?;

    assert_eq!(
        failed_names(&report),
        vec!["LICENSE", "security.txt", "security.txt RFC 9116"]
    );
    assert_eq!(report.total_failed, 3);
    assert_eq!(report.total_passed + report.total_failed, report.total);
    assert_eq!(report.tier, ComplianceTier::Silver);
    assert_eq!(report.exit_status(), 1);
    Ok(())
}

#[tokio::test]
async fn empty_repository_fails_everything() -> Result<()> {
    let repo = RepoFixture::empty()?;

    let report = audit_repository(repo.path()).await?;

    assert_eq!(report.total_passed, 0);
    assert_eq!(report.total_failed, CHECKLIST.len());
    assert_eq!(report.percentage, Some(0.0));
    assert_eq!(report.tier, ComplianceTier::None);
    assert_eq!(report.exit_status(), 1);
    Ok(())
}

#[tokio::test]
async fn gitignore_without_lib_fails_content_check_only() -> Result<()> {
    let repo = RepoFixture::complete()?;
    repo.write(".gitignore", "node_modules\n")?;

    let report = audit_repository(repo.path()).await?;

    assert_eq!(passed(&report, ".gitignore"), Some(true));
    assert_eq!(passed(&report, ".gitignore Content"), Some(false));
    assert_eq!(failed_names(&report), vec![".gitignore Content"]);
    Ok(())
}

#[tokio::test]
async fn gitignore_with_latin1_byte_still_passes_content_check() -> Result<()> {
    let repo = RepoFixture::complete()?;
    repo.write(".gitignore", b"# caf\xe9\nnode_modules/\nlib/\n")?;

    let report = audit_repository(repo.path()).await?;

    assert_eq!(passed(&report, ".gitignore Content"), Some(true));
    assert!(report.all_passed(), "failed: {:?}", failed_names(&report));
    Ok(())
}

#[tokio::test]
async fn security_txt_without_expires_fails_rfc_check() -> Result<()> {
    let repo = RepoFixture::complete()?;
    repo.write(".well-known/security.txt", "Contact: mailto:security@example.org\n")?;

    let report = audit_repository(repo.path()).await?;

    assert_eq!(passed(&report, "security.txt"), Some(true));
    assert_eq!(failed_names(&report), vec!["security.txt RFC 9116"]);
    Ok(())
}

#[tokio::test]
async fn code_of_conduct_accepts_tpcf_acronym() -> Result<()> {
    let repo = RepoFixture::complete()?;
    repo.write("CODE_OF_CONDUCT.md", "See TPCF.md for contribution tiers.\n")?;

    let report = audit_repository(repo.path()).await?;
    assert_eq!(passed(&report, "TPCF Documentation"), Some(true));

    repo.write("CODE_OF_CONDUCT.md", "Be kind.\n")?;
    let report = audit_repository(repo.path()).await?;
    assert_eq!(passed(&report, "TPCF Documentation"), Some(false));
    assert_eq!(passed(&report, "CODE_OF_CONDUCT.md"), Some(true));
    Ok(())
}

#[tokio::test]
async fn alternative_locations_satisfy_any_of_checks() -> Result<()> {
    let repo = RepoFixture::empty()?;
    repo.write(".circleci/config.yml", "version: 2.1\n")?;
    repo.write("__tests__/audit.test.ts", "")?;
    repo.write("example/demo.ts", "")?;
    repo.write("src/main.ts", "")?;

    let report = audit_repository(repo.path()).await?;

    assert_eq!(passed(&report, "CI Configuration"), Some(true));
    assert_eq!(passed(&report, "Test Directory"), Some(true));
    assert_eq!(passed(&report, "Examples Directory"), Some(true));
    assert_eq!(passed(&report, "Entry Point"), Some(true));
    assert_eq!(passed(&report, "src/ Directory"), Some(true));
    Ok(())
}

#[tokio::test]
async fn type_safety_rows_mirror_build_config_files() -> Result<()> {
    let repo = RepoFixture::complete()?;
    repo.remove("deno.json")?;

    let report = audit_repository(repo.path()).await?;

    assert_eq!(passed(&report, "deno.json"), Some(false));
    assert_eq!(passed(&report, "TypeScript Configuration"), Some(false));
    assert_eq!(passed(&report, "ReScript Configuration"), Some(true));
    Ok(())
}

#[test]
fn binary_exit_status_follows_failures() -> Result<()> {
    let complete = RepoFixture::complete()?;
    let output = run_audit(complete.path(), &[])?;
    assert_eq!(output.status.code(), Some(0), "stdout:\n{}", stdout_of(&output));
    assert!(stdout_of(&output).contains("Compliance Level: 🥇 Gold"));

    let empty = RepoFixture::empty()?;
    let output = run_audit(empty.path(), &[])?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Passed: 0/"), "stdout:\n{stdout}");
    assert!(stdout.contains("(0.0%)"), "stdout:\n{stdout}");
    assert!(stdout.contains("Compliance Level: 🔴 None"), "stdout:\n{stdout}");
    Ok(())
}
