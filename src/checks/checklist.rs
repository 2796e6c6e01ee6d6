//! The RSR checklist, one row per reported check.
use super::predicate::Predicate;

pub const CATEGORY_DOCUMENTATION: &str = "Documentation";
pub const CATEGORY_WELL_KNOWN: &str = ".well-known";
pub const CATEGORY_BUILD_SYSTEM: &str = "Build System";
pub const CATEGORY_CI: &str = "CI/CD";
pub const CATEGORY_TESTING: &str = "Testing";
pub const CATEGORY_TYPE_SAFETY: &str = "Type Safety";
pub const CATEGORY_TPCF: &str = "TPCF";
pub const CATEGORY_SOURCE: &str = "Source Code";
pub const CATEGORY_GIT: &str = "Git";
pub const CATEGORY_EXAMPLES: &str = "Examples";

/// A single checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSpec {
    pub category: &'static str,
    pub name: &'static str,
    pub predicate: Predicate,
    /// Shown only when the check fails.
    pub message: &'static str,
}

impl CheckSpec {
    pub const fn new(
        category: &'static str,
        name: &'static str,
        predicate: Predicate,
        message: &'static str,
    ) -> Self {
        Self {
            category,
            name,
            predicate,
            message,
        }
    }
}

const CI_CONFIGS: &[Predicate] = &[
    Predicate::Exists(".github/workflows/ci.yml"),
    Predicate::Exists(".gitlab-ci.yml"),
    Predicate::Exists(".circleci/config.yml"),
];

const TEST_DIRS: &[Predicate] = &[
    Predicate::Exists("tests/"),
    Predicate::Exists("test/"),
    Predicate::Exists("__tests__/"),
];

const ENTRY_POINTS: &[Predicate] = &[
    Predicate::Exists("src/main.ts"),
    Predicate::Exists("src/index.ts"),
    Predicate::Exists("src/Auditor.res"),
];

const EXAMPLE_DIRS: &[Predicate] = &[
    Predicate::Exists("examples/"),
    Predicate::Exists("example/"),
];

/// Checks in evaluation order. Report sections follow the first appearance of each category.
pub const CHECKLIST: &[CheckSpec] = &[
    CheckSpec::new(
        CATEGORY_DOCUMENTATION,
        "README.md",
        Predicate::Exists("README.md"),
        "README.md must exist and contain project description",
    ),
    CheckSpec::new(
        CATEGORY_DOCUMENTATION,
        "LICENSE",
        Predicate::Exists("LICENSE"),
        "LICENSE file must exist with clear license terms",
    ),
    CheckSpec::new(
        CATEGORY_DOCUMENTATION,
        "SECURITY.md",
        Predicate::Exists("SECURITY.md"),
        "SECURITY.md must exist with vulnerability reporting process",
    ),
    CheckSpec::new(
        CATEGORY_DOCUMENTATION,
        "CONTRIBUTING.md",
        Predicate::Exists("CONTRIBUTING.md"),
        "CONTRIBUTING.md must exist with contribution guidelines",
    ),
    CheckSpec::new(
        CATEGORY_DOCUMENTATION,
        "CODE_OF_CONDUCT.md",
        Predicate::Exists("CODE_OF_CONDUCT.md"),
        "CODE_OF_CONDUCT.md must exist with community standards",
    ),
    CheckSpec::new(
        CATEGORY_DOCUMENTATION,
        "MAINTAINERS.md",
        Predicate::Exists("MAINTAINERS.md"),
        "MAINTAINERS.md must exist listing project maintainers",
    ),
    CheckSpec::new(
        CATEGORY_DOCUMENTATION,
        "CHANGELOG.md",
        Predicate::Exists("CHANGELOG.md"),
        "CHANGELOG.md must exist with version history",
    ),
    CheckSpec::new(
        CATEGORY_DOCUMENTATION,
        "ARCHITECTURE.md",
        Predicate::Exists("ARCHITECTURE.md"),
        "ARCHITECTURE.md should exist with design documentation",
    ),
    CheckSpec::new(
        CATEGORY_WELL_KNOWN,
        "security.txt",
        Predicate::Exists(".well-known/security.txt"),
        "security.txt must exist per RFC 9116",
    ),
    CheckSpec::new(
        CATEGORY_WELL_KNOWN,
        "ai.txt",
        Predicate::Exists(".well-known/ai.txt"),
        "ai.txt must exist with AI training policies",
    ),
    CheckSpec::new(
        CATEGORY_WELL_KNOWN,
        "humans.txt",
        Predicate::Exists(".well-known/humans.txt"),
        "humans.txt must exist with attribution",
    ),
    CheckSpec::new(
        CATEGORY_WELL_KNOWN,
        "security.txt RFC 9116",
        Predicate::ContainsAll(".well-known/security.txt", &["Contact:", "Expires:"]),
        "security.txt must have Contact: and Expires: fields",
    ),
    CheckSpec::new(
        CATEGORY_BUILD_SYSTEM,
        "package.json",
        Predicate::Exists("package.json"),
        "package.json must exist with dependencies",
    ),
    CheckSpec::new(
        CATEGORY_BUILD_SYSTEM,
        "rescript.json",
        Predicate::Exists("rescript.json"),
        "rescript.json must exist for ReScript configuration",
    ),
    CheckSpec::new(
        CATEGORY_BUILD_SYSTEM,
        "deno.json",
        Predicate::Exists("deno.json"),
        "deno.json must exist for Deno configuration",
    ),
    CheckSpec::new(
        CATEGORY_BUILD_SYSTEM,
        "justfile",
        Predicate::Exists("justfile"),
        "justfile must exist with task definitions",
    ),
    CheckSpec::new(
        CATEGORY_BUILD_SYSTEM,
        "flake.nix",
        Predicate::Exists("flake.nix"),
        "flake.nix must exist for Nix reproducible builds",
    ),
    CheckSpec::new(
        CATEGORY_CI,
        "CI Configuration",
        Predicate::AnyOf(CI_CONFIGS),
        "CI/CD configuration must exist (GitHub Actions, GitLab CI, or Circle CI)",
    ),
    CheckSpec::new(
        CATEGORY_TESTING,
        "Test Directory",
        Predicate::AnyOf(TEST_DIRS),
        "Test directory must exist with test files",
    ),
    // Same files as the Build System rows, reported again under their type-checking role.
    CheckSpec::new(
        CATEGORY_TYPE_SAFETY,
        "ReScript Configuration",
        Predicate::Exists("rescript.json"),
        "ReScript provides compile-time type safety",
    ),
    CheckSpec::new(
        CATEGORY_TYPE_SAFETY,
        "TypeScript Configuration",
        Predicate::Exists("deno.json"),
        "Deno provides TypeScript type checking",
    ),
    CheckSpec::new(
        CATEGORY_TPCF,
        "TPCF Documentation",
        Predicate::ContainsAny("CODE_OF_CONDUCT.md", &["Perimeter", "TPCF"]),
        "CODE_OF_CONDUCT.md must document TPCF perimeter model",
    ),
    CheckSpec::new(
        CATEGORY_SOURCE,
        "src/ Directory",
        Predicate::Exists("src/"),
        "Source code must be in src/ directory",
    ),
    CheckSpec::new(
        CATEGORY_SOURCE,
        "Entry Point",
        Predicate::AnyOf(ENTRY_POINTS),
        "Must have a clear entry point (main.ts, index.ts, or Auditor.res)",
    ),
    CheckSpec::new(
        CATEGORY_GIT,
        ".gitignore",
        Predicate::Exists(".gitignore"),
        ".gitignore must exist to exclude build artifacts",
    ),
    CheckSpec::new(
        CATEGORY_GIT,
        ".gitignore Content",
        Predicate::ContainsAll(".gitignore", &["node_modules", "lib"]),
        ".gitignore must exclude node_modules/ and lib/",
    ),
    CheckSpec::new(
        CATEGORY_EXAMPLES,
        "Examples Directory",
        Predicate::AnyOf(EXAMPLE_DIRS),
        "Examples directory should exist with usage examples",
    ),
];
