//! Checklist definition and the sequential check runner.
use serde::Serialize;

pub mod checklist;
pub mod predicate;
pub mod runner;

pub use checklist::{CheckSpec, CHECKLIST};
pub use predicate::Predicate;
pub use runner::run_checks;

/// Result of evaluating one checklist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub category: String,
    pub passed: bool,
    /// Displayed only when `passed` is false.
    pub message: String,
}

impl CheckOutcome {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        passed: bool,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            passed,
            message: message.into(),
        }
    }

    pub fn from_spec(spec: &CheckSpec, passed: bool) -> Self {
        Self::new(spec.category, spec.name, passed, spec.message)
    }
}
