//! Aggregation of check outcomes into a categorized, tiered report.
use serde::Serialize;

use crate::checks::CheckOutcome;

pub mod render;
pub mod tier;

pub use render::{render, render_json, render_text, ReportFormat};
pub use tier::ComplianceTier;

/// Outcomes sharing one category, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySection {
    pub name: String,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CheckOutcome>,
}

/// Full audit result; pure function of the outcome list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub categories: Vec<CategorySection>,
    pub total_passed: usize,
    pub total_failed: usize,
    pub total: usize,
    /// Pass rate rounded to one decimal place; `None` for an empty checklist.
    pub percentage: Option<f64>,
    pub tier: ComplianceTier,
}

impl AuditReport {
    pub fn from_outcomes(outcomes: &[CheckOutcome]) -> Self {
        let mut categories: Vec<CategorySection> = Vec::new();
        for outcome in outcomes {
            let index = match categories
                .iter()
                .position(|section| section.name == outcome.category)
            {
                Some(index) => index,
                None => {
                    categories.push(CategorySection {
                        name: outcome.category.clone(),
                        passed: 0,
                        failed: 0,
                        outcomes: Vec::new(),
                    });
                    categories.len() - 1
                }
            };

            let section = &mut categories[index];
            if outcome.passed {
                section.passed += 1;
            } else {
                section.failed += 1;
            }
            section.outcomes.push(outcome.clone());
        }

        let total_passed: usize = categories.iter().map(|section| section.passed).sum();
        let total_failed: usize = categories.iter().map(|section| section.failed).sum();
        let total = total_passed + total_failed;
        let percentage = pass_percentage(total_passed, total);
        let tier = percentage
            .map(ComplianceTier::from_percentage)
            .unwrap_or(ComplianceTier::None);

        Self {
            categories,
            total_passed,
            total_failed,
            total,
            percentage,
            tier,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.total_failed == 0
    }

    /// Process exit status: 1 when any check failed, otherwise 0.
    pub fn exit_status(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// `passed / total * 100`, rounded to one decimal place.
pub fn pass_percentage(passed: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let raw = passed as f64 / total as f64 * 100.0;
    Some((raw * 10.0).round() / 10.0)
}
