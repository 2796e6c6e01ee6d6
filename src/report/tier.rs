use std::fmt;

use serde::Serialize;

pub const GOLD_THRESHOLD: f64 = 95.0;
pub const SILVER_THRESHOLD: f64 = 85.0;
pub const BRONZE_THRESHOLD: f64 = 75.0;
pub const PARTIAL_THRESHOLD: f64 = 50.0;

/// Compliance level derived from the pass percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ComplianceTier {
    None,
    Partial,
    Bronze,
    Silver,
    Gold,
}

impl ComplianceTier {
    /// Map a percentage (already rounded for display) to a tier. Thresholds are inclusive.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= GOLD_THRESHOLD {
            ComplianceTier::Gold
        } else if percentage >= SILVER_THRESHOLD {
            ComplianceTier::Silver
        } else if percentage >= BRONZE_THRESHOLD {
            ComplianceTier::Bronze
        } else if percentage >= PARTIAL_THRESHOLD {
            ComplianceTier::Partial
        } else {
            ComplianceTier::None
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ComplianceTier::None => "None",
            ComplianceTier::Partial => "Partial",
            ComplianceTier::Bronze => "Bronze",
            ComplianceTier::Silver => "Silver",
            ComplianceTier::Gold => "Gold",
        }
    }

    pub const fn badge(&self) -> &'static str {
        match self {
            ComplianceTier::None => "🔴",
            ComplianceTier::Partial => "🟡",
            ComplianceTier::Bronze => "🥉",
            ComplianceTier::Silver => "🥈",
            ComplianceTier::Gold => "🥇",
        }
    }
}

impl fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
