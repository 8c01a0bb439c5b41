use serde::{Deserialize, Serialize};

use crate::skincare::domain::{Cadence, Priority, ProductCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetySeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SafetySeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// One ingredient occurrence inside a routine step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRef {
    pub name: String,
    pub category: ProductCategory,
    pub step: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub cadence: Cadence,
    pub ingredient_a: IngredientRef,
    pub ingredient_b: IngredientRef,
    pub severity: SafetySeverity,
    pub reason: String,
    pub resolution: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    CrossCadenceActives,
    OverExfoliation,
    MissingSunscreen,
}

impl WarningKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::CrossCadenceActives => "CROSS CADENCE ACTIVES",
            Self::OverExfoliation => "OVER EXFOLIATION",
            Self::MissingSunscreen => "MISSING SUNSCREEN",
        }
    }
}

/// Advisory finding. Never affects [`SafetyReport::safe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub kind: WarningKind,
    pub severity: SafetySeverity,
    pub message: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyReport {
    pub safe: bool,
    pub conflicts: Vec<Conflict>,
    pub warnings: Vec<Warning>,
    pub recommendations: Vec<Recommendation>,
}

impl SafetyReport {
    pub fn conflicts_in(&self, cadence: Cadence) -> impl Iterator<Item = &Conflict> {
        self.conflicts
            .iter()
            .filter(move |conflict| conflict.cadence == cadence)
    }

    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|warning| warning.kind == kind)
    }
}
