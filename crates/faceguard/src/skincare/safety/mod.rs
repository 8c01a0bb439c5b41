//! Ingredient conflict and routine safety audit.

mod heuristics;
mod ingredients;
mod product;
mod report;
mod rules;

pub use ingredients::{classify, ClassSet, IngredientClass};
pub use product::{screen_routine, validate_product, ProductCheck, ProductSafety, ProductWarning};
pub use report::{
    Conflict, IngredientRef, Recommendation, SafetyReport, SafetySeverity, Warning, WarningKind,
};

use super::domain::{Cadence, Priority, Routine, RoutineStep, SkinType};
use super::intake::normalize_label;
use ingredients::classify_normalized;
use rules::Candidate;

/// Audits a routine for antagonistic ingredient pairs and cadence-level risks.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConflictChecker;

impl ConflictChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, routine: &Routine) -> SafetyReport {
        let morning = occurrences(&routine.morning);
        let night = occurrences(&routine.night);

        let mut conflicts = find_conflicts(Cadence::Morning, &morning);
        conflicts.extend(find_conflicts(Cadence::Night, &night));

        let warnings: Vec<Warning> = [
            heuristics::cross_cadence(&morning, &night),
            heuristics::exfoliation_frequency(routine),
            heuristics::sunscreen(&routine.morning),
        ]
        .into_iter()
        .flatten()
        .collect();

        let recommendations = recommendations(&conflicts, &warnings);

        SafetyReport {
            safe: conflicts.is_empty(),
            conflicts,
            warnings,
            recommendations,
        }
    }

    /// Per-product screening against the scanned skin type. Separate from
    /// [`SafetyReport::safe`], which only reflects ingredient conflicts.
    pub fn screen_products(&self, routine: &Routine, skin_type: SkinType) -> Vec<ProductCheck> {
        screen_routine(routine, skin_type)
    }
}

/// Convenience wrapper over [`ConflictChecker::check`].
pub fn check(routine: &Routine) -> SafetyReport {
    ConflictChecker.check(routine)
}

/// A single active ingredient as it appears in a step.
#[derive(Debug, Clone)]
pub(crate) struct Occurrence {
    reference: IngredientRef,
    normalized: String,
    classes: ClassSet,
}

impl Occurrence {
    fn candidate(&self) -> Candidate<'_> {
        Candidate {
            normalized: &self.normalized,
            classes: self.classes,
        }
    }
}

fn occurrences(steps: &[RoutineStep]) -> Vec<Occurrence> {
    steps
        .iter()
        .flat_map(|step| {
            step.product.active_ingredients.iter().map(move |name| {
                let normalized = normalize_label(name);
                Occurrence {
                    reference: IngredientRef {
                        name: name.clone(),
                        category: step.category,
                        step: step.order,
                    },
                    classes: classify_normalized(&normalized),
                    normalized,
                }
            })
        })
        .collect()
}

fn find_conflicts(cadence: Cadence, occurrences: &[Occurrence]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for (index, first) in occurrences.iter().enumerate() {
        for second in &occurrences[index + 1..] {
            if let Some(rule) = rules::match_pair(&first.candidate(), &second.candidate()) {
                conflicts.push(Conflict {
                    cadence,
                    ingredient_a: first.reference.clone(),
                    ingredient_b: second.reference.clone(),
                    severity: rule.severity,
                    reason: rule.reason.to_string(),
                    resolution: rule.resolution.to_string(),
                });
            }
        }
    }
    conflicts
}

fn recommendations(conflicts: &[Conflict], warnings: &[Warning]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if !conflicts.is_empty() {
        recommendations.push(Recommendation {
            priority: Priority::High,
            title: "Ingredient Conflicts Detected".to_string(),
            message: "Your routine contains ingredients that should not be used together. Please review the conflicts and adjust your routine.".to_string(),
            action: "Separate conflicting ingredients by time of day or alternate days".to_string(),
        });
    }

    recommendations.extend(
        warnings
            .iter()
            .filter(|warning| warning.severity == SafetySeverity::Critical)
            .map(|warning| Recommendation {
                priority: Priority::Critical,
                title: warning.kind.title().to_string(),
                message: warning.message.clone(),
                action: warning.recommendation.clone(),
            }),
    );

    recommendations.extend(GENERAL_ADVICE.iter().map(|(title, message, action)| {
        Recommendation {
            priority: Priority::Info,
            title: title.to_string(),
            message: message.to_string(),
            action: action.to_string(),
        }
    }));

    recommendations
}

const GENERAL_ADVICE: [(&str, &str, &str); 3] = [
    (
        "Patch Test New Products",
        "Always patch test new products on your inner arm for 24-48 hours before applying to your face",
        "Test one new product at a time",
    ),
    (
        "Start Slow with Actives",
        "When introducing active ingredients (Retinol, AHA, BHA), start with lower concentrations and use 2-3 times per week",
        "Gradually increase frequency as your skin builds tolerance",
    ),
    (
        "Listen to Your Skin",
        "If you experience persistent redness, burning, or irritation, stop using the product and consult a dermatologist",
        "Take breaks from actives if your skin feels sensitive",
    ),
];
