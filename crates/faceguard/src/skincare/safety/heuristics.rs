use super::ingredients::{classify, IngredientClass};
use super::report::{SafetySeverity, Warning, WarningKind};
use super::Occurrence;
use crate::skincare::domain::{ProductCategory, Routine, RoutineStep};

use IngredientClass::{Aha, Bha, Retinoid};

/// Literal name markers for the cross-cadence warning. Narrower than the conflict
/// aliases: "Glycolic Acid" or "Salicylic Acid" alone do not count here.
const MORNING_STRONG_MARKERS: &[&str] = &["retinol", "aha", "bha", "vitamin c"];
const NIGHT_STRONG_MARKERS: &[&str] = &["retinol", "aha", "bha"];
const MORNING_EXFOLIANTS: &[IngredientClass] = &[Aha, Bha];
const NIGHT_EXFOLIANTS: &[IngredientClass] = &[Aha, Bha, Retinoid];

/// Weekly exfoliator steps are assumed to run twice a week.
const WEEKLY_EXFOLIATOR_WEIGHT: usize = 2;
const MAX_WEEKLY_EXFOLIATION: usize = 7;

/// Any morning strong active combined with two or more at night.
pub(crate) fn cross_cadence(morning: &[Occurrence], night: &[Occurrence]) -> Option<Warning> {
    let morning_actives = count_marked(morning, MORNING_STRONG_MARKERS);
    let night_actives = count_marked(night, NIGHT_STRONG_MARKERS);

    (morning_actives >= 1 && night_actives >= 2).then(|| Warning {
        kind: WarningKind::CrossCadenceActives,
        severity: SafetySeverity::Medium,
        message: "Using multiple strong actives both morning and night may cause irritation"
            .to_string(),
        recommendation: "Consider reducing frequency or alternating actives on different days"
            .to_string(),
    })
}

pub(crate) fn exfoliation_frequency(routine: &Routine) -> Option<Warning> {
    let count = exfoliation_count(routine);
    (count > MAX_WEEKLY_EXFOLIATION).then(|| Warning {
        kind: WarningKind::OverExfoliation,
        severity: SafetySeverity::High,
        message: "Your routine includes too much exfoliation, which can damage your skin barrier"
            .to_string(),
        recommendation:
            "Reduce exfoliation to 3-4 times per week maximum. Start slow and increase gradually."
                .to_string(),
    })
}

/// Implied exfoliating applications per week.
pub(crate) fn exfoliation_count(routine: &Routine) -> usize {
    let morning = count_steps_with(&routine.morning, MORNING_EXFOLIANTS);
    let night = count_steps_with(&routine.night, NIGHT_EXFOLIANTS);
    let weekly = routine
        .weekly
        .iter()
        .filter(|step| step.category == ProductCategory::Exfoliator)
        .count()
        * WEEKLY_EXFOLIATOR_WEIGHT;
    morning + night + weekly
}

pub(crate) fn sunscreen(morning: &[RoutineStep]) -> Option<Warning> {
    let present = morning.iter().any(|step| {
        step.category == ProductCategory::Sunscreen
            || step.product.name.to_lowercase().contains("sunscreen")
    });

    (!present).then(|| Warning {
        kind: WarningKind::MissingSunscreen,
        severity: SafetySeverity::Critical,
        message: "Sunscreen is MANDATORY, especially when using active ingredients".to_string(),
        recommendation: "Always apply SPF 50+ broad spectrum sunscreen as the last step of your morning routine"
            .to_string(),
    })
}

fn count_marked(occurrences: &[Occurrence], markers: &[&str]) -> usize {
    occurrences
        .iter()
        .filter(|occurrence| {
            markers
                .iter()
                .any(|marker| occurrence.normalized.contains(marker))
        })
        .count()
}

fn count_steps_with(steps: &[RoutineStep], classes: &[IngredientClass]) -> usize {
    steps
        .iter()
        .filter(|step| {
            step.product
                .active_ingredients
                .iter()
                .any(|ingredient| classify(ingredient).contains_any(classes))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skincare::tests::common::{routine_with, step};
    use crate::skincare::domain::Cadence;
    use crate::skincare::safety::occurrences;

    #[test]
    fn weekly_exfoliators_count_double() {
        let routine = routine_with(
            vec![step(Cadence::Morning, ProductCategory::Toner, "Toner", &["Glycolic Acid 5%"])],
            vec![
                step(Cadence::Night, ProductCategory::Treatment, "Retinol", &["Retinol 0.5%"]),
                step(Cadence::Night, ProductCategory::Exfoliant, "BHA", &["Salicylic Acid 2%"]),
            ],
            vec![
                step(Cadence::Weekly, ProductCategory::Exfoliator, "Peel", &["Glycolic Acid 10%"]),
                step(Cadence::Weekly, ProductCategory::FaceMask, "Mask", &["Kaolin Clay"]),
            ],
        );

        assert_eq!(exfoliation_count(&routine), 1 + 2 + 2);
        assert_eq!(exfoliation_frequency(&routine), None);
    }

    #[test]
    fn more_than_seven_weekly_exfoliations_warn() {
        let exfoliator = || {
            step(Cadence::Weekly, ProductCategory::Exfoliator, "Peel", &["Lactic Acid"])
        };
        let routine = routine_with(
            Vec::new(),
            Vec::new(),
            vec![exfoliator(), exfoliator(), exfoliator(), exfoliator()],
        );
        assert_eq!(exfoliation_count(&routine), 8);

        let warning = exfoliation_frequency(&routine).expect("over-exfoliation");
        assert_eq!(warning.severity, SafetySeverity::High);
        assert_eq!(warning.kind, WarningKind::OverExfoliation);
    }

    #[test]
    fn sunscreen_is_recognized_by_category_or_name() {
        let by_name = vec![step(
            Cadence::Morning,
            ProductCategory::Moisturizer,
            "Daily SUNSCREEN Lotion",
            &["Zinc Oxide"],
        )];
        assert_eq!(sunscreen(&by_name), None);

        let missing = vec![step(
            Cadence::Morning,
            ProductCategory::Moisturizer,
            "Day Cream",
            &["Glycerin"],
        )];
        let warning = sunscreen(&missing).expect("missing sunscreen");
        assert_eq!(warning.severity, SafetySeverity::Critical);
    }

    #[test]
    fn cross_cadence_counts_literal_markers_only() {
        let morning = occurrences(&[step(
            Cadence::Morning,
            ProductCategory::Serum,
            "C Serum",
            &["Vitamin C 15%"],
        )]);

        let named_acids = occurrences(&[
            step(Cadence::Night, ProductCategory::Treatment, "Retinol", &["Retinol"]),
            step(Cadence::Night, ProductCategory::Exfoliant, "Glycolic", &["Glycolic Acid"]),
        ]);
        assert_eq!(cross_cadence(&morning, &named_acids), None);

        let blend = occurrences(&[
            step(Cadence::Night, ProductCategory::Treatment, "Retinol", &["Retinol"]),
            step(Cadence::Night, ProductCategory::Exfoliant, "Blend", &["AHA/BHA Complex"]),
        ]);
        let warning = cross_cadence(&morning, &blend).expect("cross-cadence warning");
        assert_eq!(warning.kind, WarningKind::CrossCadenceActives);
        assert_eq!(warning.severity, SafetySeverity::Medium);
    }
}
