mod catalog;
mod invariants;

pub use invariants::RoutineDefect;

use super::domain::{
    Cadence, IssueCategory, Priority, Product, ProductCategory, Routine, RoutineStep, SkinAnalysis,
    SkinType,
};
use catalog::{ProductEntry, ProductTable};

/// Builds a three-cadence routine from fixed slot templates.
///
/// Slot selection depends only on skin type and the issue categories present, so
/// generation is deterministic and never fails for a normalized analysis.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoutineGenerator;

impl RoutineGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, analysis: &SkinAnalysis) -> Routine {
        let concerns = Concerns::of(analysis);
        Routine {
            morning: morning_steps(analysis.skin_type, &concerns),
            night: night_steps(analysis.skin_type, &concerns),
            weekly: weekly_steps(analysis.skin_type, &concerns),
        }
    }
}

/// Convenience wrapper over [`RoutineGenerator::generate`].
pub fn generate(analysis: &SkinAnalysis) -> Routine {
    RoutineGenerator.generate(analysis)
}

#[derive(Debug, Clone, Copy)]
struct Concerns {
    acne: bool,
    pigmentation: bool,
    aging: bool,
    texture: bool,
}

impl Concerns {
    fn of(analysis: &SkinAnalysis) -> Self {
        Self {
            acne: analysis.has_issue(IssueCategory::Acne),
            pigmentation: analysis.has_issue(IssueCategory::Pigmentation),
            aging: analysis.has_issue(IssueCategory::Aging),
            texture: analysis.has_issue(IssueCategory::Texture),
        }
    }
}

/// Appends steps to one cadence, numbering them from 1.
struct CadenceBuilder {
    cadence: Cadence,
    steps: Vec<RoutineStep>,
}

impl CadenceBuilder {
    fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            steps: Vec::new(),
        }
    }

    fn push(
        &mut self,
        category: ProductCategory,
        product: Product,
        instructions: &str,
    ) -> &mut RoutineStep {
        let order = u8::try_from(self.steps.len() + 1).unwrap_or(u8::MAX);
        self.steps.push(RoutineStep {
            order,
            category,
            product,
            cadence: self.cadence,
            instructions: instructions.to_string(),
            frequency: None,
            priority: None,
        });
        let last = self.steps.len() - 1;
        &mut self.steps[last]
    }

    fn push_from(
        &mut self,
        category: ProductCategory,
        table: &ProductTable,
        skin_type: SkinType,
        instructions: &str,
    ) -> &mut RoutineStep {
        self.push(category, table.lookup(skin_type).to_product(), instructions)
    }

    fn push_entry(
        &mut self,
        category: ProductCategory,
        entry: &ProductEntry,
        instructions: &str,
    ) -> &mut RoutineStep {
        self.push(category, entry.to_product(), instructions)
    }

    fn finish(self) -> Vec<RoutineStep> {
        self.steps
    }
}

fn morning_steps(skin_type: SkinType, concerns: &Concerns) -> Vec<RoutineStep> {
    let mut builder = CadenceBuilder::new(Cadence::Morning);

    builder.push_from(
        ProductCategory::Facewash,
        &catalog::CLEANSERS,
        skin_type,
        "Massage onto damp skin for 60 seconds, then rinse with lukewarm water.",
    );

    if matches!(skin_type, SkinType::Oily | SkinType::Combination) || concerns.acne {
        builder.push_from(
            ProductCategory::Toner,
            &catalog::TONERS,
            skin_type,
            "Sweep over the face with a cotton pad or press in with clean hands.",
        );
    }

    if concerns.pigmentation {
        builder.push_from(
            ProductCategory::Serum,
            &catalog::BRIGHTENING_SERUMS,
            skin_type,
            "Apply 3-4 drops to dry skin and let absorb for a minute before moisturizer.",
        );
    } else if concerns.aging {
        builder.push_from(
            ProductCategory::Serum,
            &catalog::ANTI_AGING_SERUMS,
            skin_type,
            "Pat 2-3 drops over face and neck, focusing on expression lines.",
        );
    }

    builder.push_from(
        ProductCategory::Moisturizer,
        &catalog::DAY_MOISTURIZERS,
        skin_type,
        "Apply a nickel-sized amount evenly across face and neck.",
    );

    builder
        .push_from(
            ProductCategory::Sunscreen,
            &catalog::SUNSCREENS,
            skin_type,
            "Apply two finger-lengths as the final step 15 minutes before sun exposure. Reapply every 2 hours outdoors.",
        )
        .priority = Some(Priority::Critical);

    builder.finish()
}

fn night_steps(skin_type: SkinType, concerns: &Concerns) -> Vec<RoutineStep> {
    let mut builder = CadenceBuilder::new(Cadence::Night);

    builder.push_from(
        ProductCategory::OilCleanser,
        &catalog::OIL_CLEANSERS,
        skin_type,
        "Massage onto dry skin to dissolve sunscreen and makeup, then emulsify with water.",
    );
    builder.push_from(
        ProductCategory::Facewash,
        &catalog::CLEANSERS,
        skin_type,
        "Follow with a second cleanse to remove any remaining residue.",
    );

    if concerns.aging {
        builder.push_from(
            ProductCategory::Treatment,
            &catalog::RETINOL_TREATMENTS,
            skin_type,
            "Apply a pea-sized amount to dry skin, avoiding the eye area. Start 2-3 nights per week.",
        );
    } else if concerns.acne || concerns.texture {
        builder.push_from(
            ProductCategory::Exfoliant,
            &catalog::EXFOLIANT_TREATMENTS,
            skin_type,
            "Apply a thin layer to dry skin and wait 10 minutes before the next step.",
        );
    }

    builder.push_from(
        ProductCategory::Serum,
        &catalog::HYDRATING_SERUMS,
        skin_type,
        "Press into slightly damp skin.",
    );
    builder.push_from(
        ProductCategory::NightCream,
        &catalog::NIGHT_MOISTURIZERS,
        skin_type,
        "Seal in the routine with an even layer.",
    );

    if concerns.acne {
        builder.push_from(
            ProductCategory::SpotTreatment,
            &catalog::SPOT_TREATMENTS,
            skin_type,
            "Dab onto active blemishes only as the very last step.",
        );
    }

    builder.finish()
}

fn weekly_steps(skin_type: SkinType, concerns: &Concerns) -> Vec<RoutineStep> {
    let mut builder = CadenceBuilder::new(Cadence::Weekly);

    let mask = if concerns.acne {
        &catalog::CLAY_MASK
    } else if concerns.pigmentation {
        &catalog::BRIGHTENING_MASK
    } else {
        &catalog::HYDRATING_MASK
    };
    builder
        .push_entry(
            ProductCategory::FaceMask,
            mask,
            "Apply an even layer to clean skin and leave on for 10-15 minutes.",
        )
        .frequency = Some("1x per week".to_string());

    let exfoliator = if skin_type == SkinType::Sensitive {
        &catalog::PHA_EXFOLIATOR
    } else {
        &catalog::AHA_BHA_EXFOLIATOR
    };
    builder
        .push_entry(
            ProductCategory::Exfoliator,
            exfoliator,
            "Use on non-consecutive nights, skipping other actives that evening.",
        )
        .frequency = Some("2x per week".to_string());

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skincare::domain::{DetailedAnalysis, Issue, Severity};

    fn analysis(skin_type: SkinType, categories: &[IssueCategory]) -> SkinAnalysis {
        SkinAnalysis {
            skin_type,
            issues: categories
                .iter()
                .map(|category| Issue {
                    category: *category,
                    severity: Severity::Moderate,
                    details: String::new(),
                    affected_areas: Vec::new(),
                    confidence: 80,
                })
                .collect(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            glow_score: 70,
            detailed_analysis: DetailedAnalysis::default(),
            confidence: 80,
        }
    }

    fn categories(steps: &[RoutineStep]) -> Vec<ProductCategory> {
        steps.iter().map(|step| step.category).collect()
    }

    #[test]
    fn normal_skin_without_issues_gets_the_minimal_template() {
        let routine = generate(&analysis(SkinType::Normal, &[]));

        assert_eq!(
            categories(&routine.morning),
            vec![
                ProductCategory::Facewash,
                ProductCategory::Moisturizer,
                ProductCategory::Sunscreen
            ]
        );
        assert_eq!(
            categories(&routine.night),
            vec![
                ProductCategory::OilCleanser,
                ProductCategory::Facewash,
                ProductCategory::Serum,
                ProductCategory::NightCream
            ]
        );
        assert_eq!(routine.weekly[0].product.name, "Hydrating Overnight Mask");
        assert_eq!(
            routine.weekly[1].product.name,
            "AHA/BHA Resurfacing Exfoliator"
        );
    }

    #[test]
    fn aging_takes_the_treatment_slot_over_acne() {
        let routine = generate(&analysis(
            SkinType::Combination,
            &[IssueCategory::Acne, IssueCategory::Aging],
        ));

        let treatment: Vec<_> = routine
            .night
            .iter()
            .filter(|step| {
                matches!(
                    step.category,
                    ProductCategory::Treatment | ProductCategory::Exfoliant
                )
            })
            .collect();
        assert_eq!(treatment.len(), 1);
        assert_eq!(treatment[0].category, ProductCategory::Treatment);
        assert_eq!(treatment[0].product.name, "Retinol Night Serum");
        assert_eq!(
            routine.night.last().map(|step| step.category),
            Some(ProductCategory::SpotTreatment)
        );
    }

    #[test]
    fn pigmentation_prefers_the_brightening_serum_and_mask() {
        let routine = generate(&analysis(
            SkinType::Dry,
            &[IssueCategory::Aging, IssueCategory::Pigmentation],
        ));

        let serum = routine
            .morning
            .iter()
            .find(|step| step.category == ProductCategory::Serum)
            .expect("serum step");
        assert_eq!(serum.product.name, "Gentle Vitamin C Serum");
        assert_eq!(routine.weekly[0].product.name, "Vitamin C Brightening Mask");
    }

    #[test]
    fn sensitive_skin_gets_the_pha_exfoliator() {
        let routine = generate(&analysis(SkinType::Sensitive, &[IssueCategory::Texture]));

        let exfoliator = &routine.weekly[1];
        assert_eq!(exfoliator.product.name, "PHA Gentle Exfoliator");
        assert_eq!(exfoliator.frequency.as_deref(), Some("2x per week"));
        assert_eq!(routine.weekly[0].frequency.as_deref(), Some("1x per week"));
    }

    #[test]
    fn sunscreen_is_the_last_critical_morning_step() {
        for skin_type in SkinType::ordered() {
            let routine = generate(&analysis(skin_type, &[IssueCategory::Acne]));
            let last = routine.morning.last().expect("morning steps");
            assert_eq!(last.category, ProductCategory::Sunscreen);
            assert_eq!(last.priority, Some(Priority::Critical));
            assert_eq!(usize::from(last.order), routine.morning.len());
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let input = analysis(SkinType::Oily, &[IssueCategory::Acne, IssueCategory::Texture]);
        assert_eq!(generate(&input), generate(&input));
    }
}
