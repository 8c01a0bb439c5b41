use super::ingredients::{ClassSet, IngredientClass};
use super::report::SafetySeverity;

use IngredientClass::{Aha, BenzoylPeroxide, Bha, Niacinamide, Retinoid, VitaminC};

/// A known antagonistic pairing of ingredient classes.
#[derive(Debug)]
pub(crate) struct ConflictRule {
    pub first: IngredientClass,
    pub second: IngredientClass,
    /// Same-class rules only fire when the two ingredient names differ.
    pub distinct_names: bool,
    pub severity: SafetySeverity,
    pub reason: &'static str,
    pub resolution: &'static str,
}

impl ConflictRule {
    fn matches(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> bool {
        if self.distinct_names && a.normalized == b.normalized {
            return false;
        }
        let forward = a.classes.contains(self.first) && b.classes.contains(self.second);
        let reverse = a.classes.contains(self.second) && b.classes.contains(self.first);
        forward || reverse
    }
}

/// Ingredient name prepared for rule matching.
#[derive(Debug, Clone)]
pub(crate) struct Candidate<'a> {
    pub normalized: &'a str,
    pub classes: ClassSet,
}

pub(crate) static CONFLICT_RULES: &[ConflictRule] = &[
    ConflictRule {
        first: Retinoid,
        second: Aha,
        distinct_names: false,
        severity: SafetySeverity::High,
        reason: "Retinol and AHA can cause severe irritation when used together",
        resolution: "Use Retinol on different nights than AHA. Alternate: Retinol Mon/Wed/Fri, AHA Tue/Thu/Sat",
    },
    ConflictRule {
        first: Retinoid,
        second: Bha,
        distinct_names: false,
        severity: SafetySeverity::High,
        reason: "Retinol and BHA (Salicylic Acid) can cause irritation and dryness",
        resolution: "Use on alternate nights or use BHA in morning and Retinol at night",
    },
    ConflictRule {
        first: Retinoid,
        second: VitaminC,
        distinct_names: false,
        severity: SafetySeverity::Medium,
        reason: "Different pH requirements may reduce effectiveness",
        resolution: "Use Vitamin C in morning and Retinol at night for best results",
    },
    ConflictRule {
        first: BenzoylPeroxide,
        second: Retinoid,
        distinct_names: false,
        severity: SafetySeverity::High,
        reason: "Benzoyl Peroxide can oxidize and deactivate Retinol",
        resolution: "Use Benzoyl Peroxide in morning and Retinol at night, or on alternate days",
    },
    ConflictRule {
        first: VitaminC,
        second: Niacinamide,
        distinct_names: false,
        severity: SafetySeverity::Low,
        reason: "May cause flushing in sensitive skin (though modern formulations are usually fine)",
        resolution: "If irritation occurs, use Vitamin C in morning and Niacinamide at night",
    },
    ConflictRule {
        first: Aha,
        second: Aha,
        distinct_names: true,
        severity: SafetySeverity::Medium,
        reason: "Using multiple AHAs can cause over-exfoliation",
        resolution: "Choose one AHA product and use it consistently",
    },
    ConflictRule {
        first: Aha,
        second: Bha,
        distinct_names: false,
        severity: SafetySeverity::Medium,
        reason: "Combining AHA and BHA can be too strong for beginners",
        resolution: "Start with one exfoliant, add the other after 4-6 weeks if needed",
    },
];

/// First rule in table order that matches the pair in either orientation.
pub(crate) fn match_pair(a: &Candidate<'_>, b: &Candidate<'_>) -> Option<&'static ConflictRule> {
    CONFLICT_RULES.iter().find(|rule| rule.matches(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skincare::intake::normalize_label;
    use crate::skincare::safety::ingredients::classify_normalized;

    fn check(a: &str, b: &str) -> Option<SafetySeverity> {
        let (a, b) = (normalize_label(a), normalize_label(b));
        let first = Candidate {
            normalized: &a,
            classes: classify_normalized(&a),
        };
        let second = Candidate {
            normalized: &b,
            classes: classify_normalized(&b),
        };
        match_pair(&first, &second).map(|rule| rule.severity)
    }

    #[test]
    fn pair_order_is_irrelevant() {
        assert_eq!(check("Retinol", "Glycolic Acid"), Some(SafetySeverity::High));
        assert_eq!(check("Glycolic Acid", "Retinol"), Some(SafetySeverity::High));
        assert_eq!(
            check("Benzoyl Peroxide 2.5%", "Retinol 0.5%"),
            Some(SafetySeverity::High)
        );
        assert_eq!(
            check("Salicylic Acid 2%", "Lactic Acid 5%"),
            Some(SafetySeverity::Medium)
        );
    }

    #[test]
    fn earlier_rules_take_precedence() {
        let (a, b) = (normalize_label("Retinol"), normalize_label("AHA/BHA blend"));
        let rule = match_pair(
            &Candidate {
                normalized: &a,
                classes: classify_normalized(&a),
            },
            &Candidate {
                normalized: &b,
                classes: classify_normalized(&b),
            },
        )
        .expect("retinol pairs with an AHA");
        assert_eq!(
            rule.reason,
            "Retinol and AHA can cause severe irritation when used together"
        );
    }

    #[test]
    fn vitamin_c_with_niacinamide_is_low() {
        assert_eq!(
            check("Vitamin C 15%", "Niacinamide 10%"),
            Some(SafetySeverity::Low)
        );
    }

    #[test]
    fn repeated_acids_need_distinct_names() {
        assert_eq!(
            check("Glycolic Acid", "Lactic Acid"),
            Some(SafetySeverity::Medium)
        );
        assert_eq!(check("Glycolic Acid", "glycolic  acid"), None);
        assert_eq!(check("Hyaluronic Acid", "Ceramides"), None);
    }
}
