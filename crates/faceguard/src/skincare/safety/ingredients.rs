use crate::skincare::intake::normalize_label;

/// Closed set of active ingredient families the conflict rules are written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IngredientClass {
    Retinoid,
    Aha,
    Bha,
    VitaminC,
    Niacinamide,
    BenzoylPeroxide,
}

const ALIASES: &[(&str, IngredientClass)] = &[
    ("retinol", IngredientClass::Retinoid),
    ("retinoid", IngredientClass::Retinoid),
    ("retinal", IngredientClass::Retinoid),
    ("aha", IngredientClass::Aha),
    ("glycolic", IngredientClass::Aha),
    ("lactic", IngredientClass::Aha),
    ("mandelic", IngredientClass::Aha),
    ("bha", IngredientClass::Bha),
    ("salicylic", IngredientClass::Bha),
    ("vitamin c", IngredientClass::VitaminC),
    ("ascorbic", IngredientClass::VitaminC),
    ("niacinamide", IngredientClass::Niacinamide),
    ("benzoyl", IngredientClass::BenzoylPeroxide),
];

/// Set of classes one ingredient name belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet(u8);

impl ClassSet {
    fn bit(class: IngredientClass) -> u8 {
        1 << (class as u8)
    }

    fn insert(&mut self, class: IngredientClass) {
        self.0 |= Self::bit(class);
    }

    pub fn contains(self, class: IngredientClass) -> bool {
        self.0 & Self::bit(class) != 0
    }

    pub fn contains_any(self, classes: &[IngredientClass]) -> bool {
        classes.iter().any(|class| self.contains(*class))
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Case-insensitive containment against the alias table. "Glycolic Acid 7%" is an AHA;
/// "AHA/BHA blend" is both.
pub fn classify(name: &str) -> ClassSet {
    classify_normalized(&normalize_label(name))
}

pub(crate) fn classify_normalized(normalized: &str) -> ClassSet {
    let mut set = ClassSet::default();
    for (alias, class) in ALIASES {
        if normalized.contains(alias) {
            set.insert(*class);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strengths_and_casing_do_not_matter() {
        assert!(classify("Glycolic Acid 7%").contains(IngredientClass::Aha));
        assert!(classify("  SALICYLIC   acid ").contains(IngredientClass::Bha));
        assert!(classify("Vitamin C 15%").contains(IngredientClass::VitaminC));
        assert!(classify("Benzoyl Peroxide 2.5%").contains(IngredientClass::BenzoylPeroxide));
    }

    #[test]
    fn names_can_fall_in_several_classes() {
        let set = classify("AHA/BHA Peel");
        assert!(set.contains(IngredientClass::Aha));
        assert!(set.contains(IngredientClass::Bha));
        assert!(!set.contains(IngredientClass::Retinoid));
    }

    #[test]
    fn inert_ingredients_have_no_class() {
        assert!(classify("Hyaluronic Acid").is_empty());
        assert!(classify("Ceramides").is_empty());
        assert!(classify("Vitamin E").is_empty());
    }
}
