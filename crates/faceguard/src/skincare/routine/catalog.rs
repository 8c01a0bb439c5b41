use crate::skincare::domain::{Product, SkinType};

use SkinType::{Combination, Dehydrated, Dry, Normal, Oily, Sensitive};

/// Static product definition; materialized into an owned [`Product`] per routine.
#[derive(Debug)]
pub(crate) struct ProductEntry {
    pub name: &'static str,
    pub actives: &'static [&'static str],
    pub strength: Option<&'static str>,
    pub suitable_for: &'static [SkinType],
    pub benefits: &'static str,
    pub precautions: &'static [&'static str],
}

impl ProductEntry {
    pub fn to_product(&self) -> Product {
        Product {
            name: self.name.to_string(),
            active_ingredients: self.actives.iter().map(|s| s.to_string()).collect(),
            strength: self.strength.map(str::to_string),
            suitable_for: self.suitable_for.to_vec(),
            benefits: Some(self.benefits.to_string()),
            precautions: self.precautions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Rows are tried in order; the first row listing the skin type wins.
pub(crate) struct ProductTable {
    rows: &'static [(&'static [SkinType], ProductEntry)],
    fallback: ProductEntry,
}

impl ProductTable {
    pub fn lookup(&self, skin_type: SkinType) -> &ProductEntry {
        self.rows
            .iter()
            .find(|(skin_types, _)| skin_types.contains(&skin_type))
            .map(|(_, entry)| entry)
            .unwrap_or(&self.fallback)
    }
}

pub(crate) static CLEANSERS: ProductTable = ProductTable {
    rows: &[
        (
            &[Oily],
            ProductEntry {
                name: "Oil-Control Gel Cleanser",
                actives: &["Zinc PCA", "Tea Tree Extract"],
                strength: None,
                suitable_for: &[Oily, Combination],
                benefits: "Lifts excess sebum without stripping the barrier",
                precautions: &["Avoid the eye area"],
            },
        ),
        (
            &[Dry, Dehydrated],
            ProductEntry {
                name: "Cream Hydrating Cleanser",
                actives: &["Ceramides", "Glycerin"],
                strength: None,
                suitable_for: &[Dry, Dehydrated, Normal],
                benefits: "Cleanses while replenishing lipids",
                precautions: &[],
            },
        ),
        (
            &[Sensitive],
            ProductEntry {
                name: "Gentle Fragrance-Free Cleanser",
                actives: &["Oat Extract", "Panthenol"],
                strength: None,
                suitable_for: &[Sensitive, Dry, Normal],
                benefits: "Low-foam cleanse that calms reactive skin",
                precautions: &[],
            },
        ),
    ],
    fallback: ProductEntry {
        name: "Balancing Gel Cleanser",
        actives: &["Glycerin", "Green Tea Extract"],
        strength: None,
        suitable_for: &[Normal, Combination, Oily],
        benefits: "Everyday cleanse that keeps oil and hydration in balance",
        precautions: &[],
    },
};

pub(crate) static OIL_CLEANSERS: ProductTable = ProductTable {
    rows: &[
        (
            &[Oily, Combination],
            ProductEntry {
                name: "Lightweight Cleansing Oil",
                actives: &["Squalane", "Jojoba Oil"],
                strength: None,
                suitable_for: &[Oily, Combination, Normal],
                benefits: "Dissolves sunscreen and sebum without residue",
                precautions: &["Emulsify with water before rinsing"],
            },
        ),
        (
            &[Sensitive],
            ProductEntry {
                name: "Fragrance-Free Cleansing Balm",
                actives: &["Sunflower Seed Oil", "Oat Lipids"],
                strength: None,
                suitable_for: &[Sensitive, Dry],
                benefits: "Melts away makeup with minimal friction",
                precautions: &[],
            },
        ),
    ],
    fallback: ProductEntry {
        name: "Nourishing Cleansing Oil",
        actives: &["Jojoba Oil", "Vitamin E"],
        strength: None,
        suitable_for: &[Normal, Combination, Dry, Dehydrated],
        benefits: "Removes sunscreen and makeup as the first cleanse",
        precautions: &[],
    },
};

pub(crate) static TONERS: ProductTable = ProductTable {
    rows: &[(
        &[Dry, Dehydrated, Sensitive],
        ProductEntry {
            name: "Soothing Hydrating Toner",
            actives: &["Centella Asiatica", "Panthenol"],
            strength: None,
            suitable_for: &[Dry, Dehydrated, Sensitive],
            benefits: "Calms and preps skin for following layers",
            precautions: &[],
        },
    )],
    fallback: ProductEntry {
        name: "Pore Refining Toner",
        actives: &["Witch Hazel", "Zinc PCA"],
        strength: None,
        suitable_for: &[Oily, Combination, Normal],
        benefits: "Tightens the look of pores and controls shine",
        precautions: &["Skip on irritated patches"],
    },
};

pub(crate) static BRIGHTENING_SERUMS: ProductTable = ProductTable {
    rows: &[(
        &[Sensitive, Dry],
        ProductEntry {
            name: "Gentle Vitamin C Serum",
            actives: &["Vitamin C 8%", "Vitamin E"],
            strength: Some("8%"),
            suitable_for: &[Sensitive, Dry, Normal],
            benefits: "Fades dark spots with a low-irritation derivative",
            precautions: &["Store away from light"],
        },
    )],
    fallback: ProductEntry {
        name: "Vitamin C Brightening Serum",
        actives: &["Vitamin C 15%", "Ferulic Acid", "Vitamin E"],
        strength: Some("15%"),
        suitable_for: &[Normal, Combination, Oily, Dehydrated],
        benefits: "Brightens uneven tone and boosts antioxidant protection",
        precautions: &["Store away from light", "May tingle on first use"],
    },
};

pub(crate) static ANTI_AGING_SERUMS: ProductTable = ProductTable {
    rows: &[],
    fallback: ProductEntry {
        name: "Peptide Antioxidant Serum",
        actives: &["Peptides", "Vitamin C 10%"],
        strength: Some("10%"),
        suitable_for: &[Normal, Combination, Oily, Dry, Dehydrated, Sensitive],
        benefits: "Supports firmness and defends against daytime oxidative stress",
        precautions: &[],
    },
};

pub(crate) static DAY_MOISTURIZERS: ProductTable = ProductTable {
    rows: &[
        (
            &[Oily],
            ProductEntry {
                name: "Oil-Free Gel Moisturizer",
                actives: &["Hyaluronic Acid", "Green Tea Extract"],
                strength: None,
                suitable_for: &[Oily, Combination],
                benefits: "Weightless hydration with a matte finish",
                precautions: &[],
            },
        ),
        (
            &[Dry, Dehydrated],
            ProductEntry {
                name: "Rich Barrier Cream",
                actives: &["Ceramides", "Shea Butter", "Hyaluronic Acid"],
                strength: None,
                suitable_for: &[Dry, Dehydrated],
                benefits: "Locks in moisture and repairs a compromised barrier",
                precautions: &[],
            },
        ),
        (
            &[Sensitive],
            ProductEntry {
                name: "Calming Barrier Moisturizer",
                actives: &["Ceramides", "Centella Asiatica"],
                strength: None,
                suitable_for: &[Sensitive, Dry, Normal],
                benefits: "Reduces visible redness while restoring the barrier",
                precautions: &[],
            },
        ),
    ],
    fallback: ProductEntry {
        name: "Lightweight Daily Moisturizer",
        actives: &["Hyaluronic Acid", "Glycerin"],
        strength: None,
        suitable_for: &[Normal, Combination],
        benefits: "Balanced hydration for everyday wear",
        precautions: &[],
    },
};

pub(crate) static SUNSCREENS: ProductTable = ProductTable {
    rows: &[
        (
            &[Oily, Combination],
            ProductEntry {
                name: "Matte Finish Sunscreen SPF 50",
                actives: &["Zinc Oxide", "Octisalate"],
                strength: Some("SPF 50"),
                suitable_for: &[Oily, Combination, Normal],
                benefits: "Broad spectrum protection without shine",
                precautions: &["Reapply every 2 hours outdoors"],
            },
        ),
        (
            &[Sensitive],
            ProductEntry {
                name: "Mineral Sunscreen SPF 50",
                actives: &["Zinc Oxide", "Titanium Dioxide"],
                strength: Some("SPF 50"),
                suitable_for: &[Sensitive, Dry, Normal],
                benefits: "Physical filters suited to reactive skin",
                precautions: &["Reapply every 2 hours outdoors"],
            },
        ),
        (
            &[Dry, Dehydrated],
            ProductEntry {
                name: "Hydrating Sunscreen SPF 50",
                actives: &["Avobenzone", "Hyaluronic Acid"],
                strength: Some("SPF 50"),
                suitable_for: &[Dry, Dehydrated, Normal],
                benefits: "Dewy finish protection that doubles as a moisture layer",
                precautions: &["Reapply every 2 hours outdoors"],
            },
        ),
    ],
    fallback: ProductEntry {
        name: "Broad Spectrum Sunscreen SPF 50",
        actives: &["Zinc Oxide", "Avobenzone"],
        strength: Some("SPF 50"),
        suitable_for: &[Normal, Combination],
        benefits: "Daily UVA/UVB protection",
        precautions: &["Reapply every 2 hours outdoors"],
    },
};

pub(crate) static RETINOL_TREATMENTS: ProductTable = ProductTable {
    rows: &[(
        &[Sensitive, Dry, Dehydrated],
        ProductEntry {
            name: "Encapsulated Retinol Serum",
            actives: &["Retinol 0.2%", "Squalane"],
            strength: Some("0.2%"),
            suitable_for: &[Sensitive, Dry, Dehydrated, Normal],
            benefits: "Slow-release retinol that softens fine lines with less irritation",
            precautions: &["Start 2-3 nights per week", "Avoid during pregnancy"],
        },
    )],
    fallback: ProductEntry {
        name: "Retinol Night Serum",
        actives: &["Retinol 0.5%", "Peptides"],
        strength: Some("0.5%"),
        suitable_for: &[Normal, Combination, Oily],
        benefits: "Accelerates cell turnover to smooth lines and texture",
        precautions: &["Start 2-3 nights per week", "Avoid during pregnancy"],
    },
};

pub(crate) static EXFOLIANT_TREATMENTS: ProductTable = ProductTable {
    rows: &[
        (
            &[Oily, Combination],
            ProductEntry {
                name: "BHA Exfoliating Liquid",
                actives: &["Salicylic Acid 2%"],
                strength: Some("2%"),
                suitable_for: &[Oily, Combination],
                benefits: "Clears congested pores and reduces breakouts",
                precautions: &["Introduce gradually", "Use sunscreen daily"],
            },
        ),
        (
            &[Sensitive, Dry, Dehydrated],
            ProductEntry {
                name: "Gentle Lactic Acid Exfoliant",
                actives: &["Lactic Acid 5%"],
                strength: Some("5%"),
                suitable_for: &[Sensitive, Dry, Dehydrated],
                benefits: "Smooths texture while attracting moisture",
                precautions: &["Introduce gradually", "Use sunscreen daily"],
            },
        ),
    ],
    fallback: ProductEntry {
        name: "AHA Exfoliating Toner",
        actives: &["Glycolic Acid 7%"],
        strength: Some("7%"),
        suitable_for: &[Normal, Combination],
        benefits: "Resurfaces dull skin and refines texture",
        precautions: &["Introduce gradually", "Use sunscreen daily"],
    },
};

pub(crate) static HYDRATING_SERUMS: ProductTable = ProductTable {
    rows: &[(
        &[Sensitive],
        ProductEntry {
            name: "Centella Hydrating Serum",
            actives: &["Centella Asiatica", "Hyaluronic Acid"],
            strength: None,
            suitable_for: &[Sensitive, Dry, Normal],
            benefits: "Hydrates and soothes overnight",
            precautions: &[],
        },
    )],
    fallback: ProductEntry {
        name: "Hyaluronic Acid Serum",
        actives: &["Hyaluronic Acid", "Panthenol"],
        strength: None,
        suitable_for: &[Normal, Combination, Oily, Dry, Dehydrated],
        benefits: "Multi-weight hydration for plumper skin",
        precautions: &["Apply to damp skin"],
    },
};

pub(crate) static NIGHT_MOISTURIZERS: ProductTable = ProductTable {
    rows: &[
        (
            &[Oily],
            ProductEntry {
                name: "Oil-Free Night Gel",
                actives: &["Peptides", "Hyaluronic Acid"],
                strength: None,
                suitable_for: &[Oily, Combination],
                benefits: "Overnight repair without clogging pores",
                precautions: &[],
            },
        ),
        (
            &[Dry, Dehydrated],
            ProductEntry {
                name: "Overnight Repair Cream",
                actives: &["Ceramides", "Peptides", "Squalane"],
                strength: None,
                suitable_for: &[Dry, Dehydrated],
                benefits: "Deep overnight nourishment",
                precautions: &[],
            },
        ),
        (
            &[Sensitive],
            ProductEntry {
                name: "Barrier Repair Night Cream",
                actives: &["Ceramides", "Colloidal Oatmeal"],
                strength: None,
                suitable_for: &[Sensitive, Dry],
                benefits: "Rebuilds the barrier while you sleep",
                precautions: &[],
            },
        ),
    ],
    fallback: ProductEntry {
        name: "Night Recovery Cream",
        actives: &["Peptides", "Ceramides"],
        strength: None,
        suitable_for: &[Normal, Combination],
        benefits: "Supports overnight barrier recovery",
        precautions: &[],
    },
};

pub(crate) static SPOT_TREATMENTS: ProductTable = ProductTable {
    rows: &[(
        &[Sensitive],
        ProductEntry {
            name: "Sulfur Spot Treatment",
            actives: &["Sulfur 5%", "Zinc Oxide"],
            strength: Some("5%"),
            suitable_for: &[Sensitive, Dry],
            benefits: "Dries out blemishes with minimal irritation",
            precautions: &["Apply only to active blemishes"],
        },
    )],
    fallback: ProductEntry {
        name: "Benzoyl Peroxide Spot Gel",
        actives: &["Benzoyl Peroxide 2.5%"],
        strength: Some("2.5%"),
        suitable_for: &[Normal, Combination, Oily],
        benefits: "Kills acne-causing bacteria on active breakouts",
        precautions: &["Apply only to active blemishes", "May bleach fabrics"],
    },
};

pub(crate) static CLAY_MASK: ProductEntry = ProductEntry {
    name: "Purifying Clay Mask",
    actives: &["Kaolin Clay", "Bentonite Clay"],
    strength: None,
    suitable_for: &[Oily, Combination, Normal],
    benefits: "Draws out impurities and absorbs excess oil",
    precautions: &["Rinse before fully dry"],
};

pub(crate) static BRIGHTENING_MASK: ProductEntry = ProductEntry {
    name: "Vitamin C Brightening Mask",
    actives: &["Vitamin C", "Kojic Acid"],
    strength: None,
    suitable_for: &[Normal, Combination, Oily, Dry, Dehydrated],
    benefits: "Evens tone and fades post-blemish marks",
    precautions: &["Patch test first"],
};

pub(crate) static HYDRATING_MASK: ProductEntry = ProductEntry {
    name: "Hydrating Overnight Mask",
    actives: &["Hyaluronic Acid", "Ceramides"],
    strength: None,
    suitable_for: &[Normal, Combination, Oily, Dry, Dehydrated, Sensitive],
    benefits: "Intensive moisture boost",
    precautions: &[],
};

pub(crate) static PHA_EXFOLIATOR: ProductEntry = ProductEntry {
    name: "PHA Gentle Exfoliator",
    actives: &["Gluconolactone", "Lactobionic Acid"],
    strength: None,
    suitable_for: &[Sensitive, Dry, Dehydrated],
    benefits: "Large-molecule acids that exfoliate without stinging",
    precautions: &["Skip on nights with other exfoliants"],
};

pub(crate) static AHA_BHA_EXFOLIATOR: ProductEntry = ProductEntry {
    name: "AHA/BHA Resurfacing Exfoliator",
    actives: &["Glycolic Acid 10%", "Salicylic Acid 2%"],
    strength: Some("10% / 2%"),
    suitable_for: &[Normal, Combination, Oily],
    benefits: "Weekly resurfacing for smoother, clearer skin",
    precautions: &["Skip on nights with retinol", "Use sunscreen daily"],
};
