use serde::{Deserialize, Serialize};

use super::report::SafetySeverity;
use crate::skincare::domain::{Cadence, Product, Routine, SkinType};

const SENSITIVE_IRRITANTS: &[&str] = &["fragrance", "alcohol", "essential oils", "retinol"];
const PREGNANCY_CAUTIONS: &[&str] = &["retinol", "retinoid", "salicylic acid"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWarning {
    pub severity: SafetySeverity,
    pub message: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSafety {
    pub safe: bool,
    pub warnings: Vec<ProductWarning>,
}

/// Product screening outcome for one routine step that raised at least one warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCheck {
    pub cadence: Cadence,
    pub step: u8,
    pub product: String,
    #[serde(flatten)]
    pub safety: ProductSafety,
}

/// Runs [`validate_product`] over every step in cadence order. Clean products are
/// left out.
pub fn screen_routine(routine: &Routine, skin_type: SkinType) -> Vec<ProductCheck> {
    Cadence::ordered()
        .into_iter()
        .flat_map(|cadence| {
            routine.steps(cadence).iter().filter_map(move |step| {
                let safety = validate_product(&step.product, skin_type);
                (!safety.warnings.is_empty()).then(|| ProductCheck {
                    cadence,
                    step: step.order,
                    product: step.product.name.clone(),
                    safety,
                })
            })
        })
        .collect()
}

/// Screens a single product against a skin type. `safe` is false when any HIGH or
/// CRITICAL warning is raised.
pub fn validate_product(product: &Product, skin_type: SkinType) -> ProductSafety {
    let mut warnings = Vec::new();

    if !product.suitable_for.is_empty() && !product.suitable_for.contains(&skin_type) {
        warnings.push(ProductWarning {
            severity: SafetySeverity::Medium,
            message: format!(
                "This product may not be ideal for {} skin",
                skin_type.label()
            ),
            recommendation: "Consider alternatives specifically formulated for your skin type"
                .to_string(),
        });
    }

    if skin_type == SkinType::Sensitive {
        let irritants = matching(product, SENSITIVE_IRRITANTS);
        if !irritants.is_empty() {
            warnings.push(ProductWarning {
                severity: SafetySeverity::High,
                message: format!(
                    "Product contains potential irritants for sensitive skin: {}",
                    irritants.join(", ")
                ),
                recommendation:
                    "Patch test carefully or choose fragrance-free, gentle alternatives"
                        .to_string(),
            });
        }
    }

    let cautions = matching(product, PREGNANCY_CAUTIONS);
    if !cautions.is_empty() {
        warnings.push(ProductWarning {
            severity: SafetySeverity::Critical,
            message: format!(
                "Product contains ingredients not recommended during pregnancy/nursing: {}",
                cautions.join(", ")
            ),
            recommendation: "Consult your healthcare provider before use if pregnant or nursing"
                .to_string(),
        });
    }

    let safe = !warnings
        .iter()
        .any(|warning| warning.severity >= SafetySeverity::High);

    ProductSafety { safe, warnings }
}

fn matching<'a>(product: &'a Product, needles: &[&str]) -> Vec<&'a str> {
    product
        .active_ingredients
        .iter()
        .filter(|ingredient| {
            let lowered = ingredient.to_lowercase();
            needles.iter().any(|needle| lowered.contains(needle))
        })
        .map(String::as_str)
        .collect()
}
