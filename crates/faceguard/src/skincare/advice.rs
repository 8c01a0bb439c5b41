use serde::{Deserialize, Serialize};

use super::domain::{IssueCategory, SkinAnalysis};

pub const MEDICAL_DISCLAIMER: &str = "FaceGuard provides cosmetic skincare guidance only and is not a medical device. Results are not a diagnosis. Consult a board-certified dermatologist for persistent, painful, or worsening skin conditions.";

pub const PRIVACY_NOTICE: &str = "Scan images are processed for analysis only. Only the resulting assessment and progress metrics are stored with your account.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryConcern {
    Acne,
    Dehydration,
    Aging,
}

impl PrimaryConcern {
    /// Derived from the first reported issue; anything unmapped is treated as dehydration.
    pub fn of(analysis: &SkinAnalysis) -> Self {
        match analysis.primary_issue().map(|issue| issue.category) {
            Some(IssueCategory::Acne) => Self::Acne,
            Some(IssueCategory::Aging) => Self::Aging,
            _ => Self::Dehydration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleAdvice {
    pub concern: PrimaryConcern,
    pub diet: &'static str,
    pub lifestyle: &'static str,
}

pub fn lifestyle_advice(analysis: &SkinAnalysis) -> LifestyleAdvice {
    let concern = PrimaryConcern::of(analysis);
    let (diet, lifestyle) = match concern {
        PrimaryConcern::Acne => (
            "Reduce dairy and high-glycemic sugar. Increase Zinc-rich foods.",
            "Change your pillowcase every 2 days and sanitize your phone screen.",
        ),
        PrimaryConcern::Dehydration => (
            "Increase intake of Omega-3 (Walnuts, Chia seeds) and Watermelon.",
            "Use a humidifier and avoid washing face with very hot water.",
        ),
        PrimaryConcern::Aging => (
            "Focus on Collagen-boosting Vitamin C and antioxidants (Berries).",
            "Prioritize 7-9 hours of sleep; skin repair peaks at night.",
        ),
    };

    LifestyleAdvice {
        concern,
        diet,
        lifestyle,
    }
}

/// Static notices attached to scan responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Disclaimers {
    pub medical: &'static str,
    pub privacy: &'static str,
}

pub const DISCLAIMERS: Disclaimers = Disclaimers {
    medical: MEDICAL_DISCLAIMER,
    privacy: PRIVACY_NOTICE,
};
