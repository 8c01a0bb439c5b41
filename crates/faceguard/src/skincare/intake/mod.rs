//! Boundary adapter turning the analysis collaborator's schema-free output into a
//! validated [`SkinAnalysis`]. Unrecognized enum values are coerced to safe defaults;
//! only structurally absent input is rejected.

mod mapping;
mod normalizer;
mod parser;

pub(crate) use normalizer::normalize_label;
pub use parser::RawSkinAnalysis;

use crate::skincare::domain::{
    DetailedAnalysis, Issue, IssueCategory, Severity, SkinAnalysis, SkinType,
};
use serde_json::{Map, Value};
use tracing::warn;

/// Upstream payloads the core refuses to build an analysis from.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("analysis payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("analysis payload must be a JSON object")]
    NotAnObject,
    #[error("analysis payload is missing a numeric `{0}`")]
    MissingField(&'static str),
}

impl RawSkinAnalysis {
    /// Parses collaborator text, tolerating a surrounding markdown code fence.
    pub fn from_json(text: &str) -> Result<Self, IntakeError> {
        let value: Value = serde_json::from_str(normalizer::strip_code_fence(text))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, IntakeError> {
        if !value.is_object() {
            return Err(IntakeError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn normalize(&self) -> Result<SkinAnalysis, IntakeError> {
        let glow_score =
            parser::percent(&self.glow_score).ok_or(IntakeError::MissingField("glowScore"))?;

        let issues = parser::objects(&self.issues)
            .into_iter()
            .map(normalize_issue)
            .collect();

        Ok(SkinAnalysis {
            skin_type: normalize_skin_type(&self.skin_type),
            issues,
            strengths: parser::string_list(&self.strengths),
            concerns: parser::string_list(&self.concerns),
            glow_score,
            detailed_analysis: normalize_detailed(&self.detailed_analysis),
            confidence: parser::percent(&self.confidence).unwrap_or(0),
        })
    }
}

fn normalize_skin_type(value: &Value) -> SkinType {
    let resolved = parser::text(value).and_then(mapping::skin_type_for);
    resolved.unwrap_or_else(|| {
        warn!(raw = %value, "unrecognized skin type, defaulting to Normal");
        SkinType::Normal
    })
}

fn normalize_issue(object: &Map<String, Value>) -> Issue {
    let raw_category = parser::field(object, "category");
    let category = parser::text(raw_category)
        .and_then(mapping::category_for)
        .unwrap_or_else(|| {
            warn!(raw = %raw_category, "unrecognized issue category, defaulting to Acne");
            IssueCategory::Acne
        });

    let raw_severity = parser::field(object, "severity");
    let severity = parser::text(raw_severity)
        .and_then(mapping::severity_for)
        .unwrap_or_else(|| {
            warn!(raw = %raw_severity, "unrecognized issue severity, defaulting to Mild");
            Severity::Mild
        });

    Issue {
        category,
        severity,
        details: parser::text(parser::field(object, "details"))
            .unwrap_or_default()
            .to_string(),
        affected_areas: parser::string_list(parser::field(object, "affectedAreas")),
        confidence: parser::percent(parser::field(object, "confidence")).unwrap_or(0),
    }
}

fn normalize_detailed(value: &Value) -> DetailedAnalysis {
    let Some(object) = value.as_object() else {
        return DetailedAnalysis::default();
    };

    let axis = |key: &str| parser::text(parser::field(object, key)).map(str::to_string);

    DetailedAnalysis {
        texture: axis("texture"),
        hydration: axis("hydration"),
        oiliness: axis("oiliness"),
        sensitivity: axis("sensitivity"),
        aging: axis("aging"),
        pigmentation: axis("pigmentation"),
    }
}
