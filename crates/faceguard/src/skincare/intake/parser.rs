use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Analysis collaborator payload before validation. Every field is kept as raw JSON
/// because the producer is a generative model with no schema guarantees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSkinAnalysis {
    #[serde(default)]
    pub skin_type: Value,
    #[serde(default)]
    pub issues: Value,
    #[serde(default)]
    pub strengths: Value,
    #[serde(default)]
    pub concerns: Value,
    #[serde(default)]
    pub glow_score: Value,
    #[serde(default, alias = "analysis")]
    pub detailed_analysis: Value,
    #[serde(default)]
    pub confidence: Value,
}

pub(crate) fn text(value: &Value) -> Option<&str> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Accepts JSON numbers or numeric strings, rounded and clamped to 0-100.
pub(crate) fn percent(value: &Value) -> Option<u8> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    }?;

    if !number.is_finite() {
        return None;
    }

    Some(number.round().clamp(0.0, 100.0) as u8)
}

/// Strings from an array (or a lone string), trimmed, de-duplicated in first-seen order.
pub(crate) fn string_list(value: &Value) -> Vec<String> {
    let candidates: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::String(_) => vec![value],
        _ => Vec::new(),
    };

    let mut seen: Vec<String> = Vec::new();
    for candidate in candidates {
        if let Some(entry) = text(candidate) {
            if !seen.iter().any(|existing| existing == entry) {
                seen.push(entry.to_string());
            }
        }
    }
    seen
}

pub(crate) fn objects(value: &Value) -> Vec<&Map<String, Value>> {
    match value {
        Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn field<'a>(object: &'a Map<String, Value>, key: &str) -> &'a Value {
    object.get(key).unwrap_or(&Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(percent(&json!(72.6)), Some(73));
        assert_eq!(percent(&json!(140)), Some(100));
        assert_eq!(percent(&json!(-3)), Some(0));
        assert_eq!(percent(&json!("85%")), Some(85));
        assert_eq!(percent(&json!("high")), None);
        assert_eq!(percent(&Value::Null), None);
    }

    #[test]
    fn string_list_drops_non_strings_and_duplicates() {
        let list = string_list(&json!(["Even tone", 4, " Even tone ", "", "Small pores"]));
        assert_eq!(list, vec!["Even tone".to_string(), "Small pores".to_string()]);
        assert_eq!(string_list(&json!("T-zone")), vec!["T-zone".to_string()]);
        assert!(string_list(&json!({"a": 1})).is_empty());
    }

    #[test]
    fn accepts_legacy_analysis_key() {
        let raw: RawSkinAnalysis = serde_json::from_value(json!({
            "skinType": "Dry",
            "glowScore": 60,
            "analysis": { "texture": "Smooth" }
        }))
        .expect("payload deserializes");
        assert_eq!(raw.detailed_analysis["texture"], "Smooth");
    }
}
