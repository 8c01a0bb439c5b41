use super::normalizer::normalize_label;
use crate::skincare::domain::{IssueCategory, Severity, SkinType};
use std::collections::HashMap;
use std::sync::OnceLock;

static SKIN_TYPE_MAP: OnceLock<HashMap<String, SkinType>> = OnceLock::new();
static CATEGORY_MAP: OnceLock<HashMap<String, IssueCategory>> = OnceLock::new();
static SEVERITY_MAP: OnceLock<HashMap<String, Severity>> = OnceLock::new();

pub(crate) fn skin_type_for(raw: &str) -> Option<SkinType> {
    skin_type_map().get(&normalize_label(raw)).copied()
}

pub(crate) fn category_for(raw: &str) -> Option<IssueCategory> {
    category_map().get(&normalize_label(raw)).copied()
}

pub(crate) fn severity_for(raw: &str) -> Option<Severity> {
    severity_map().get(&normalize_label(raw)).copied()
}

fn build<T: Copy>(entries: &[(&str, T)]) -> HashMap<String, T> {
    let mut map = HashMap::with_capacity(entries.len());
    for (alias, value) in entries {
        map.insert(normalize_label(alias), *value);
    }
    map
}

fn skin_type_map() -> &'static HashMap<String, SkinType> {
    SKIN_TYPE_MAP.get_or_init(|| {
        const ALIASES: &[(&str, SkinType)] = &[
            ("Oily", SkinType::Oily),
            ("Oily Skin", SkinType::Oily),
            ("Dry", SkinType::Dry),
            ("Dry Skin", SkinType::Dry),
            ("Combination", SkinType::Combination),
            ("Combination Skin", SkinType::Combination),
            ("Comb", SkinType::Combination),
            ("Combo", SkinType::Combination),
            ("Normal", SkinType::Normal),
            ("Normal Skin", SkinType::Normal),
            ("Sensitive", SkinType::Sensitive),
            ("Sensitive Skin", SkinType::Sensitive),
            ("Dehydrated", SkinType::Dehydrated),
            ("Dehydrated Skin", SkinType::Dehydrated),
        ];
        build(ALIASES)
    })
}

fn category_map() -> &'static HashMap<String, IssueCategory> {
    CATEGORY_MAP.get_or_init(|| {
        const ALIASES: &[(&str, IssueCategory)] = &[
            ("Acne", IssueCategory::Acne),
            ("Breakouts", IssueCategory::Acne),
            ("Acne Scars", IssueCategory::AcneScars),
            ("Acne Scarring", IssueCategory::AcneScars),
            ("Scarring", IssueCategory::AcneScars),
            ("Pigmentation", IssueCategory::Pigmentation),
            ("Hyperpigmentation", IssueCategory::Pigmentation),
            ("Dark Spots", IssueCategory::Pigmentation),
            ("Texture", IssueCategory::Texture),
            ("Texture Issues", IssueCategory::Texture),
            ("Uneven Texture", IssueCategory::Texture),
            ("Hydration", IssueCategory::HydrationBarrier),
            ("Barrier", IssueCategory::HydrationBarrier),
            ("Dehydration", IssueCategory::HydrationBarrier),
            ("Hydration/Barrier", IssueCategory::HydrationBarrier),
            ("Hydration/Barrier Issues", IssueCategory::HydrationBarrier),
            ("Aging", IssueCategory::Aging),
            ("Ageing", IssueCategory::Aging),
            ("Aging Signs", IssueCategory::Aging),
            ("Fine Lines", IssueCategory::Aging),
            ("Wrinkles", IssueCategory::Aging),
            ("Under-Eye", IssueCategory::UnderEye),
            ("Under Eye", IssueCategory::UnderEye),
            ("Under-Eye Issues", IssueCategory::UnderEye),
            ("Dark Circles", IssueCategory::UnderEye),
            ("Oil & Sebum Issues", IssueCategory::OilSebum),
            ("Oil & Sebum", IssueCategory::OilSebum),
            ("Oil/Sebum", IssueCategory::OilSebum),
            ("Excess Oil", IssueCategory::OilSebum),
            ("Sebum", IssueCategory::OilSebum),
            ("Sensitivity", IssueCategory::Sensitivity),
            ("Redness", IssueCategory::Sensitivity),
        ];
        build(ALIASES)
    })
}

fn severity_map() -> &'static HashMap<String, Severity> {
    SEVERITY_MAP.get_or_init(|| {
        const ALIASES: &[(&str, Severity)] = &[
            ("Mild", Severity::Mild),
            ("Low", Severity::Mild),
            ("Slight", Severity::Mild),
            ("Moderate", Severity::Moderate),
            ("Medium", Severity::Moderate),
            ("Severe", Severity::Severe),
            ("High", Severity::Severe),
        ];
        build(ALIASES)
    })
}
