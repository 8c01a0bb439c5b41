use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for users owning scan history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for persisted scans. Assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScanId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ScanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Normal,
    Sensitive,
    Dehydrated,
}

impl SkinType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Oily,
            Self::Dry,
            Self::Combination,
            Self::Normal,
            Self::Sensitive,
            Self::Dehydrated,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Oily => "Oily",
            Self::Dry => "Dry",
            Self::Combination => "Combination",
            Self::Normal => "Normal",
            Self::Sensitive => "Sensitive",
            Self::Dehydrated => "Dehydrated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IssueCategory {
    Acne,
    #[serde(rename = "Acne Scars")]
    AcneScars,
    Pigmentation,
    #[serde(rename = "Texture Issues")]
    Texture,
    #[serde(rename = "Hydration/Barrier Issues")]
    HydrationBarrier,
    #[serde(rename = "Aging Signs")]
    Aging,
    #[serde(rename = "Under-Eye Issues")]
    UnderEye,
    #[serde(rename = "Oil & Sebum Issues")]
    OilSebum,
    Sensitivity,
}

impl IssueCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Acne => "Acne",
            Self::AcneScars => "Acne Scars",
            Self::Pigmentation => "Pigmentation",
            Self::Texture => "Texture Issues",
            Self::HydrationBarrier => "Hydration/Barrier Issues",
            Self::Aging => "Aging Signs",
            Self::UnderEye => "Under-Eye Issues",
            Self::OilSebum => "Oil & Sebum Issues",
            Self::Sensitivity => "Sensitivity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Weight used when averaging issue severities into a 0-100 metric.
    pub const fn score(self) -> u32 {
        match self {
            Self::Mild => 30,
            Self::Moderate => 60,
            Self::Severe => 90,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub category: IssueCategory,
    pub severity: Severity,
    pub details: String,
    #[serde(default)]
    pub affected_areas: Vec<String>,
    pub confidence: u8,
}

impl Issue {
    pub(crate) fn details_mention(&self, needle: &str) -> bool {
        self.details.to_lowercase().contains(needle)
    }
}

/// Free-text commentary per named skin axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oiliness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aging: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pigmentation: Option<String>,
}

/// Validated assessment produced once per scan. Only built through the intake adapter
/// or directly by trusted callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinAnalysis {
    pub skin_type: SkinType,
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    pub glow_score: u8,
    #[serde(default)]
    pub detailed_analysis: DetailedAnalysis,
    pub confidence: u8,
}

impl SkinAnalysis {
    pub fn issues_in(&self, category: IssueCategory) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(move |issue| issue.category == category)
    }

    pub fn has_issue(&self, category: IssueCategory) -> bool {
        self.issues_in(category).next().is_some()
    }

    pub fn primary_issue(&self) -> Option<&Issue> {
        self.issues.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cadence {
    Morning,
    Night,
    Weekly,
}

impl Cadence {
    pub const fn ordered() -> [Self; 3] {
        [Self::Morning, Self::Night, Self::Weekly]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Night => "Night",
            Self::Weekly => "Weekly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Facewash,
    #[serde(rename = "Oil Cleanser")]
    OilCleanser,
    Toner,
    Serum,
    #[serde(rename = "Treatment Serum")]
    Treatment,
    #[serde(rename = "Exfoliant (AHA/BHA)")]
    Exfoliant,
    Moisturizer,
    #[serde(rename = "Night Cream")]
    NightCream,
    Sunscreen,
    #[serde(rename = "Spot Treatment")]
    SpotTreatment,
    #[serde(rename = "Face Mask")]
    FaceMask,
    Exfoliator,
}

impl ProductCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facewash => "Facewash",
            Self::OilCleanser => "Oil Cleanser",
            Self::Toner => "Toner",
            Self::Serum => "Serum",
            Self::Treatment => "Treatment Serum",
            Self::Exfoliant => "Exfoliant (AHA/BHA)",
            Self::Moisturizer => "Moisturizer",
            Self::NightCream => "Night Cream",
            Self::Sunscreen => "Sunscreen",
            Self::SpotTreatment => "Spot Treatment",
            Self::FaceMask => "Face Mask",
            Self::Exfoliator => "Exfoliator",
        }
    }
}

/// Shared priority ladder for routine steps and safety recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    High,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub active_ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
    #[serde(default)]
    pub suitable_for: Vec<SkinType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub precautions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineStep {
    pub order: u8,
    pub category: ProductCategory,
    pub product: Product,
    pub cadence: Cadence,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Ordered steps per cadence. Order within each list is application order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub morning: Vec<RoutineStep>,
    pub night: Vec<RoutineStep>,
    pub weekly: Vec<RoutineStep>,
}

impl Routine {
    pub fn steps(&self, cadence: Cadence) -> &[RoutineStep] {
        match cadence {
            Cadence::Morning => &self.morning,
            Cadence::Night => &self.night,
            Cadence::Weekly => &self.weekly,
        }
    }

    pub fn step_count(&self) -> usize {
        self.morning.len() + self.night.len() + self.weekly.len()
    }
}

/// Tracked 0-100 skin dimensions derived from an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    AcneSeverity,
    OilinessLevel,
    Redness,
    DarkSpots,
    TextureSmoothness,
    BarrierHealth,
}

impl Metric {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::AcneSeverity,
            Self::OilinessLevel,
            Self::Redness,
            Self::DarkSpots,
            Self::TextureSmoothness,
            Self::BarrierHealth,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::AcneSeverity => "acneSeverity",
            Self::OilinessLevel => "oilinessLevel",
            Self::Redness => "redness",
            Self::DarkSpots => "darkSpots",
            Self::TextureSmoothness => "textureSmoothness",
            Self::BarrierHealth => "barrierHealth",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AcneSeverity => "Acne Severity",
            Self::OilinessLevel => "Oiliness Level",
            Self::Redness => "Redness",
            Self::DarkSpots => "Dark Spots",
            Self::TextureSmoothness => "Texture Smoothness",
            Self::BarrierHealth => "Barrier Health",
        }
    }

    /// Acne, dark spots and redness improve as they fall; the rest improve as they rise.
    pub const fn lower_is_better(self) -> bool {
        matches!(self, Self::AcneSeverity | Self::DarkSpots | Self::Redness)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSet(BTreeMap<Metric, u8>);

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: Metric, value: u8) {
        self.0.insert(metric, value.min(100));
    }

    /// Missing metrics read as zero, matching records persisted before a metric existed.
    pub fn get(&self, metric: Metric) -> u8 {
        self.0.get(&metric).copied().unwrap_or(0)
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.0.contains_key(&metric)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, u8)> + '_ {
        self.0.iter().map(|(metric, value)| (*metric, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Metric, u8)> for MetricSet {
    fn from_iter<I: IntoIterator<Item = (Metric, u8)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (metric, value) in iter {
            set.insert(metric, value);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    pub category: IssueCategory,
    pub severity: Severity,
}

/// One entry of a user's append-only progress history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub scan_id: ScanId,
    pub timestamp: DateTime<Utc>,
    pub glow_score: u8,
    pub metrics: MetricSet,
    pub skin_type: SkinType,
    #[serde(default)]
    pub issues_summary: Vec<IssueSummary>,
}
