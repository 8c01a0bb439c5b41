use chrono::{DateTime, Utc};

use crate::skincare::domain::{
    Issue, IssueCategory, IssueSummary, Metric, MetricSet, ProgressRecord, ScanId, SkinAnalysis,
    SkinType,
};

const DEFAULT_TEXTURE_SMOOTHNESS: u8 = 80;
const DEFAULT_BARRIER_HEALTH: u8 = 85;

/// Derives every tracked metric from one analysis. Deterministic.
pub fn extract(analysis: &SkinAnalysis) -> MetricSet {
    Metric::ordered()
        .into_iter()
        .map(|metric| (metric, metric_value(metric, analysis)))
        .collect()
}

fn metric_value(metric: Metric, analysis: &SkinAnalysis) -> u8 {
    match metric {
        Metric::AcneSeverity => severity_score(analysis.issues_in(IssueCategory::Acne)),
        Metric::OilinessLevel => oiliness(analysis.skin_type),
        Metric::Redness => severity_score(analysis.issues.iter().filter(|issue| {
            issue.category == IssueCategory::Sensitivity
                || issue.details_mention("redness")
                || issue.details_mention("inflammation")
        })),
        Metric::DarkSpots => severity_score(analysis.issues_in(IssueCategory::Pigmentation)),
        Metric::TextureSmoothness => inverted(
            analysis.issues_in(IssueCategory::Texture),
            DEFAULT_TEXTURE_SMOOTHNESS,
        ),
        Metric::BarrierHealth => inverted(
            analysis.issues.iter().filter(|issue| {
                issue.category == IssueCategory::HydrationBarrier
                    || issue.details_mention("barrier")
            }),
            DEFAULT_BARRIER_HEALTH,
        ),
    }
}

/// Rounded mean of severity weights, capped at 100; zero for no issues.
fn severity_score<'a>(issues: impl Iterator<Item = &'a Issue>) -> u8 {
    let (total, count) = issues.fold((0u32, 0u32), |(total, count), issue| {
        (total + issue.severity.score(), count + 1)
    });
    if count == 0 {
        return 0;
    }
    let mean = (f64::from(total) / f64::from(count)).round();
    mean.min(100.0) as u8
}

/// `100 - score` for higher-is-better metrics, or `default` when nothing matched.
fn inverted<'a>(issues: impl Iterator<Item = &'a Issue>, default: u8) -> u8 {
    let mut issues = issues.peekable();
    if issues.peek().is_none() {
        return default;
    }
    100u8.saturating_sub(severity_score(issues))
}

fn oiliness(skin_type: SkinType) -> u8 {
    match skin_type {
        SkinType::Oily => 80,
        SkinType::Combination => 50,
        SkinType::Normal => 30,
        SkinType::Dry => 10,
        SkinType::Dehydrated => 5,
        SkinType::Sensitive => 30,
    }
}

impl ProgressRecord {
    /// History entry persisted after each scan.
    pub fn from_analysis(
        scan_id: ScanId,
        timestamp: DateTime<Utc>,
        analysis: &SkinAnalysis,
    ) -> Self {
        Self {
            scan_id,
            timestamp,
            glow_score: analysis.glow_score,
            metrics: extract(analysis),
            skin_type: analysis.skin_type,
            issues_summary: analysis
                .issues
                .iter()
                .map(|issue| IssueSummary {
                    category: issue.category,
                    severity: issue.severity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skincare::domain::Severity;
    use crate::skincare::tests::common::{analysis, issue};

    #[test]
    fn oily_acne_scenario() {
        let metrics = extract(&analysis(
            SkinType::Oily,
            vec![issue(IssueCategory::Acne, Severity::Moderate, "")],
        ));

        assert_eq!(metrics.get(Metric::AcneSeverity), 60);
        assert_eq!(metrics.get(Metric::OilinessLevel), 80);
        assert_eq!(metrics.get(Metric::DarkSpots), 0);
        assert_eq!(metrics.get(Metric::Redness), 0);
        assert_eq!(metrics.get(Metric::TextureSmoothness), 80);
        assert_eq!(metrics.get(Metric::BarrierHealth), 85);
        assert_eq!(metrics.len(), 6);
    }

    #[test]
    fn severity_means_are_rounded() {
        let metrics = extract(&analysis(
            SkinType::Combination,
            vec![
                issue(IssueCategory::Acne, Severity::Mild, ""),
                issue(IssueCategory::Acne, Severity::Moderate, ""),
                issue(IssueCategory::Acne, Severity::Moderate, ""),
            ],
        ));
        // (30 + 60 + 60) / 3 = 50
        assert_eq!(metrics.get(Metric::AcneSeverity), 50);

        let metrics = extract(&analysis(
            SkinType::Dry,
            vec![
                issue(IssueCategory::Pigmentation, Severity::Mild, ""),
                issue(IssueCategory::Pigmentation, Severity::Severe, ""),
                issue(IssueCategory::Pigmentation, Severity::Severe, ""),
            ],
        ));
        // 210 / 3 = 70
        assert_eq!(metrics.get(Metric::DarkSpots), 70);
        assert_eq!(metrics.get(Metric::OilinessLevel), 10);
    }

    #[test]
    fn redness_and_barrier_read_issue_details() {
        let metrics = extract(&analysis(
            SkinType::Sensitive,
            vec![
                issue(IssueCategory::Acne, Severity::Severe, "Cystic lesions with Redness"),
                issue(IssueCategory::Texture, Severity::Mild, "Damaged barrier around nose"),
            ],
        ));

        assert_eq!(metrics.get(Metric::Redness), 90);
        assert_eq!(metrics.get(Metric::TextureSmoothness), 70);
        assert_eq!(metrics.get(Metric::BarrierHealth), 70);
        assert_eq!(metrics.get(Metric::OilinessLevel), 30);
    }

    #[test]
    fn extraction_is_deterministic() {
        let input = analysis(
            SkinType::Normal,
            vec![issue(IssueCategory::Sensitivity, Severity::Moderate, "")],
        );
        assert_eq!(extract(&input), extract(&input));
    }

    #[test]
    fn progress_record_summarizes_issues() {
        let input = analysis(
            SkinType::Oily,
            vec![issue(IssueCategory::Acne, Severity::Moderate, "")],
        );
        let timestamp = DateTime::parse_from_rfc3339("2025-03-01T08:00:00Z")
            .expect("timestamp")
            .with_timezone(&Utc);
        let record = ProgressRecord::from_analysis(ScanId("scan-1".into()), timestamp, &input);

        assert_eq!(record.glow_score, input.glow_score);
        assert_eq!(record.metrics, extract(&input));
        assert_eq!(
            record.issues_summary,
            vec![IssueSummary {
                category: IssueCategory::Acne,
                severity: Severity::Moderate,
            }]
        );
    }
}
