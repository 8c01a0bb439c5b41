use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::skincare::domain::{IssueCategory, SkinType};
use crate::skincare::repository::ScanRecord;

const TOP_ISSUE_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlowTrend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlowScoreStats {
    pub current: u8,
    pub average: u8,
    pub highest: u8,
    pub lowest: u8,
    pub trend: GlowTrend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinTypeStats {
    pub current: SkinType,
    pub most_common: SkinType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCount {
    pub issue: IssueCategory,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStatistics {
    pub total_scans: usize,
    pub glow_score: GlowScoreStats,
    pub skin_type: SkinTypeStats,
    pub top_issues: Vec<IssueCount>,
    pub streak: u32,
    pub first_scan_date: DateTime<Utc>,
    pub last_scan_date: DateTime<Utc>,
}

/// Aggregates a user's scans, most recent first. `None` when there are no scans.
pub fn statistics(scans: &[ScanRecord], streak: u32) -> Option<ScanStatistics> {
    let latest = scans.first()?;
    let oldest = scans.last()?;

    let scores: Vec<u8> = scans.iter().map(|scan| scan.analysis.glow_score).collect();
    let sum: u32 = scores.iter().map(|score| u32::from(*score)).sum();
    let average = (f64::from(sum) / scores.len() as f64).round() as u8;

    let trend = match scores.as_slice() {
        [current, previous, ..] if current > previous => GlowTrend::Improving,
        [_, _, ..] => GlowTrend::Declining,
        _ => GlowTrend::Stable,
    };

    Some(ScanStatistics {
        total_scans: scans.len(),
        glow_score: GlowScoreStats {
            current: latest.analysis.glow_score,
            average,
            highest: scores.iter().copied().max().unwrap_or_default(),
            lowest: scores.iter().copied().min().unwrap_or_default(),
            trend,
        },
        skin_type: SkinTypeStats {
            current: latest.analysis.skin_type,
            most_common: most_common_skin_type(scans).unwrap_or(latest.analysis.skin_type),
        },
        top_issues: top_issues(scans),
        streak,
        first_scan_date: oldest.created_at,
        last_scan_date: latest.created_at,
    })
}

/// Ties go to the type seen most recently.
fn most_common_skin_type(scans: &[ScanRecord]) -> Option<SkinType> {
    let mut counts: Vec<(SkinType, usize)> = Vec::new();
    for scan in scans {
        match counts
            .iter_mut()
            .find(|(skin_type, _)| *skin_type == scan.analysis.skin_type)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((scan.analysis.skin_type, 1)),
        }
    }
    counts
        .into_iter()
        .rev()
        .max_by_key(|(_, count)| *count)
        .map(|(skin_type, _)| skin_type)
}

/// Ties keep first-seen order.
fn top_issues(scans: &[ScanRecord]) -> Vec<IssueCount> {
    let mut order: Vec<IssueCategory> = Vec::new();
    let mut counts: HashMap<IssueCategory, usize> = HashMap::new();
    for issue in scans.iter().flat_map(|scan| &scan.analysis.issues) {
        let count = counts.entry(issue.category).or_insert(0);
        if *count == 0 {
            order.push(issue.category);
        }
        *count += 1;
    }

    let mut ranked: Vec<IssueCount> = order
        .into_iter()
        .map(|issue| IssueCount {
            issue,
            count: counts.get(&issue).copied().unwrap_or_default(),
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_ISSUE_LIMIT);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skincare::domain::Severity;
    use crate::skincare::tests::common::{analysis, at, issue, scan};

    fn history() -> Vec<ScanRecord> {
        vec![
            scan(
                "s3",
                "2025-03-14T08:00:00Z",
                analysis(
                    SkinType::Combination,
                    vec![issue(IssueCategory::Texture, Severity::Mild, "")],
                )
                .with_glow(81),
            ),
            scan(
                "s2",
                "2025-03-09T08:00:00Z",
                analysis(
                    SkinType::Oily,
                    vec![
                        issue(IssueCategory::Acne, Severity::Moderate, ""),
                        issue(IssueCategory::Texture, Severity::Mild, ""),
                    ],
                )
                .with_glow(72),
            ),
            scan(
                "s1",
                "2025-03-02T08:00:00Z",
                analysis(
                    SkinType::Oily,
                    vec![
                        issue(IssueCategory::Acne, Severity::Severe, ""),
                        issue(IssueCategory::Pigmentation, Severity::Mild, ""),
                    ],
                )
                .with_glow(64),
            ),
        ]
    }

    #[test]
    fn no_scans_means_no_statistics() {
        assert_eq!(statistics(&[], 0), None);
    }

    #[test]
    fn aggregates_glow_scores_and_dates() {
        let stats = statistics(&history(), 3).expect("statistics");

        assert_eq!(stats.total_scans, 3);
        assert_eq!(stats.glow_score.current, 81);
        assert_eq!(stats.glow_score.average, 72);
        assert_eq!(stats.glow_score.highest, 81);
        assert_eq!(stats.glow_score.lowest, 64);
        assert_eq!(stats.glow_score.trend, GlowTrend::Improving);
        assert_eq!(stats.streak, 3);
        assert_eq!(stats.first_scan_date, at("2025-03-02T08:00:00Z"));
        assert_eq!(stats.last_scan_date, at("2025-03-14T08:00:00Z"));
    }

    #[test]
    fn counts_skin_types_and_issues() {
        let stats = statistics(&history(), 3).expect("statistics");

        assert_eq!(stats.skin_type.current, SkinType::Combination);
        assert_eq!(stats.skin_type.most_common, SkinType::Oily);
        assert_eq!(
            stats.top_issues,
            vec![
                IssueCount {
                    issue: IssueCategory::Texture,
                    count: 2
                },
                IssueCount {
                    issue: IssueCategory::Acne,
                    count: 2
                },
                IssueCount {
                    issue: IssueCategory::Pigmentation,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn skin_type_ties_favor_the_latest_scan() {
        let scans = &history()[..2];
        let stats = statistics(scans, 2).expect("statistics");
        assert_eq!(stats.skin_type.most_common, SkinType::Combination);
    }

    #[test]
    fn single_scan_is_stable_and_equal_scores_decline() {
        let scans = history();
        let single = statistics(&scans[..1], 1).expect("statistics");
        assert_eq!(single.glow_score.trend, GlowTrend::Stable);

        let mut flat = scans;
        flat[0].analysis.glow_score = 72;
        let stats = statistics(&flat, 3).expect("statistics");
        assert_eq!(stats.glow_score.trend, GlowTrend::Declining);
    }
}
