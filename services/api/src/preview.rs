use clap::Args;
use faceguard::error::AppError;
use faceguard::skincare::{
    lifestyle_advice, ConflictChecker, Disclaimers, LifestyleAdvice, ProductCheck,
    RawSkinAnalysis, Routine, RoutineGenerator, SafetyReport, ScanServiceError, SkinAnalysis,
    DISCLAIMERS,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct RoutineArgs {
    /// Path to an analysis collaborator payload (JSON, optionally fenced)
    #[arg(long)]
    pub(crate) input: PathBuf,
}

/// Everything a scan produces except persistence and progress.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoutinePreview {
    pub(crate) analysis: SkinAnalysis,
    pub(crate) routine: Routine,
    pub(crate) safety: SafetyReport,
    pub(crate) product_checks: Vec<ProductCheck>,
    pub(crate) advice: LifestyleAdvice,
    pub(crate) disclaimers: Disclaimers,
}

pub(crate) fn run_routine_preview(args: RoutineArgs) -> Result<(), AppError> {
    let preview = preview_from_path(&args.input)?;
    let rendered = serde_json::to_string_pretty(&preview).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn preview_from_path(path: &Path) -> Result<RoutinePreview, AppError> {
    let text = std::fs::read_to_string(path)?;
    preview_from_text(&text)
}

pub(crate) fn preview_from_text(text: &str) -> Result<RoutinePreview, AppError> {
    let analysis = RawSkinAnalysis::from_json(text)?.normalize()?;
    let routine = RoutineGenerator::new().generate(&analysis);
    routine.validate().map_err(ScanServiceError::from)?;
    let checker = ConflictChecker::new();
    let safety = checker.check(&routine);
    let product_checks = checker.screen_products(&routine, analysis.skin_type);

    Ok(RoutinePreview {
        advice: lifestyle_advice(&analysis),
        analysis,
        routine,
        safety,
        product_checks,
        disclaimers: DISCLAIMERS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use faceguard::skincare::{ProductCategory, SkinType};

    #[test]
    fn preview_builds_a_checked_routine() {
        let preview = preview_from_text(
            "```json\n{\"skinType\":\"dry skin\",\"glowScore\":61,\
\"issues\":[{\"category\":\"Fine Lines\",\"severity\":\"moderate\"}]}\n```",
        )
        .expect("preview builds");

        assert_eq!(preview.analysis.skin_type, SkinType::Dry);
        let last = preview.routine.morning.last().expect("morning steps");
        assert_eq!(last.category, ProductCategory::Sunscreen);
        assert_eq!(preview.safety.safe, preview.safety.conflicts.is_empty());
        assert!(preview
            .product_checks
            .iter()
            .all(|check| !check.safety.warnings.is_empty()));
        assert!(!preview.disclaimers.medical.is_empty());
    }

    #[test]
    fn payload_without_glow_score_is_an_upstream_failure() {
        let err = preview_from_text(r#"{"skinType":"Oily"}"#).expect_err("glow score required");
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = preview_from_path(Path::new("/nonexistent/faceguard/scan.json"))
            .expect_err("file is missing");
        assert!(matches!(err, AppError::Io(_)));
    }
}
