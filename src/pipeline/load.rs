//! Input loading for the assessment pipeline.

use crate::catalog::loader::{CatalogFormat, parse_document};
use crate::catalog::{
    BenchmarkTable, QuestionCatalog, RecommendationCatalog, load_benchmark_table,
    load_question_catalog, load_recommendation_catalog,
};
use crate::config::AssessmentConfig;
use crate::engine::AssessmentEngine;
use crate::model::{RecommendationContext, ResponseSet};
use crate::recommend::PrioritizationConfig;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON or YAML document; files without a known extension are JSON
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = CatalogFormat::from_path(path).unwrap_or(CatalogFormat::Json);
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document = parse_document(&content, format)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(document)
}

/// Load a response set with context for error messages
pub fn load_responses_with_context(path: &Path, quiet: bool) -> Result<ResponseSet> {
    if !quiet {
        tracing::info!("Loading responses: {}", path.display());
    }
    let responses: ResponseSet = read_document(path)?;
    if !quiet {
        tracing::info!("Loaded {} responses", responses.len());
    }
    Ok(responses)
}

/// Load repository context used to boost recommendation priorities
pub fn load_context(path: &Path) -> Result<RecommendationContext> {
    read_document(path).with_context(|| format!("Invalid repository context in {}", path.display()))
}

/// Build an engine from configured catalog files, falling back to the
/// built-in catalogs for any that are unset.
pub fn build_engine(
    assessment: &AssessmentConfig,
    prioritization: &PrioritizationConfig,
) -> Result<AssessmentEngine> {
    let questions = match assessment.questions_file.as_deref() {
        Some(path) => load_question_catalog(path)?,
        None => QuestionCatalog::builtin(),
    };
    let recommendations = match assessment.recommendations_file.as_deref() {
        Some(path) => load_recommendation_catalog(path)?,
        None => RecommendationCatalog::builtin(),
    };
    let benchmarks = match assessment.benchmarks_file.as_deref() {
        Some(path) => load_benchmark_table(path)?,
        None => BenchmarkTable::builtin(),
    };

    tracing::debug!(
        "Engine ready: {} questions, {} recommendations, {} stages",
        questions.len(),
        recommendations.len(),
        benchmarks.iter().count()
    );

    Ok(AssessmentEngine::new(questions, recommendations, benchmarks)
        .with_prioritization(prioritization.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_responses_json_and_yaml() {
        let tmp = TempDir::new().unwrap();
        let json = tmp.path().join("responses.json");
        std::fs::write(&json, r#"{"sec-dependency-scanning": 3, "rel-ci-pipeline": {"value": 4}}"#)
            .unwrap();
        let yaml = tmp.path().join("responses.yaml");
        std::fs::write(&yaml, "sec-dependency-scanning: 3\nrel-ci-pipeline:\n  value: 4\n").unwrap();

        let from_json = load_responses_with_context(&json, true).unwrap();
        let from_yaml = load_responses_with_context(&yaml, true).unwrap();
        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json.len(), 2);
    }

    #[test]
    fn test_load_responses_missing_file() {
        let err = load_responses_with_context(Path::new("/nonexistent/r.json"), true).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/r.json"));
    }

    #[test]
    fn test_load_context() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("context.json");
        std::fs::write(&path, r#"{"is_public": true, "recent_pr_count": 12}"#).unwrap();

        let ctx = load_context(&path).unwrap();
        assert!(ctx.is_public);
        assert_eq!(ctx.recent_pr_count, Some(12));
        assert!(!ctx.has_ci);
    }

    #[test]
    fn test_build_engine_defaults_to_builtin() {
        let engine =
            build_engine(&AssessmentConfig::default(), &PrioritizationConfig::default()).unwrap();
        assert_eq!(engine.questions().len(), QuestionCatalog::builtin().len());
    }

    #[test]
    fn test_build_engine_rejects_invalid_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("questions.yaml");
        std::fs::write(&path, "[]\n").unwrap();
        let config = AssessmentConfig {
            questions_file: Some(path),
            ..AssessmentConfig::default()
        };
        assert!(build_engine(&config, &PrioritizationConfig::default()).is_err());
    }
}
