//! Catalog loading from YAML or JSON files.
//!
//! Each file holds a top-level list of entries. The format is picked from
//! the file extension (`.yaml`/`.yml` or `.json`).

use super::{BenchmarkTable, QuestionCatalog, RecommendationCatalog, StageBenchmark};
use crate::error::{ConfigurationErrorKind, ErrorContext, OctoflowError, Result};
use crate::model::{Question, Recommendation};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Supported catalog encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(OctoflowError::configuration(
                format!("catalog file {}", path.display()),
                ConfigurationErrorKind::UnsupportedFormat(ext),
            )),
        }
    }
}

/// Decode any document from a string
pub fn parse_document<T: DeserializeOwned>(content: &str, format: CatalogFormat) -> Result<T> {
    let document = match format {
        CatalogFormat::Yaml => serde_yaml_ng::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
    };
    Ok(document)
}

/// Decode a list of entries from a string
pub fn parse_entries<T: DeserializeOwned>(content: &str, format: CatalogFormat) -> Result<Vec<T>> {
    parse_document(content, format)
}

fn read_entries<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| OctoflowError::io(path, e))?;
    let entries: Vec<T> = parse_entries(&content, format)
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Load and validate a question catalog
pub fn load_question_catalog(path: &Path) -> Result<QuestionCatalog> {
    let questions: Vec<Question> = read_entries(path)?;
    QuestionCatalog::new(questions).with_context(|| format!("validating {}", path.display()))
}

/// Load and validate a recommendation catalog
pub fn load_recommendation_catalog(path: &Path) -> Result<RecommendationCatalog> {
    let entries: Vec<Recommendation> = read_entries(path)?;
    RecommendationCatalog::new(entries).with_context(|| format!("validating {}", path.display()))
}

/// Load and validate a benchmark table
pub fn load_benchmark_table(path: &Path) -> Result<BenchmarkTable> {
    let benchmarks: Vec<StageBenchmark> = read_entries(path)?;
    BenchmarkTable::new(benchmarks).with_context(|| format!("validating {}", path.display()))
}
