//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → assess → report pipeline, error
//! handling paths, and CLI command handlers with real fixture files.

use octoflow::cli::{AssessConfig, CatalogListing, ContextOverrides, run_assess, run_questions};
use octoflow::config::AppConfigBuilder;
use octoflow::model::Stage;
use octoflow::pipeline::{
    OutputTarget, auto_detect_format, build_engine, exit_codes, load_context,
    load_responses_with_context,
};
use octoflow::reports::ReportFormat;
use octoflow::{AppConfig, ScoringWarning};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn assess_config(responses: &str, app: AppConfig) -> AssessConfig {
    AssessConfig {
        responses_path: fixture_path(responses),
        stage: None,
        context_path: None,
        context_overrides: ContextOverrides::default(),
        max_recommendations: None,
        hide_actions: false,
        app,
    }
}

fn json_report_app(output: &Path) -> AppConfigBuilder {
    AppConfig::builder()
        .output_format(ReportFormat::Json)
        .output_file(Some(output.to_path_buf()))
        .quiet(true)
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

// ============================================================================
// Load Stage Tests
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn loads_timestamped_json_responses() {
        let responses =
            load_responses_with_context(&fixture_path("responses/seed_team.json"), true).unwrap();
        assert_eq!(responses.len(), 12);
        assert_eq!(responses.get("mnt-linting").unwrap().value, 4);
        assert!(responses.last_answered_at().is_some());
    }

    #[test]
    fn loads_mixed_yaml_responses() {
        let responses =
            load_responses_with_context(&fixture_path("responses/mixed_quality.yaml"), true)
                .unwrap();
        assert_eq!(responses.len(), 5);
        assert_eq!(responses.get("sec-secret-management").unwrap().value, 4);
        assert_eq!(responses.get("rel-ci-pipeline").unwrap().value, 7);
    }

    #[test]
    fn loads_repository_context() {
        let ctx = load_context(&fixture_path("context/public_repo.json")).unwrap();
        assert!(ctx.is_public);
        assert!(ctx.has_ci);
        assert_eq!(ctx.repository_size_kb, Some(1200));
        assert_eq!(ctx.recent_pr_count, Some(42));
    }

    #[test]
    fn missing_response_file_names_the_path() {
        let err = load_responses_with_context(Path::new("/nonexistent/answers.json"), true)
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/answers.json"));
    }

    #[test]
    fn mixed_responses_produce_warnings_not_errors() {
        let engine = build_engine(&Default::default(), &Default::default()).unwrap();
        let responses =
            load_responses_with_context(&fixture_path("responses/mixed_quality.yaml"), true)
                .unwrap();
        let result = engine.evaluate(&responses, Stage::Seed, None).unwrap();

        assert!(result.warnings.contains(&ScoringWarning::ValueOutOfRange {
            question_id: "rel-ci-pipeline".to_string(),
            value: 7
        }));
        assert!(result.warnings.contains(&ScoringWarning::UnknownQuestion {
            question_id: "retired-question".to_string()
        }));
        assert!(
            !result
                .warnings
                .iter()
                .any(|w| w.to_string().contains("doc-onboarding"))
        );
        assert_eq!(result.answered_questions, 2);
        assert_eq!(result.category_scores["security"].answered, 2);
    }
}

// ============================================================================
// Output Tests
// ============================================================================

mod output {
    use super::*;

    #[test]
    fn auto_format_follows_file_extension() {
        let json = OutputTarget::File(PathBuf::from("report.json"));
        let md = OutputTarget::File(PathBuf::from("report.MD"));
        let txt = OutputTarget::File(PathBuf::from("report.txt"));

        assert_eq!(auto_detect_format(ReportFormat::Auto, &json), ReportFormat::Json);
        assert_eq!(auto_detect_format(ReportFormat::Auto, &md), ReportFormat::Markdown);
        assert_eq!(auto_detect_format(ReportFormat::Auto, &txt), ReportFormat::Summary);
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &OutputTarget::Stdout),
            ReportFormat::Summary
        );
        assert_eq!(
            auto_detect_format(ReportFormat::Markdown, &json),
            ReportFormat::Markdown
        );
    }
}

// ============================================================================
// Assess Command Tests
// ============================================================================

mod assess_command {
    use super::*;

    #[test]
    fn writes_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let app = json_report_app(&out).default_stage(Stage::Seed).build();

        let code = run_assess(assess_config("responses/seed_team.json", app)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let report = read_json(&out);
        assert_eq!(report["metadata"]["tool"]["name"], "octoflow");
        assert_eq!(report["stage"], "seed");
        assert!(!report["recommendations"].as_array().unwrap().is_empty());
        let score = report["overall_score"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn stage_flag_overrides_default_stage() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let mut config = assess_config("responses/seed_team.json", json_report_app(&out).build());
        config.stage = Some(Stage::SeriesB);

        run_assess(config).unwrap();
        assert_eq!(read_json(&out)["stage"], "series-b");
    }

    #[test]
    fn below_threshold_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let app = json_report_app(&out).min_score(Some(99.0)).build();

        let code = run_assess(assess_config("responses/seed_team.json", app)).unwrap();
        assert_eq!(code, exit_codes::BELOW_THRESHOLD);
        assert!(out.exists(), "report is written before the threshold check");
    }

    #[test]
    fn zero_threshold_always_passes() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let app = json_report_app(&out).min_score(Some(0.0)).build();

        let code = run_assess(assess_config("responses/mixed_quality.yaml", app)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn custom_catalogs_and_recommendation_limit() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let dir_catalogs = fixture_path("catalogs");
        let app = json_report_app(&out)
            .questions_file(Some(dir_catalogs.join("questions.yaml")))
            .recommendations_file(Some(dir_catalogs.join("recommendations.yaml")))
            .benchmarks_file(Some(dir_catalogs.join("benchmarks.yaml")))
            .default_stage(Stage::Seed)
            .build();

        let responses = dir.path().join("answers.json");
        std::fs::write(&responses, r#"{"sec-scanning": 1, "ops-oncall": 1}"#).unwrap();

        let mut config = assess_config("unused", app);
        config.responses_path = responses;
        config.max_recommendations = Some(1);

        run_assess(config).unwrap();
        let report = read_json(&out);
        let recs = report["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["id"], "enable-scanning");
        assert_eq!(report["category_scores"]["operations"]["normalized"], 25.0);
    }

    #[test]
    fn context_flags_reorder_recommendations() {
        let dir = tempfile::tempdir().unwrap();
        let plain_out = dir.path().join("plain.json");
        let boosted_out = dir.path().join("boosted.json");

        let plain = assess_config(
            "responses/seed_team.json",
            json_report_app(&plain_out).default_stage(Stage::Seed).build(),
        );
        let mut boosted = assess_config(
            "responses/seed_team.json",
            json_report_app(&boosted_out).default_stage(Stage::Seed).build(),
        );
        boosted.context_path = Some(fixture_path("context/public_repo.json"));

        run_assess(plain).unwrap();
        run_assess(boosted).unwrap();

        let plain = read_json(&plain_out);
        let boosted = read_json(&boosted_out);
        assert_eq!(plain["overall_score"], boosted["overall_score"]);
        assert_eq!(
            plain["recommendations"].as_array().unwrap().len(),
            boosted["recommendations"].as_array().unwrap().len()
        );
        assert_eq!(boosted["recommendations"][0]["category"], "security");
    }

    #[test]
    fn missing_responses_file_is_error() {
        let app = AppConfig::builder().quiet(true).build();
        let result = run_assess(assess_config("responses/does_not_exist.json", app));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_config_rejected_before_loading() {
        let app = AppConfig::builder()
            .quiet(true)
            .min_score(Some(150.0))
            .build();
        let err = run_assess(assess_config("responses/seed_team.json", app)).unwrap_err();
        assert!(err.to_string().contains("min_score"), "{err}");
    }
}

// ============================================================================
// Catalog Listing Tests
// ============================================================================

mod listing_commands {
    use super::*;

    #[test]
    fn questions_listing_to_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("questions.json");
        let listing = CatalogListing {
            stage: Some(Stage::PreSeed),
            app: json_report_app(&out).build(),
        };

        assert_eq!(run_questions(listing).unwrap(), exit_codes::SUCCESS);
        let listed = read_json(&out);
        let ids: Vec<&str> = listed
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|q| q["id"].as_str())
            .collect();
        assert!(ids.contains(&"sec-dependency-scanning"));
        assert!(!ids.contains(&"doc-onboarding"));
    }
}

// ============================================================================
// Config file loading
// ============================================================================

mod config_file {
    use super::*;
    use octoflow::config::{ConfigFileError, load_config};

    #[test]
    fn explicit_config_with_unknown_stage_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("octoflow.yaml");
        std::fs::write(&path, "assessment:\n  default_stage: series-z\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse(_)));
        assert!(err.to_string().contains("parse"), "{err}");
    }

    #[test]
    fn explicit_config_that_does_not_exist_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(ref p) if p == &path));
    }

    #[test]
    fn explicit_config_feeds_assessment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("octoflow.yaml");
        std::fs::write(&path, "assessment:\n  default_stage: series-a\n").unwrap();

        let (config, loaded_from) = load_config(Some(&path)).unwrap();
        assert_eq!(config.assessment.default_stage, Stage::SeriesA);
        assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
    }
}
