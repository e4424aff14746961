//! octoflow: engineering-practice maturity assessment
//!
//! Scores questionnaire responses against stage benchmarks and recommends
//! improvements.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use octoflow::{
    cli::{self, AssessConfig, CatalogListing, ContextOverrides},
    config::{self, AppConfig, ConfigPreset},
    model::Stage,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with catalog info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nStages:",
        "\n  pre-seed, seed, series-a, series-b",
        "\n\nCategories:",
        "\n  security, reliability, maintainability, collaboration, velocity, documentation",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown"
    )
}

#[derive(Parser)]
#[command(name = "octoflow")]
#[command(version, long_version = build_long_version())]
#[command(about = "Engineering-practice maturity assessment", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Overall score below --min-score
    3  Error occurred

EXAMPLES:
    # Assess a seed-stage team
    octoflow assess responses.json --stage seed

    # CI gate with JSON output
    octoflow assess responses.json --stage series-a -o json --min-score 60

    # Boost priorities using repository context
    octoflow assess responses.json --public --has-ci --recent-prs 25

    # List the questions asked at pre-seed
    octoflow questions --stage pre-seed")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Custom catalog sources, shared by every command that builds an engine
#[derive(clap::Args)]
struct CatalogArgs {
    /// Question catalog (YAML or JSON)
    #[arg(long, value_name = "FILE")]
    questions: Option<PathBuf>,

    /// Recommendation catalog (YAML or JSON)
    #[arg(long, value_name = "FILE")]
    recommendations: Option<PathBuf>,

    /// Stage benchmark table (YAML or JSON)
    #[arg(long, value_name = "FILE")]
    benchmarks: Option<PathBuf>,
}

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    /// Response file: a JSON or YAML map of question id to answer (1-4)
    responses: PathBuf,

    /// Stage to assess against (default from config, else seed)
    #[arg(short, long)]
    stage: Option<Stage>,

    /// Repository context file (JSON or YAML)
    #[arg(long, value_name = "FILE")]
    context: Option<PathBuf>,

    /// Repository is public
    #[arg(long)]
    public: bool,

    /// Repository already runs CI
    #[arg(long)]
    has_ci: bool,

    /// Repository size in kilobytes
    #[arg(long, value_name = "KB")]
    repo_size_kb: Option<u64>,

    /// Pull requests opened recently
    #[arg(long, value_name = "N")]
    recent_prs: Option<u32>,

    /// Output format (auto picks from the output file extension, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file (stdout if not set)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when the overall score is below this (0-100)
    #[arg(long)]
    min_score: Option<f64>,

    /// List at most this many recommendations
    #[arg(long, value_name = "N")]
    max_recommendations: Option<usize>,

    /// Omit action items from the report
    #[arg(long)]
    no_actions: bool,

    /// Configuration preset: default, ci, security-first
    #[arg(long)]
    preset: Option<String>,

    #[command(flatten)]
    catalogs: CatalogArgs,
}

/// Arguments for the `questions` and `benchmarks` subcommands
#[derive(Parser)]
struct ListArgs {
    /// Only list entries for this stage
    #[arg(short, long)]
    stage: Option<Stage>,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file (stdout if not set)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    #[command(flatten)]
    catalogs: CatalogArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Score responses and recommend improvements
    Assess(AssessArgs),

    /// List the question catalog
    Questions(ListArgs),

    /// List stage benchmarks
    Benchmarks(ListArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .octoflow.yaml in the current directory
    Init,
}

/// Layer preset, config file and CLI overrides, in increasing precedence.
fn effective_config(
    config_path: Option<&Path>,
    preset: Option<&str>,
    overrides: &AppConfig,
) -> Result<AppConfig> {
    let mut config = match preset {
        Some(name) => {
            let preset = ConfigPreset::from_name(name).with_context(|| {
                let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
                format!("Unknown preset '{name}'. Valid options: {}", valid.join(", "))
            })?;
            AppConfig::from_preset(preset)
        }
        None => AppConfig::default(),
    };

    let (file_config, loaded_from) =
        config::load_config(config_path).context("failed to load config file")?;
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    config.merge(&file_config);
    config.merge(overrides);
    Ok(config)
}

fn exit_with(code: i32) -> Result<()> {
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_codes::ERROR);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Assess(args) => {
            let overrides = AppConfig::builder()
                .questions_file(args.catalogs.questions)
                .recommendations_file(args.catalogs.recommendations)
                .benchmarks_file(args.catalogs.benchmarks)
                .output_format(args.output)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .min_score(args.min_score)
                .quiet(cli.quiet)
                .build();
            let app = effective_config(cli.config.as_deref(), args.preset.as_deref(), &overrides)?;

            let config = AssessConfig {
                responses_path: args.responses,
                stage: args.stage,
                context_path: args.context,
                context_overrides: ContextOverrides {
                    is_public: args.public,
                    has_ci: args.has_ci,
                    repository_size_kb: args.repo_size_kb,
                    recent_pr_count: args.recent_prs,
                },
                max_recommendations: args.max_recommendations,
                hide_actions: args.no_actions,
                app,
            };
            exit_with(cli::run_assess(config)?)
        }

        Commands::Questions(args) => {
            let listing = listing_from(cli.config.as_deref(), cli.no_color, cli.quiet, args)?;
            exit_with(cli::run_questions(listing)?)
        }

        Commands::Benchmarks(args) => {
            let listing = listing_from(cli.config.as_deref(), cli.no_color, cli.quiet, args)?;
            exit_with(cli::run_benchmarks(listing)?)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "octoflow", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_config(cli.config.as_deref())
                    .context("failed to load config file")?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    config::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in [".octoflow.yaml", ".octoflow.yml", "octoflow.yaml", "octoflow.yml"] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".octoflow.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_full_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}

fn listing_from(
    config_path: Option<&Path>,
    no_color: bool,
    quiet: bool,
    args: ListArgs,
) -> Result<CatalogListing> {
    let overrides = AppConfig::builder()
        .questions_file(args.catalogs.questions)
        .recommendations_file(args.catalogs.recommendations)
        .benchmarks_file(args.catalogs.benchmarks)
        .output_format(args.output)
        .output_file(args.output_file)
        .no_color(no_color)
        .quiet(quiet)
        .build();
    Ok(CatalogListing {
        stage: args.stage,
        app: effective_config(config_path, None, &overrides)?,
    })
}
