//! Maturity: IT maturity assessment CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use maturity::answers::{answer_template, load_answers};
use maturity::catalog::load_catalog;
use maturity::config::{load_config, Config, CONFIG_FILENAME};
use maturity::reporter::{ConsoleReporter, JsonReporter};
use maturity::{AnswerSet, Scorer};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Maturity: score a yes/no IT maturity questionnaire by category
#[derive(Parser, Debug)]
#[command(name = "maturity")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answers document (JSON). Omit to score with no answers recorded
    answers: Option<PathBuf>,

    /// Catalog document (JSON: category -> list of questions)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum category score (exit 1 if any category is below)
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Quiet mode (one line per category)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .maturityrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write an answers document with every question answered "No"
    Template {
        /// Catalog document (default: from .maturityrc.json)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Path to config file (default: search .maturityrc.json in current dir and parents)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create .maturityrc.json
    Init {
        /// Catalog document to record in the config
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Minimum category score (e.g. 50)
        #[arg(long)]
        threshold: Option<f64>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

/// Log to stderr; RUST_LOG overrides the default level
fn init_tracing(verbose: bool) {
    let default = if verbose { "maturity=debug" } else { "maturity=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Template {
                catalog,
                output,
                config,
            } => run_template(catalog.as_deref(), output.as_deref(), config.as_deref()),
            Commands::Init {
                catalog,
                threshold,
                dir,
            } => run_init(catalog.as_deref(), threshold, dir.as_deref()),
        };
    }

    if let Some(threshold) = args.threshold {
        check_threshold(threshold)?;
    }

    // Config is searched from the answers file's directory, else the current one;
    // an explicit --config path is relative to the current directory
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = args.config.as_deref().map(|p| cwd.join(p));
    let work_dir = args
        .answers
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(cwd.as_path());

    // Load config (CLI flags override config file)
    let config = load_config(work_dir, config_path.as_deref())?
        .merge_with_cli(args.catalog.as_deref(), args.threshold);

    let catalog_path = resolve_catalog(&config)?;
    let catalog = load_catalog(&catalog_path)?;
    let answers = match args.answers.as_deref() {
        Some(path) => load_answers(path)?,
        None => AnswerSet::new(),
    };

    let assessment = Scorer::assess(&catalog, &answers);

    if args.json {
        println!("{}", JsonReporter::new().pretty().report(&assessment));
    } else if args.quiet {
        ConsoleReporter::new().report_quiet(&assessment);
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        reporter.report(&assessment);
    }

    if let Some(threshold) = config.threshold {
        let below = assessment.below_threshold(threshold);
        if !below.is_empty() {
            if !args.quiet {
                let names: Vec<String> = below
                    .iter()
                    .map(|s| format!("{} ({:.1})", s.category, s.score))
                    .collect();
                eprintln!(
                    "{}: {} below threshold {:.1}: {}",
                    "Warning".yellow(),
                    if below.len() == 1 { "category" } else { "categories" },
                    threshold,
                    names.join(", ")
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn check_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&threshold) {
        anyhow::bail!("Threshold must be between 0 and 100, got {}", threshold);
    }
    Ok(())
}

fn resolve_catalog(config: &Config) -> Result<PathBuf> {
    config.catalog.clone().with_context(|| {
        format!(
            "No catalog given: pass --catalog or set \"catalog\" in {}",
            CONFIG_FILENAME
        )
    })
}

fn run_template(
    catalog: Option<&Path>,
    output: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = config_path.map(|p| cwd.join(p));
    let config = load_config(&cwd, config_path.as_deref())?.merge_with_cli(catalog, None);
    let catalog = load_catalog(&resolve_catalog(&config)?)?;

    let template = answer_template(&catalog);
    let json = serde_json::to_string_pretty(&template).context("Failed to serialize template")?;

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{}: Wrote {} questions to {}",
                "Info".blue(),
                catalog.question_count(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(ExitCode::SUCCESS)
}

fn run_init(catalog: Option<&Path>, threshold: Option<f64>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        anyhow::bail!(
            "{} already exists; use --dir to write elsewhere or remove it first",
            config_path.display()
        );
    }

    let threshold_value = threshold.unwrap_or(50.0);
    check_threshold(threshold_value)?;
    let catalog_value = catalog
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "grouped_questions.json".to_string());

    let json = serde_json::json!({
        "catalog": catalog_value,
        "threshold": threshold_value,
    });
    let content = serde_json::to_string_pretty(&json).context("Failed to serialize config")?;

    fs::write(&config_path, format!("{}\n", content))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    eprintln!("{}: Created {}", "Info".blue(), config_path.display());
    Ok(ExitCode::SUCCESS)
}
