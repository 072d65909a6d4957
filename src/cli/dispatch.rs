use anyhow::{bail, Context, Result};
use colored::Colorize;
use rn_advisor::analyzer::{self, AnalysisOptions};
use rn_advisor::config::Settings;
use rn_advisor::models::{AnalysisReport, Category, Severity};
use rn_advisor::report::{self, COMPONENT_TITLE, COMPREHENSIVE_TITLE, UPGRADES_TITLE};
use rn_advisor::testgen;
use rn_advisor::tools::ToolRegistry;
use rn_advisor::update_check::{
    self, FileTimestampStore, GitHubReleases, SystemClock, UpdateChecker, UpdateStatus,
};
use rn_advisor::upgrades;
use rn_advisor::utils::plural;
use std::fs;
use std::path::Path;

use super::types::{Cli, Commands, OutputFormat, ToolsCommands};

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = cli.config;
    match cli.command {
        Commands::Analyze {
            path,
            only,
            min_severity,
            format,
        } => analyze(&path, options(only, min_severity), format),
        Commands::Component {
            file,
            only,
            min_severity,
            format,
        } => component(&file, options(only, min_severity), format),
        Commands::Upgrades { path, format } => check_upgrades(&path, format),
        Commands::GenTest {
            file,
            name,
            output,
            force,
        } => gen_test(&file, name.as_deref(), output.as_deref(), force),
        Commands::CheckUpdates { force } => check_updates(&load_settings(config.as_deref())?, force),
        Commands::Tools { command } => {
            let registry = ToolRegistry::new(&load_settings(config.as_deref())?);
            match command {
                ToolsCommands::List => {
                    println!("{}", serde_json::to_string_pretty(registry.list())?);
                    Ok(())
                }
                ToolsCommands::Call { name, args } => {
                    let args: serde_json::Value =
                        serde_json::from_str(&args).context("--args must be a JSON object")?;
                    if !args.is_object() {
                        bail!("--args must be a JSON object");
                    }
                    let result = registry.call(&name, &args);
                    println!("{}", serde_json::to_string_pretty(&result)?);
                    Ok(())
                }
            }
        }
    }
}

fn load_settings(config: Option<&Path>) -> Result<Settings> {
    let settings = match config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Settings::load_from(Some(path))
        }
        None => Settings::load(),
    };
    settings.context("Failed to load settings")
}

fn options(only: Vec<Category>, min_severity: Option<Severity>) -> AnalysisOptions {
    AnalysisOptions {
        categories: (!only.is_empty()).then_some(only),
        min_severity,
    }
}

fn analyze(path: &Path, options: AnalysisOptions, format: OutputFormat) -> Result<()> {
    if !path.is_dir() {
        eprintln!(
            "{} {} is not a directory; the report will be empty",
            "!".yellow().bold(),
            path.display()
        );
    }
    let report = analyzer::analyze_codebase(path, &options);
    emit(&report, COMPREHENSIVE_TITLE, format)?;
    print_summary(&report);
    Ok(())
}

fn component(file: &Path, options: AnalysisOptions, format: OutputFormat) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let name = file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| file.display().to_string());
    let report = analyzer::analyze_source(&name, &content, &options);
    emit(&report, COMPONENT_TITLE, format)?;
    print_summary(&report);
    Ok(())
}

fn check_upgrades(path: &Path, format: OutputFormat) -> Result<()> {
    let report = upgrades::project_report(path);
    emit(&report, UPGRADES_TITLE, format)?;
    print_summary(&report);
    Ok(())
}

fn gen_test(file: &Path, name: Option<&str>, output: Option<&Path>, force: bool) -> Result<()> {
    let code = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let test = testgen::generate_component_test(&code, name);

    match output {
        None => print!("{test}"),
        Some(output) => {
            if output.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    output.display()
                );
            }
            fs::write(output, &test)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            eprintln!("{} Wrote {}", "✓".green().bold(), output.display());
        }
    }
    Ok(())
}

fn check_updates(settings: &Settings, force: bool) -> Result<()> {
    eprintln!("{}", "Checking for updates...".blue());
    let checker = UpdateChecker::new(
        GitHubReleases::new(&settings.update_repo),
        FileTimestampStore::in_state_dir(&settings.state_dir),
        SystemClock,
    )
    .with_interval(settings.check_interval());

    let status = checker.check(force)?;
    let line = update_check::format_status(&status);
    match status {
        UpdateStatus::Available { .. } => println!("{}", line.green().bold()),
        UpdateStatus::UpToDate { .. } => println!("{} {line}", "✓".green().bold()),
        UpdateStatus::Skipped { .. } => println!("{}", line.dimmed()),
    }
    Ok(())
}

fn emit(report: &AnalysisReport, title: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", report::format_report(report, title)),
        OutputFormat::Json => {
            let value = report::to_json(report).context("Failed to serialize report")?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

/// One-line status on stderr after a report.
fn print_summary(report: &AnalysisReport) {
    let files = plural(report.total_files, "file", "files");
    let issues = plural(report.total_findings(), "issue", "issues");
    if report.is_clean() {
        eprintln!("{} {files} analyzed, no issues", "✓".green().bold());
    } else if report.all_findings().any(|f| f.severity() == Severity::Critical) {
        eprintln!("{} {files} analyzed, {issues}", "✗".red().bold());
    } else {
        eprintln!("{} {files} analyzed, {issues}", "!".yellow().bold());
    }
}
