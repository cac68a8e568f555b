//! Apply command - Replay scenario files against the directive

use clap::Args;
use modiste::atelier::ModifierDirective;
use modiste::{load_config, CliError, Scenario, ScenarioReport};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct ApplyArgs {
    /// Scenario files (.toml or .json)
    #[arg(required = true)]
    pub scenarios: Vec<PathBuf>,

    /// Config file path (default: ./modiste.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    #[serde(flatten)]
    report: &'a ScenarioReport,
}

pub fn run(args: ApplyArgs) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref());
    let directive = ModifierDirective::new(config.directive);

    let mut reports = Vec::with_capacity(args.scenarios.len());
    for path in &args.scenarios {
        let scenario = Scenario::load(path)?;
        tracing::info!(
            "replaying {} ({} steps)",
            path.display(),
            scenario.steps.len()
        );
        reports.push((path.display().to_string(), scenario.run(&directive)));
    }

    match args.format.as_str() {
        "json" => {
            let output: Vec<_> = reports
                .iter()
                .map(|(file, report)| FileReport {
                    file: file.clone(),
                    report,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => print_text(&reports),
    }

    let failed = reports.iter().filter(|(_, report)| !report.passed()).count();
    if failed > 0 {
        return Err(CliError::Mismatch(failed));
    }
    Ok(())
}

fn print_text(reports: &[(String, ScenarioReport)]) {
    for (file, report) in reports {
        match &report.name {
            Some(name) => println!("{} ({})", file, name),
            None => println!("{}", file),
        }

        for step in &report.steps {
            let status = if step.status == 0 { "ok" } else { "failed" };
            println!("  step {:<3} {:<7} \"{}\"", step.step, status, step.classes);
            for mismatch in &step.mismatches {
                println!("    \x1b[31m✗\x1b[0m {}", mismatch);
            }
        }
    }
}
