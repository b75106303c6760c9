use std::{collections::BTreeMap, process};

use clap::Parser;
use extinction::{catalog::decoys_for, quiz::ReflectionSampler, CrystalSystem, SpaceGroup};
use serde::Serialize;
use tracing::instrument;

use super::{terminal::Colorize, Context, OutputFormat};

#[derive(Debug, Parser, Default)]
#[command(about = "Check the catalog can produce well-formed problems")]
pub struct Validate {
    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress all output except the exit code
    #[arg(long, short)]
    quiet: bool,
}

/// A catalog entry that cannot produce a good problem.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Issue {
    group: String,
    message: String,
}

impl Issue {
    fn new(group: &SpaceGroup, message: String) -> Self {
        Self {
            group: group.name().to_string(),
            message,
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    counts: BTreeMap<CrystalSystem, usize>,
    total: usize,
    issues: Vec<Issue>,
}

impl Validate {
    #[instrument(level = "debug", skip(context))]
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let report = Self::inspect(context);

        if !self.quiet {
            match self.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Table => Self::output_table(&report),
            }
        }

        if !report.issues.is_empty() {
            process::exit(2);
        }
        Ok(())
    }

    fn inspect(context: &Context) -> Report {
        let sampler = ReflectionSampler::new(&context.config);
        let candidates = sampler.candidates();
        let choice_count = context.config.choice_count();

        let mut counts = BTreeMap::new();
        let mut issues = Vec::new();

        for group in &context.catalog {
            *counts.entry(group.system()).or_insert(0) += 1;

            if !candidates
                .iter()
                .any(|index| index.is_general() && group.permits(*index))
            {
                issues.push(Issue::new(
                    group,
                    "no general reflection is observed".to_string(),
                ));
            }

            let causes = group.causes();
            let decoys = decoys_for(group.system())
                .iter()
                .filter(|decoy| !causes.contains(*decoy))
                .count();
            let available = causes.len() + decoys;
            if available < choice_count {
                issues.push(Issue::new(
                    group,
                    format!("only {available} of {choice_count} choices can be offered"),
                ));
            }
        }

        Report {
            total: counts.values().sum(),
            counts,
            issues,
        }
    }

    fn output_table(report: &Report) {
        println!("Space groups by crystal system");
        println!("{}", "──────────────────────────────".dim());
        for (system, count) in &report.counts {
            println!("{:<13} {count}", system.name());
        }
        println!("{:<13} {}", "Total", report.total);
        println!();

        if report.issues.is_empty() {
            println!("{}", "✅ Every space group yields a valid problem.".success());
            return;
        }

        println!(
            "{}",
            format!("⚠️  {} issues found", report.issues.len()).warning()
        );
        for issue in &report.issues {
            println!("  • {}: {}", issue.group, issue.message);
        }
    }
}
