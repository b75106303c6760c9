use clap::Parser;
use extinction::{CrystalSystem, SpaceGroup};
use tracing::instrument;

use super::{parse_system, terminal::{is_narrow, Colorize}, Context, OutputFormat};

#[derive(Debug, Parser)]
#[command(about = "List the space groups in the catalog")]
pub struct List {
    /// Only list groups of this crystal system
    #[arg(long, value_parser = parse_system)]
    system: Option<CrystalSystem>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Print only the symbols, one per line
    #[arg(long, short)]
    quiet: bool,
}

impl List {
    #[instrument(level = "debug", skip(context))]
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let groups: Vec<&SpaceGroup> = match self.system {
            Some(system) => context.catalog.in_system(system).collect(),
            None => context.catalog.iter().collect(),
        };

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            }
            OutputFormat::Table if self.quiet => {
                for group in &groups {
                    println!("{}", group.name());
                }
            }
            OutputFormat::Table => Self::output_table(&groups),
        }
        Ok(())
    }

    fn output_table(groups: &[&SpaceGroup]) {
        if is_narrow() {
            for group in groups {
                println!("{:>3} {}", group.number(), group.name());
            }
            return;
        }

        println!(
            "{}",
            format!("{:>3}  {:<12} {:<13} {}", "No.", "Symbol", "System", "Conditions").dim()
        );
        for group in groups {
            println!(
                "{:>3}  {:<12} {:<13} {}",
                group.number(),
                group.name(),
                group.system().name(),
                group.conditions().len()
            );
        }
        println!("{}", format!("{} space groups", groups.len()).dim());
    }
}
