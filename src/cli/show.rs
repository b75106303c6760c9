use clap::Parser;
use tracing::instrument;

use super::{render, Context, OutputFormat};

#[derive(Debug, Parser)]
#[command(about = "Show the reflection conditions of a space group")]
pub struct Show {
    /// The space group, by number or Hermann–Mauguin symbol
    group: String,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Show {
    #[instrument(level = "debug", skip(context))]
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let group = context.find_group(&self.group)?;

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(group)?),
            OutputFormat::Table => render::conditions(group),
        }
        Ok(())
    }
}
