use clap::Parser;
use extinction::{Problem, ReflectionFilter};
use serde_json::json;
use tracing::instrument;

use super::{render, Context, OutputFormat};

#[derive(Debug, Parser)]
#[command(about = "Generate a single problem and print it")]
pub struct Generate {
    /// Space group to build the problem from (number or symbol); random if
    /// omitted
    #[arg(long, value_name = "GROUP")]
    group: Option<String>,

    /// Reflection filter to apply (all, only-h-nonzero, only-k-nonzero,
    /// only-l-nonzero, k-zero-plane, h-zero-plane, l-zero-plane)
    #[arg(long, default_value = "all")]
    filter: String,

    /// Include the space group and the correct answers
    #[arg(long)]
    reveal: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Generate {
    #[instrument(level = "debug", skip(context))]
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let mut generator = context.generator();
        let problem = match &self.group {
            Some(key) => generator.generate_for(context.find_group(key)?),
            None => generator.generate(),
        };
        let filter = ReflectionFilter::from_tag(&self.filter);

        match self.output {
            OutputFormat::Json => self.output_json(&problem, filter)?,
            OutputFormat::Table => self.output_table(&problem, filter),
        }
        Ok(())
    }

    fn output_json(&self, problem: &Problem, filter: ReflectionFilter) -> anyhow::Result<()> {
        let mut output = serde_json::to_value(problem)?;
        output["filter"] = json!(filter.tag());
        output["reflections"] = json!(filter.apply(problem.reflections()));

        if self.reveal {
            let group = problem.space_group();
            output["space_group"] = json!({
                "number": group.number(),
                "name": group.name(),
            });
            output["correct_answers"] = json!(problem.correct_answers());
        }

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_table(&self, problem: &Problem, filter: ReflectionFilter) {
        render::problem_header(problem, 1);
        render::reflection_table(&filter.apply(problem.reflections()), filter);
        render::choices(problem.choices());

        if self.reveal {
            println!();
            render::answers(problem);
        }
    }
}
