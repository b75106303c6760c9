use std::fmt;

use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect, Select};
use extinction::{quiz::check, Problem, ReflectionFilter};
use tracing::{debug, instrument};

use super::{render, terminal::Colorize, Context};

#[derive(Debug, Parser, Default)]
#[command(about = "Play the quiz interactively")]
pub struct Play {
    /// Reveal the space group once a problem is solved
    #[arg(long)]
    reveal: bool,

    /// Stop after this many problems
    #[arg(long, value_name = "N")]
    rounds: Option<usize>,
}

/// What the learner wants to do next with the problem on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Show(ReflectionFilter),
    Answer,
    Skip,
    Quit,
}

impl Action {
    fn menu() -> Vec<Self> {
        ReflectionFilter::ALL
            .into_iter()
            .map(Self::Show)
            .chain([Self::Answer, Self::Skip, Self::Quit])
            .collect()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Show(ReflectionFilter::All) => f.write_str("Show all reflections"),
            Self::Show(filter) => write!(f, "Show {} reflections", filter.notation()),
            Self::Answer => f.write_str("Answer"),
            Self::Skip => f.write_str("Give up and show the answer"),
            Self::Quit => f.write_str("Quit"),
        }
    }
}

/// Counts for the current session. Nothing is persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    problems: usize,
    solved: usize,
    attempts: usize,
}

impl Tally {
    fn record_attempt(&mut self, correct: bool) {
        self.attempts += 1;
        if correct {
            self.solved += 1;
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Solved {} of {} problems in {} attempts",
            self.solved, self.problems, self.attempts
        )
    }
}

/// How a single problem ended.
enum Outcome {
    Next,
    Quit,
}

impl Play {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let theme = ColorfulTheme::default();
        let mut generator = context.generator();
        let mut tally = Tally::default();

        while self.rounds.is_none_or(|rounds| tally.problems < rounds) {
            let problem = generator.generate();
            tally.problems += 1;
            debug!(group = problem.space_group().name(), "new problem");

            render::problem_header(&problem, tally.problems);
            render::reflection_table(problem.reflections(), ReflectionFilter::All);

            match self.solve(&theme, &problem, &mut tally)? {
                Outcome::Next => {}
                Outcome::Quit => break,
            }
        }

        println!();
        println!("{}", tally.to_string().info());
        Ok(())
    }

    fn solve(
        &self,
        theme: &ColorfulTheme,
        problem: &Problem,
        tally: &mut Tally,
    ) -> anyhow::Result<Outcome> {
        let menu = Action::menu();
        let labels: Vec<String> = menu.iter().map(ToString::to_string).collect();
        let answer_index = menu
            .iter()
            .position(|action| *action == Action::Answer)
            .unwrap_or_default();

        loop {
            let selected = Select::with_theme(theme)
                .with_prompt("What next?")
                .items(&labels)
                .default(answer_index)
                .interact()?;

            match menu.get(selected).copied().unwrap_or(Action::Quit) {
                Action::Show(filter) => {
                    render::reflection_table(&filter.apply(problem.reflections()), filter);
                }
                Action::Answer => {
                    let picked = MultiSelect::with_theme(theme)
                        .with_prompt("Which symmetry elements cause the absences? (space to toggle)")
                        .items(problem.choices())
                        .interact()?;
                    let submitted: Vec<&str> = picked
                        .into_iter()
                        .filter_map(|i| problem.choices().get(i).map(String::as_str))
                        .collect();

                    let correct = check(Some(problem), &submitted);
                    tally.record_attempt(correct);

                    if !correct {
                        println!(
                            "{}",
                            "❌ Incorrect. Take another look at the reflections.".failure()
                        );
                        continue;
                    }

                    println!("{}", "✅ Correct!".success());
                    if self.reveal {
                        println!(
                            "{}",
                            render::group_title(problem.space_group()).dim()
                        );
                    }
                    return Self::confirm_next(theme);
                }
                Action::Skip => {
                    render::answers(problem);
                    return Self::confirm_next(theme);
                }
                Action::Quit => return Ok(Outcome::Quit),
            }
        }
    }

    fn confirm_next(theme: &ColorfulTheme) -> anyhow::Result<Outcome> {
        let next = Confirm::with_theme(theme)
            .with_prompt("Next problem?")
            .default(true)
            .interact()?;
        Ok(if next { Outcome::Next } else { Outcome::Quit })
    }
}
