//! Plain-text rendering of problems, reflections and space groups.

use extinction::{Problem, Reflection, ReflectionFilter, SpaceGroup};

use super::terminal::{bar, is_narrow, Colorize};

/// Width of the intensity bar for the strongest reflection.
const BAR_WIDTH: usize = 24;

pub fn problem_header(problem: &Problem, number: usize) {
    println!();
    println!(
        "{}",
        format!(
            "Problem {number}: identify the symmetry elements (crystal system: {})",
            problem.system()
        )
        .heading()
    );
    println!(
        "{}",
        "Select every screw axis, glide plane or centring that explains the absences.".dim()
    );
}

pub fn reflection_table(reflections: &[Reflection], filter: ReflectionFilter) {
    println!();
    let title = match filter {
        ReflectionFilter::All => format!("All observed reflections ({})", reflections.len()),
        filter => format!(
            "Observed {} reflections ({})",
            filter.notation(),
            reflections.len()
        ),
    };
    println!("{}", title.info());

    if reflections.is_empty() {
        println!("{}", "  No reflections of this class are observed.".dim());
        return;
    }

    if is_narrow() {
        for reflection in reflections {
            println!("  {}: {:.1}", reflection.index, reflection.intensity);
        }
        return;
    }

    let strongest = reflections
        .iter()
        .map(|r| r.intensity)
        .fold(0.0_f64, f64::max);

    println!("{}", format!("  {:>3} {:>3} {:>3} {:>8}", "h", "k", "l", "I").dim());
    for reflection in reflections {
        let index = reflection.index;
        println!(
            "  {:>3} {:>3} {:>3} {:>8.1}  {}",
            index.h,
            index.k,
            index.l,
            reflection.intensity,
            bar(reflection.intensity, strongest, BAR_WIDTH).dim()
        );
    }
}

pub fn choices(choices: &[String]) {
    println!();
    println!("{}", "Choices".info());
    for (i, choice) in choices.iter().enumerate() {
        println!("  {}. {choice}", i + 1);
    }
}

pub fn answers(problem: &Problem) {
    if problem.correct_answers().is_empty() {
        println!(
            "{}",
            "No symmetry element causes systematic absences here.".info()
        );
    } else {
        println!("{}", "The absences are explained by:".info());
        for answer in problem.correct_answers() {
            println!("  • {answer}");
        }
    }
    println!(
        "{}",
        format!("Space group: {}", group_title(problem.space_group())).dim()
    );
}

pub fn group_title(group: &SpaceGroup) -> String {
    format!("{} (No. {}, {})", group.name(), group.number(), group.system())
}

pub fn conditions(group: &SpaceGroup) {
    println!("{}", group_title(group).heading());

    if group.conditions().is_empty() {
        println!(
            "{}",
            "  No reflection conditions: every reflection is observed.".dim()
        );
        return;
    }

    if is_narrow() {
        for condition in group.conditions() {
            println!("  {}: {}", condition.class(), condition.rule());
            println!("    {}", condition.cause().dim());
        }
        return;
    }

    println!(
        "{}",
        format!("  {:<6} {:<24} {}", "Class", "Condition", "Cause").dim()
    );
    for condition in group.conditions() {
        println!(
            "  {:<6} {:<24} {}",
            condition.class().notation(),
            condition.rule().to_string(),
            condition.cause()
        );
    }
}
