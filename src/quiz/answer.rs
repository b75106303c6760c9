//! Answer checking.
//!
//! A submission is correct when, as a set, it equals the problem's correct
//! answers. Repeated entries in the submission count once.

use std::collections::BTreeSet;

use super::problem::Problem;

impl Problem {
    /// Whether the submitted choices are exactly the correct answers.
    ///
    /// Order does not matter and duplicate submissions are ignored.
    #[must_use]
    pub fn check<S: AsRef<str>>(&self, submitted: &[S]) -> bool {
        let submitted: BTreeSet<&str> = submitted.iter().map(AsRef::as_ref).collect();
        submitted.len() == self.correct_answers().len()
            && self
                .correct_answers()
                .iter()
                .all(|answer| submitted.contains(answer.as_str()))
    }
}

/// Checks a submission against the active problem, if any.
///
/// Returns `false` when no problem is active.
#[must_use]
pub fn check<S: AsRef<str>>(problem: Option<&Problem>, submitted: &[S]) -> bool {
    problem.is_some_and(|problem| problem.check(submitted))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use super::*;
    use crate::{domain::Config, Catalog, ProblemGenerator};

    fn problem_for(key: &str) -> Problem {
        let catalog = Catalog::builtin();
        let mut generator =
            ProblemGenerator::new(&catalog, &Config::default(), StdRng::seed_from_u64(0));
        generator.generate_for(catalog.find(key).unwrap())
    }

    #[test]
    fn no_active_problem_is_never_correct() {
        assert!(!check::<&str>(None, &[]));
        assert!(!check(None, &["b-axis 2₁ screw axis"]));
    }

    #[test]
    fn empty_answer_set_accepts_only_empty_submission() {
        let problem = problem_for("P1");

        assert!(check::<&str>(Some(&problem), &[]));
        assert!(!check(Some(&problem), &["anything"]));
    }

    #[test]
    fn p21_accepts_exactly_the_screw_axis() {
        let problem = problem_for("P2₁");

        assert!(problem.check(&["b-axis 2₁ screw axis"]));
        assert!(!problem.check(&["b-axis 2₁ screw axis", "decoy"]));
        assert!(!problem.check::<&str>(&[]));
        assert!(!problem.check(&["a-axis 2₁ screw axis"]));
    }

    #[test]
    fn repeated_submissions_count_once() {
        let problem = problem_for("P2₁");

        assert!(problem.check(&["b-axis 2₁ screw axis", "b-axis 2₁ screw axis"]));
    }

    #[test]
    fn duplicates_cannot_mask_a_missing_answer() {
        // P2₁/c has two causes; a repeated correct answer must not stand in
        // for the other.
        let problem = problem_for("P2₁/c");
        let first = problem.correct_answers()[0].clone();

        assert_eq!(problem.correct_answers().len(), 2);
        assert!(!problem.check(&[first.clone(), first]));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let problem = problem_for("P2₁");
        assert!(!problem.check(&["B-axis 2₁ screw axis"]));
    }

    #[test]
    fn correct_answers_round_trip_in_any_order() {
        let catalog = Catalog::builtin();
        let mut generator =
            ProblemGenerator::new(&catalog, &Config::default(), StdRng::seed_from_u64(21));
        let mut rng = StdRng::seed_from_u64(22);

        for _ in 0..200 {
            let problem = generator.generate();
            let mut submission = problem.correct_answers().to_vec();
            assert!(check(Some(&problem), &submission));

            submission.shuffle(&mut rng);
            assert!(check(Some(&problem), &submission));
            submission.reverse();
            assert!(check(Some(&problem), &submission));
        }
    }
}
