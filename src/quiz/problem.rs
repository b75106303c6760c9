use serde::{Serialize, Serializer};

use crate::domain::{CrystalSystem, Reflection, SpaceGroup};

/// A single quiz problem.
///
/// A problem is created by the [`ProblemGenerator`](super::ProblemGenerator)
/// and held by the caller for as long as it is on screen. It is never
/// modified; asking for a new problem replaces it wholesale.
///
/// The serialized form is what a learner may see: the crystal system, the
/// choices and the reflections. The space group and the correct answers are
/// left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    #[serde(rename = "system", serialize_with = "serialize_system")]
    space_group: SpaceGroup,
    #[serde(skip)]
    correct_answers: Vec<String>,
    choices: Vec<String>,
    reflections: Vec<Reflection>,
}

impl Problem {
    pub(super) const fn new(
        space_group: SpaceGroup,
        correct_answers: Vec<String>,
        choices: Vec<String>,
        reflections: Vec<Reflection>,
    ) -> Self {
        Self {
            space_group,
            correct_answers,
            choices,
            reflections,
        }
    }

    /// The space group the problem was drawn from.
    #[must_use]
    pub const fn space_group(&self) -> &SpaceGroup {
        &self.space_group
    }

    /// The crystal system, which is revealed to the learner up front.
    #[must_use]
    pub const fn system(&self) -> CrystalSystem {
        self.space_group.system()
    }

    /// The distinct symmetry elements that explain the absences.
    ///
    /// Empty for groups without reflection conditions.
    #[must_use]
    pub fn correct_answers(&self) -> &[String] {
        &self.correct_answers
    }

    /// The answer choices, in presentation order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The observed reflections.
    #[must_use]
    pub fn reflections(&self) -> &[Reflection] {
        &self.reflections
    }
}

fn serialize_system<S: Serializer>(group: &SpaceGroup, serializer: S) -> Result<S::Ok, S::Error> {
    group.system().serialize(serializer)
}
