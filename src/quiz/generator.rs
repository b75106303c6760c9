use rand::{seq::SliceRandom, Rng};
use tracing::{debug, instrument};

use super::{problem::Problem, reflections::ReflectionSampler};
use crate::{
    catalog::{decoys_for, Catalog},
    domain::{Config, CrystalSystem, SpaceGroup},
};

/// Generates quiz problems from a catalog.
///
/// The generator owns its random source, so a seeded generator produces the
/// same sequence of problems every time.
#[derive(Debug)]
pub struct ProblemGenerator<'a, R> {
    catalog: &'a Catalog,
    choice_count: usize,
    sampler: ReflectionSampler,
    rng: R,
}

impl<'a, R: Rng> ProblemGenerator<'a, R> {
    /// Creates a generator drawing from `catalog` with the given settings.
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: &Config, rng: R) -> Self {
        Self {
            catalog,
            choice_count: config.choice_count(),
            sampler: ReflectionSampler::new(config),
            rng,
        }
    }

    /// The catalog problems are drawn from.
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Generates a problem for a space group chosen uniformly at random.
    pub fn generate(&mut self) -> Problem {
        let catalog = self.catalog;
        let group = catalog.choose(&mut self.rng);
        self.generate_for(group)
    }

    /// Generates a problem for the given space group.
    ///
    /// The correct answers are the group's distinct causes. Decoys drawn from
    /// the crystal system's pool fill the choice set up to the configured
    /// size, and the choices are shuffled.
    #[instrument(level = "debug", skip_all, fields(group = group.name()))]
    pub fn generate_for(&mut self, group: &SpaceGroup) -> Problem {
        let correct: Vec<String> = group.causes().into_iter().map(str::to_owned).collect();
        let decoys = self.pick_decoys(group.system(), &correct);

        let mut choices = correct.clone();
        choices.extend(decoys);
        choices.shuffle(&mut self.rng);

        let reflections = self.sampler.sample(group, &mut self.rng);

        debug!(
            correct = correct.len(),
            choices = choices.len(),
            reflections = reflections.len(),
            "generated problem"
        );

        Problem::new(group.clone(), correct, choices, reflections)
    }

    /// Draws up to `choice_count - |correct|` distinct decoys.
    fn pick_decoys(&mut self, system: CrystalSystem, correct: &[String]) -> Vec<String> {
        let needed = self.choice_count.saturating_sub(correct.len());

        let mut pool: Vec<&str> = decoys_for(system)
            .iter()
            .copied()
            .filter(|decoy| !correct.iter().any(|answer| answer == decoy))
            .collect();
        pool.shuffle(&mut self.rng);

        let mut picked: Vec<String> = Vec::with_capacity(needed);
        for decoy in pool {
            if picked.len() == needed {
                break;
            }
            if !picked.iter().any(|p| p == decoy) {
                picked.push(decoy.to_owned());
            }
        }

        if picked.len() < needed {
            debug!(
                %system,
                needed,
                available = picked.len(),
                "decoy pool too small to fill the choice set"
            );
        }
        picked
    }
}
