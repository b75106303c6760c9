use std::{collections::BTreeSet, ops::RangeInclusive};

use rand::Rng;
use tracing::trace;

use crate::domain::{Config, Miller, Reflection, SpaceGroup};

/// Produces the reflection list shown to the learner.
///
/// Candidates cover the three reciprocal axes, the three principal zones,
/// the two diagonal zones and a block of general positions. A candidate is
/// kept only if the space group permits it, so every absence in the list is
/// explained by one of the group's reflection conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionSampler {
    max_axial_index: i32,
    max_zone_index: i32,
    intensity: RangeInclusive<f64>,
}

impl ReflectionSampler {
    /// Creates a sampler from the configured index limits and intensity
    /// range.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            max_axial_index: config.max_axial_index(),
            max_zone_index: config.max_zone_index(),
            intensity: config.intensity_range(),
        }
    }

    /// The candidate reflections, sorted and free of duplicates.
    #[must_use]
    pub fn candidates(&self) -> Vec<Miller> {
        let axial = 1..=self.max_axial_index;
        let zone = 1..=self.max_zone_index;
        let mut candidates = BTreeSet::new();

        for n in axial {
            candidates.insert(Miller::new(n, 0, 0));
            candidates.insert(Miller::new(0, n, 0));
            candidates.insert(Miller::new(0, 0, n));
        }

        for a in zone.clone() {
            for b in zone.clone() {
                candidates.insert(Miller::new(0, a, b));
                candidates.insert(Miller::new(a, 0, b));
                candidates.insert(Miller::new(a, b, 0));
                candidates.insert(Miller::new(a, a, b));
                candidates.insert(Miller::new(a, -a, b));
                for c in zone.clone() {
                    candidates.insert(Miller::new(a, b, c));
                }
            }
        }

        candidates.into_iter().collect()
    }

    /// Samples the observed reflections of a space group.
    ///
    /// Systematically absent candidates are dropped; every remaining
    /// reflection gets a synthetic intensity drawn uniformly from the
    /// configured range, rounded to one decimal place.
    pub fn sample<R: Rng + ?Sized>(&self, group: &SpaceGroup, rng: &mut R) -> Vec<Reflection> {
        let reflections: Vec<Reflection> = self
            .candidates()
            .into_iter()
            .filter(|index| group.permits(*index))
            .map(|index| Reflection {
                index,
                intensity: self.intensity(rng),
            })
            .collect();

        trace!(
            group = group.name(),
            observed = reflections.len(),
            "sampled reflections"
        );
        reflections
    }

    fn intensity<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let value = rng.gen_range(self.intensity.clone());
        (value * 10.0).round() / 10.0
    }
}

impl Default for ReflectionSampler {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        domain::{ReflectionClass, SpaceGroup},
        Catalog,
    };

    fn group(catalog: &Catalog, key: &str) -> SpaceGroup {
        catalog.find(key).unwrap().clone()
    }

    #[test]
    fn candidates_cover_every_reflection_class() {
        let candidates = ReflectionSampler::default().candidates();
        for class in ReflectionClass::ALL {
            assert!(
                candidates.iter().any(|index| class.contains(*index)),
                "no candidate in class {class}"
            );
        }
        assert!(candidates.iter().any(|index| index.is_general()));
        assert!(!candidates.contains(&Miller::new(0, 0, 0)));
    }

    #[test]
    fn primitive_group_without_conditions_keeps_every_candidate() {
        let catalog = Catalog::builtin();
        let sampler = ReflectionSampler::default();
        let mut rng = StdRng::seed_from_u64(1);

        let reflections = sampler.sample(&group(&catalog, "P1"), &mut rng);
        assert_eq!(reflections.len(), sampler.candidates().len());
    }

    #[test]
    fn screw_axis_removes_odd_axial_reflections() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(2);

        let reflections = ReflectionSampler::default().sample(&group(&catalog, "P2₁"), &mut rng);

        let axial: Vec<i32> = reflections
            .iter()
            .filter(|r| ReflectionClass::AxisK.contains(r.index))
            .map(|r| r.index.k)
            .collect();
        assert_eq!(axial, vec![2, 4, 6, 8]);
        // General reflections with odd k survive.
        assert!(reflections.iter().any(|r| r.index == Miller::new(1, 1, 1)));
    }

    #[test]
    fn body_centring_removes_odd_index_sums() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(3);

        let reflections = ReflectionSampler::default().sample(&group(&catalog, "229"), &mut rng);

        assert!(!reflections.is_empty());
        for reflection in &reflections {
            let Miller { h, k, l } = reflection.index;
            assert_eq!((h + k + l).rem_euclid(2), 0, "{} should be absent", reflection.index);
        }
    }

    #[test]
    fn every_builtin_group_keeps_a_general_reflection() {
        let catalog = Catalog::builtin();
        let sampler = ReflectionSampler::default();
        let mut rng = StdRng::seed_from_u64(4);

        for group in &catalog {
            let reflections = sampler.sample(group, &mut rng);
            assert!(
                reflections.iter().any(|r| r.index.is_general()),
                "{} has no general reflection",
                group.name()
            );
            for reflection in &reflections {
                assert!(group.permits(reflection.index));
            }
        }
    }

    #[test]
    fn intensities_fall_in_configured_range() {
        let mut config = Config::default();
        config.set_intensity_range(50.0, 60.0).unwrap();
        let sampler = ReflectionSampler::new(&config);
        let mut rng = StdRng::seed_from_u64(5);

        let catalog = Catalog::builtin();
        for reflection in sampler.sample(&group(&catalog, "P1"), &mut rng) {
            assert!((50.0..=60.0).contains(&reflection.intensity));
        }
    }

    #[test]
    fn largest_index_limits_stay_bounded() {
        let mut config = Config::default();
        config.set_index_limits(i32::MAX, i32::MAX);
        let candidates = ReflectionSampler::new(&config).candidates();

        let axial = usize::try_from(crate::domain::MAX_AXIAL_INDEX).unwrap();
        let zone = usize::try_from(crate::domain::MAX_ZONE_INDEX).unwrap();
        assert!(candidates.len() <= 3 * axial + 5 * zone * zone + zone.pow(3));
        assert!(candidates.iter().all(|index| index.h <= 64 && index.k <= 64 && index.l <= 64));
    }

    #[test]
    fn seeded_samples_are_reproducible() {
        let catalog = Catalog::builtin();
        let group = group(&catalog, "Fm-3m");
        let sampler = ReflectionSampler::default();

        let first = sampler.sample(&group, &mut StdRng::seed_from_u64(9));
        let second = sampler.sample(&group, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }
}
