//! Systematic-absence quiz
//!
//! Learners are shown the reflections observed for a randomly chosen space
//! group and must name the screw axes, glide planes and lattice centrings
//! responsible for the missing ones.

pub mod domain;
pub use domain::{
    Config, CrystalSystem, ExtinctionCondition, Miller, Reflection, ReflectionClass, SpaceGroup,
};

/// The catalog of the 230 space groups and their reflection conditions.
pub mod catalog;
pub use catalog::{Catalog, LoadError};

pub mod quiz;
pub use quiz::{Problem, ProblemGenerator, ReflectionFilter};
