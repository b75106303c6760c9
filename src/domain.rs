//! Domain models for the systematic-absence quiz.
//!
//! This module contains the core domain types: Miller indices and reflection
//! classes, reflection conditions, space groups and the quiz configuration.

/// Miller indices, reflections and reflection classes.
pub mod reflection;
pub use reflection::{Miller, Reflection, ReflectionClass};

/// Reflection conditions and the congruences they are written in.
pub mod condition;
pub use condition::{Congruence, ExtinctionCondition, ParseError, Rule};

mod crystal_system;
pub use crystal_system::{CrystalSystem, UnknownSystemError};

mod space_group;
pub use space_group::{SpaceGroup, MAX_NUMBER};

mod config;
pub use config::{Config, MAX_AXIAL_INDEX, MAX_ZONE_INDEX};
