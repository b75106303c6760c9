//! The quiz: generating problems, checking answers and filtering reflection
//! lists.
//!
//! Callers hold the active [`Problem`] themselves and pass it to
//! [`answer::check`] and [`filter::filter_reflections`]; there is no hidden
//! "current problem" state.

pub mod answer;
pub use answer::check;

pub mod filter;
pub use filter::{filter_reflections, ReflectionFilter, UnknownFilterError};

mod generator;
pub use generator::ProblemGenerator;

mod problem;
pub use problem::Problem;

mod reflections;
pub use reflections::ReflectionSampler;
