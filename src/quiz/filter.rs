//! Projection of a reflection list onto one class of reflections.
//!
//! The learner narrows the list down to an axis or a zone to spot which
//! reflections are missing.

use std::{fmt, str::FromStr};

use super::problem::Problem;
use crate::domain::{Miller, Reflection};

/// A view onto the reflection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReflectionFilter {
    /// Every reflection.
    #[default]
    All,
    /// `h00`: only h non-zero.
    OnlyH,
    /// `0k0`: only k non-zero.
    OnlyK,
    /// `00l`: only l non-zero.
    OnlyL,
    /// `h0l`: the plane `k = 0`.
    KZeroPlane,
    /// `0kl`: the plane `h = 0`.
    HZeroPlane,
    /// `hk0`: the plane `l = 0`.
    LZeroPlane,
}

impl ReflectionFilter {
    /// Every filter, in menu order.
    pub const ALL: [Self; 7] = [
        Self::All,
        Self::OnlyH,
        Self::OnlyK,
        Self::OnlyL,
        Self::KZeroPlane,
        Self::HZeroPlane,
        Self::LZeroPlane,
    ];

    /// Parses a filter tag, falling back to [`ReflectionFilter::All`] for
    /// anything unrecognised.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// The canonical tag of the filter.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::OnlyH => "only-h-nonzero",
            Self::OnlyK => "only-k-nonzero",
            Self::OnlyL => "only-l-nonzero",
            Self::KZeroPlane => "k-zero-plane",
            Self::HZeroPlane => "h-zero-plane",
            Self::LZeroPlane => "l-zero-plane",
        }
    }

    /// The reflection-class notation the filter shows.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::All => "hkl",
            Self::OnlyH => "h00",
            Self::OnlyK => "0k0",
            Self::OnlyL => "00l",
            Self::KZeroPlane => "h0l",
            Self::HZeroPlane => "0kl",
            Self::LZeroPlane => "hk0",
        }
    }

    /// Whether a reflection is shown by this filter.
    #[must_use]
    pub const fn matches(self, index: Miller) -> bool {
        let Miller { h, k, l } = index;
        match self {
            Self::All => true,
            Self::OnlyH => h != 0 && k == 0 && l == 0,
            Self::OnlyK => h == 0 && k != 0 && l == 0,
            Self::OnlyL => h == 0 && k == 0 && l != 0,
            Self::KZeroPlane => k == 0,
            Self::HZeroPlane => h == 0,
            Self::LZeroPlane => l == 0,
        }
    }

    /// Returns the reflections shown by this filter, in their original order.
    #[must_use]
    pub fn apply(self, reflections: &[Reflection]) -> Vec<Reflection> {
        reflections
            .iter()
            .filter(|reflection| self.matches(reflection.index))
            .copied()
            .collect()
    }
}

impl fmt::Display for ReflectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned for a tag that names no filter.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown reflection filter '{0}'")]
pub struct UnknownFilterError(String);

impl FromStr for ReflectionFilter {
    type Err = UnknownFilterError;

    /// Accepts both the canonical tag and the class notation (`h00`, `h0l`,
    /// ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|filter| filter.tag().eq_ignore_ascii_case(s) || filter.notation() == s)
            .ok_or_else(|| UnknownFilterError(s.to_string()))
    }
}

/// Filters the active problem's reflections by tag.
///
/// Returns an empty list when no problem is active.
#[must_use]
pub fn filter_reflections(problem: Option<&Problem>, tag: &str) -> Vec<Reflection> {
    problem.map_or_else(Vec::new, |problem| {
        ReflectionFilter::from_tag(tag).apply(problem.reflections())
    })
}
