use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the seven crystal systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrystalSystem {
    /// No symmetry beyond (possibly) inversion.
    Triclinic,
    /// A single two-fold axis or mirror.
    Monoclinic,
    /// Three mutually perpendicular two-fold axes or mirrors.
    Orthorhombic,
    /// A single four-fold axis.
    Tetragonal,
    /// A single three-fold axis.
    Trigonal,
    /// A single six-fold axis.
    Hexagonal,
    /// Four three-fold axes along the body diagonals.
    Cubic,
}

impl CrystalSystem {
    /// All crystal systems, in order of increasing symmetry.
    pub const ALL: [Self; 7] = [
        Self::Triclinic,
        Self::Monoclinic,
        Self::Orthorhombic,
        Self::Tetragonal,
        Self::Trigonal,
        Self::Hexagonal,
        Self::Cubic,
    ];

    /// The capitalised name of the system.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triclinic => "Triclinic",
            Self::Monoclinic => "Monoclinic",
            Self::Orthorhombic => "Orthorhombic",
            Self::Tetragonal => "Tetragonal",
            Self::Trigonal => "Trigonal",
            Self::Hexagonal => "Hexagonal",
            Self::Cubic => "Cubic",
        }
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a crystal system.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown crystal system '{0}': expected one of triclinic, monoclinic, orthorhombic, tetragonal, trigonal, hexagonal or cubic")]
pub struct UnknownSystemError(String);

impl FromStr for CrystalSystem {
    type Err = UnknownSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|system| system.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownSystemError(s.to_string()))
    }
}
