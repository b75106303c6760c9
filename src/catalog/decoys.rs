//! Plausible but generic symmetry-element descriptions, per crystal system.
//!
//! Decoys use the same wording as the catalog causes, so a learner cannot
//! spot them by phrasing alone. A pool may contain the true cause of a given
//! group; the generator removes correct answers before drawing.

use crate::domain::CrystalSystem;

const TRICLINIC: &[&str] = &[
    "a-axis 2₁ screw axis",
    "b-axis 2₁ screw axis",
    "c-axis 2₁ screw axis",
    "C-centred lattice (C)",
    "body-centred lattice (I)",
    "c-glide plane perpendicular to b-axis",
];

const MONOCLINIC: &[&str] = &[
    "a-axis 2₁ screw axis",
    "b-axis 2₁ screw axis",
    "c-axis 2₁ screw axis",
    "A-centred lattice (A)",
    "C-centred lattice (C)",
    "body-centred lattice (I)",
    "c-glide plane perpendicular to a-axis",
    "c-glide plane perpendicular to b-axis",
    "n-glide plane perpendicular to b-axis",
    "a-glide plane perpendicular to b-axis",
];

const ORTHORHOMBIC: &[&str] = &[
    "a-axis 2₁ screw axis",
    "b-axis 2₁ screw axis",
    "c-axis 2₁ screw axis",
    "A-centred lattice (A)",
    "C-centred lattice (C)",
    "body-centred lattice (I)",
    "face-centred lattice (F)",
    "b-glide plane perpendicular to a-axis",
    "c-glide plane perpendicular to a-axis",
    "n-glide plane perpendicular to a-axis",
    "a-glide plane perpendicular to b-axis",
    "c-glide plane perpendicular to b-axis",
    "n-glide plane perpendicular to b-axis",
    "a-glide plane perpendicular to c-axis",
    "b-glide plane perpendicular to c-axis",
    "n-glide plane perpendicular to c-axis",
    "d-glide plane perpendicular to a-axis",
];

const TETRAGONAL: &[&str] = &[
    "c-axis 4₁ screw axis",
    "c-axis 4₂ screw axis",
    "c-axis 4₃ screw axis",
    "c-axis 2₁ screw axis",
    "a-axis 2₁ screw axis",
    "body-centred lattice (I)",
    "n-glide plane perpendicular to c-axis",
    "a-glide plane perpendicular to c-axis",
    "c-glide plane perpendicular to a-axis",
    "b-glide plane perpendicular to a-axis",
    "n-glide plane perpendicular to a-axis",
    "c-glide plane perpendicular to [110]",
    "d-glide plane perpendicular to [1-10]",
];

const TRIGONAL: &[&str] = &[
    "c-axis 3₁ screw axis",
    "c-axis 3₂ screw axis",
    "c-axis 6₃ screw axis",
    "c-axis 2₁ screw axis",
    "rhombohedral lattice (R, hexagonal axes)",
    "c-glide plane perpendicular to [1-10]",
    "c-glide plane perpendicular to [110]",
    "body-centred lattice (I)",
];

const HEXAGONAL: &[&str] = &[
    "c-axis 6₁ screw axis",
    "c-axis 6₂ screw axis",
    "c-axis 6₃ screw axis",
    "c-axis 6₄ screw axis",
    "c-axis 6₅ screw axis",
    "c-axis 3₁ screw axis",
    "c-axis 2₁ screw axis",
    "c-glide plane perpendicular to [1-10]",
    "c-glide plane perpendicular to [110]",
    "rhombohedral lattice (R, hexagonal axes)",
];

const CUBIC: &[&str] = &[
    "face-centred lattice (F)",
    "body-centred lattice (I)",
    "a-axis 2₁ screw axis",
    "a-axis 4₁ screw axis",
    "a-axis 4₂ screw axis",
    "a-axis 4₃ screw axis",
    "n-glide plane perpendicular to a-axis",
    "d-glide plane perpendicular to a-axis",
    "c-glide plane perpendicular to [1-10]",
    "n-glide plane perpendicular to [1-10]",
    "d-glide plane perpendicular to [1-10]",
    "glide plane",
];

/// The decoy pool for a crystal system.
#[must_use]
pub const fn decoys_for(system: CrystalSystem) -> &'static [&'static str] {
    match system {
        CrystalSystem::Triclinic => TRICLINIC,
        CrystalSystem::Monoclinic => MONOCLINIC,
        CrystalSystem::Orthorhombic => ORTHORHOMBIC,
        CrystalSystem::Tetragonal => TETRAGONAL,
        CrystalSystem::Trigonal => TRIGONAL,
        CrystalSystem::Hexagonal => HEXAGONAL,
        CrystalSystem::Cubic => CUBIC,
    }
}
