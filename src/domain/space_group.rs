use std::num::NonZeroU8;

use serde::Serialize;

use super::{condition::ExtinctionCondition, crystal_system::CrystalSystem, reflection::Miller};

/// The highest space-group number in the International Tables.
pub const MAX_NUMBER: u8 = 230;

/// A space group together with its reflection conditions.
///
/// Space groups are loaded once from the catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceGroup {
    number: NonZeroU8,
    name: String,
    system: CrystalSystem,
    conditions: Vec<ExtinctionCondition>,
}

impl SpaceGroup {
    /// Creates a space group record.
    #[must_use]
    pub const fn new(
        number: NonZeroU8,
        name: String,
        system: CrystalSystem,
        conditions: Vec<ExtinctionCondition>,
    ) -> Self {
        Self {
            number,
            name,
            system,
            conditions,
        }
    }

    /// The International Tables number (1–230).
    #[must_use]
    pub const fn number(&self) -> NonZeroU8 {
        self.number
    }

    /// The Hermann–Mauguin symbol, for example `P2₁/c`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The crystal system the group belongs to.
    #[must_use]
    pub const fn system(&self) -> CrystalSystem {
        self.system
    }

    /// The group's reflection conditions, in catalog order.
    #[must_use]
    pub fn conditions(&self) -> &[ExtinctionCondition] {
        &self.conditions
    }

    /// The distinct symmetry elements responsible for the group's absences.
    ///
    /// Causes shared by several conditions appear once, in order of first
    /// appearance.
    #[must_use]
    pub fn causes(&self) -> Vec<&str> {
        let mut causes: Vec<&str> = Vec::with_capacity(self.conditions.len());
        for condition in &self.conditions {
            if !causes.contains(&condition.cause()) {
                causes.push(condition.cause());
            }
        }
        causes
    }

    /// Whether a reflection is observed, i.e. not systematically absent.
    ///
    /// A reflection is observed when every condition whose class contains it
    /// is satisfied.
    #[must_use]
    pub fn permits(&self, index: Miller) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.permits(index))
    }
}
