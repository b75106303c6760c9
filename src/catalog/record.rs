use std::num::NonZeroU8;

use serde::Deserialize;

use super::LoadError;
use crate::domain::{CrystalSystem, ExtinctionCondition, SpaceGroup, MAX_NUMBER};

/// The serialized versions of the catalog document.
///
/// Records are kept separate from the domain types so the file format can
/// evolve without touching [`SpaceGroup`].
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
pub(super) enum CatalogDocument {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        groups: Vec<GroupRecord>,
    },
}

impl CatalogDocument {
    pub(super) fn into_records(self) -> Vec<GroupRecord> {
        match self {
            Self::V1 { groups } => groups,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct GroupRecord {
    pub(super) number: u32,
    pub(super) name: String,
    pub(super) system: CrystalSystem,
    #[serde(default)]
    pub(super) conditions: Vec<ConditionRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConditionRecord {
    pub(super) reflections: String,
    pub(super) rule: String,
    pub(super) cause: String,
}

impl TryFrom<GroupRecord> for SpaceGroup {
    type Error = LoadError;

    fn try_from(record: GroupRecord) -> Result<Self, Self::Error> {
        let number = u8::try_from(record.number)
            .ok()
            .filter(|n| *n <= MAX_NUMBER)
            .and_then(NonZeroU8::new)
            .ok_or(LoadError::NumberOutOfRange(record.number))?;

        let conditions = record
            .conditions
            .into_iter()
            .map(|c| ExtinctionCondition::parse(&c.reflections, &c.rule, c.cause))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| LoadError::Condition {
                number: number.get(),
                name: record.name.clone(),
                source,
            })?;

        Ok(Self::new(number, record.name, record.system, conditions))
    }
}
