use std::{
    collections::BTreeSet,
    io, iter,
    path::{Path, PathBuf},
    slice,
};

use nonempty::NonEmpty;
use rand::Rng;
use tracing::{debug, instrument};

use crate::domain::{CrystalSystem, ParseError, SpaceGroup};

mod decoys;
pub use decoys::decoys_for;

mod record;
use record::CatalogDocument;

/// The catalog document compiled into the binary.
const BUILTIN: &str = include_str!("../data/space_groups.toml");

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The catalog is not a valid catalog document.
    #[error("failed to parse catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// Two records share a space-group number.
    #[error("space group {0} appears more than once")]
    DuplicateNumber(u8),

    /// A record's number is not a valid space-group number.
    #[error("space group number {0} is outside 1..=230")]
    NumberOutOfRange(u32),

    /// The catalog contains no space groups.
    #[error("catalog contains no space groups")]
    Empty,

    /// A reflection condition could not be parsed.
    #[error("invalid condition in space group {number} ({name}): {source}")]
    Condition {
        /// The number of the offending space group.
        number: u8,
        /// The name of the offending space group.
        name: String,
        /// The parse failure.
        source: ParseError,
    },
}

/// An immutable, non-empty table of space groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    groups: NonEmpty<SpaceGroup>,
}

impl Catalog {
    /// The catalog of all 230 space groups shipped with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog is invalid (which should never happen;
    /// it is checked by the test suite).
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN).expect("the built-in catalog is valid")
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain a
    /// valid catalog.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a catalog from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, contains invalid or
    /// duplicate space-group numbers, contains unparseable reflection
    /// conditions, or is empty.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let document: CatalogDocument = toml::from_str(content)?;

        let mut seen = BTreeSet::new();
        let mut groups = Vec::new();
        for record in document.into_records() {
            let group = SpaceGroup::try_from(record)?;
            if !seen.insert(group.number()) {
                return Err(LoadError::DuplicateNumber(group.number().get()));
            }
            groups.push(group);
        }

        let groups = NonEmpty::from_vec(groups).ok_or(LoadError::Empty)?;
        debug!(count = groups.len(), "loaded space-group catalog");
        Ok(Self { groups })
    }

    /// The number of space groups in the catalog. Never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Iterates over the space groups in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &SpaceGroup> {
        self.into_iter()
    }

    /// Iterates over the space groups of one crystal system.
    pub fn in_system(&self, system: CrystalSystem) -> impl Iterator<Item = &SpaceGroup> {
        self.iter().filter(move |group| group.system() == system)
    }

    /// Finds a space group by its International Tables number.
    #[must_use]
    pub fn by_number(&self, number: u8) -> Option<&SpaceGroup> {
        self.iter().find(|group| group.number().get() == number)
    }

    /// Finds a space group by its Hermann–Mauguin symbol.
    ///
    /// Matching ignores ASCII case and treats subscript digits as plain
    /// digits, so `p21/c` finds `P2₁/c`.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&SpaceGroup> {
        let needle = fold_symbol(name);
        self.iter().find(|group| fold_symbol(group.name()) == needle)
    }

    /// Finds a space group by number or, failing that, by symbol.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&SpaceGroup> {
        let key = key.trim();
        key.parse::<u8>()
            .ok()
            .and_then(|number| self.by_number(number))
            .or_else(|| self.by_name(key))
    }

    /// Picks a space group uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &SpaceGroup {
        let index = rng.gen_range(0..self.groups.len());
        self.groups.get(index).unwrap_or_else(|| self.groups.first())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SpaceGroup;
    type IntoIter = iter::Chain<iter::Once<&'a SpaceGroup>, slice::Iter<'a, SpaceGroup>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(&self.groups.head).chain(self.groups.tail.iter())
    }
}

/// Normalizes a Hermann–Mauguin symbol for comparison.
fn fold_symbol(symbol: &str) -> String {
    symbol
        .trim()
        .chars()
        .map(|c| match c {
            '₀'..='₉' => char::from_u32(u32::from(c) - u32::from('₀') + u32::from('0')).unwrap_or(c),
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::domain::ReflectionClass;

    #[test]
    fn builtin_catalog_has_all_230_groups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 230);
        for (expected, group) in (1..=230).zip(catalog.iter()) {
            assert_eq!(group.number().get(), expected);
        }
    }

    #[test]
    fn builtin_catalog_covers_every_system() {
        let catalog = Catalog::builtin();
        let counts: Vec<usize> = CrystalSystem::ALL
            .into_iter()
            .map(|system| catalog.in_system(system).count())
            .collect();
        assert_eq!(counts, vec![2, 13, 59, 68, 25, 27, 36]);
    }

    #[test]
    fn causes_are_distinct_for_every_group() {
        for group in &Catalog::builtin() {
            let causes = group.causes();
            let unique: BTreeSet<_> = causes.iter().collect();
            assert_eq!(causes.len(), unique.len(), "{} repeats a cause", group.name());
        }
    }

    #[test]
    fn finds_groups_by_number_and_symbol() {
        let catalog = Catalog::builtin();

        let p21 = catalog.find("4").unwrap();
        assert_eq!(p21.name(), "P2₁");
        assert_eq!(p21.system(), CrystalSystem::Monoclinic);
        let condition = &p21.conditions()[0];
        assert_eq!(condition.class(), ReflectionClass::AxisK);
        assert_eq!(condition.rule().to_string(), "k=2n");
        assert_eq!(condition.cause(), "b-axis 2₁ screw axis");

        assert_eq!(catalog.find("p21/c").unwrap().number().get(), 14);
        assert_eq!(catalog.find("P2₁/c").unwrap().number().get(), 14);
        assert_eq!(catalog.find("P1").unwrap().number().get(), 1);
        assert!(catalog.find("X42").is_none());
        assert!(catalog.find("231").is_none());
    }

    #[test]
    fn choose_stays_within_catalog() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let group = catalog.choose(&mut rng);
            assert!(catalog.by_number(group.number().get()).is_some());
        }
    }

    #[test]
    fn load_reads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            "_version = \"1\"\n\n[[groups]]\nnumber = 4\nname = \"P2₁\"\nsystem = \"monoclinic\"\nconditions = [\n    { reflections = \"0k0\", rule = \"k=2n\", cause = \"b-axis 2₁ screw axis\" },\n]\n"
                .as_bytes(),
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.iter().next().unwrap().causes(), vec!["b-axis 2₁ screw axis"]);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let error = Catalog::load(&tmp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(error, LoadError::Io { .. }));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let error = Catalog::from_toml_str("_version = \"1\"\ngroups = []\n").unwrap_err();
        assert!(matches!(error, LoadError::Empty));
    }

    #[test]
    fn duplicate_numbers_are_rejected() {
        let document = "_version = \"1\"\n\n[[groups]]\nnumber = 1\nname = \"P1\"\nsystem = \"triclinic\"\n\n[[groups]]\nnumber = 1\nname = \"P1\"\nsystem = \"triclinic\"\n";
        let error = Catalog::from_toml_str(document).unwrap_err();
        assert!(matches!(error, LoadError::DuplicateNumber(1)));
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        for number in [0, 231, 1000] {
            let document = format!(
                "_version = \"1\"\n\n[[groups]]\nnumber = {number}\nname = \"P1\"\nsystem = \"triclinic\"\n"
            );
            let error = Catalog::from_toml_str(&document).unwrap_err();
            assert!(matches!(error, LoadError::NumberOutOfRange(n) if n == number));
        }
    }

    #[test]
    fn malformed_condition_names_the_group() {
        let document = "_version = \"1\"\n\n[[groups]]\nnumber = 4\nname = \"P2₁\"\nsystem = \"monoclinic\"\nconditions = [{ reflections = \"0k0\", rule = \"k=2\", cause = \"screw\" }]\n";
        let error = Catalog::from_toml_str(document).unwrap_err();
        assert!(matches!(error, LoadError::Condition { number: 4, .. }));
        assert!(error.to_string().contains("P2₁"));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let error = Catalog::from_toml_str("_version = \"2\"\ngroups = []\n").unwrap_err();
        assert!(matches!(error, LoadError::Toml(_)));
    }
}
