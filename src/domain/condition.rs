use std::{fmt, num::NonZeroU32, str::FromStr};

use nonempty::NonEmpty;
use serde::{Serialize, Serializer};

use super::reflection::{Miller, ReflectionClass};

/// Errors raised while parsing reflection-condition notation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The reflection class is not one of the known templates.
    #[error("unknown reflection class '{0}'")]
    UnknownClass(String),

    /// The congruence is not of the form `<linear form>=<m>n`.
    #[error("malformed congruence '{0}': {1}")]
    Congruence(String, &'static str),

    /// The congruence has a modulus of zero.
    #[error("congruence '{0}' has a zero modulus")]
    ZeroModulus(String),

    /// The rule contains no congruences.
    #[error("reflection rule is empty")]
    EmptyRule,
}

/// A single congruence `a·h + b·k + c·l ≡ 0 (mod m)`.
///
/// Written in the International Tables as, for example, `h+k=2n` or
/// `-h+k+l=3n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Congruence {
    coefficients: [i32; 3],
    modulus: NonZeroU32,
}

impl Congruence {
    /// Creates a congruence from the coefficients of `h`, `k` and `l`.
    #[must_use]
    pub const fn new(coefficients: [i32; 3], modulus: NonZeroU32) -> Self {
        Self {
            coefficients,
            modulus,
        }
    }

    /// The coefficients of `h`, `k` and `l`.
    #[must_use]
    pub const fn coefficients(&self) -> [i32; 3] {
        self.coefficients
    }

    /// The modulus `m`.
    #[must_use]
    pub const fn modulus(&self) -> NonZeroU32 {
        self.modulus
    }

    /// Whether the reflection satisfies the congruence.
    #[must_use]
    pub fn is_satisfied(&self, index: Miller) -> bool {
        let value: i64 = self
            .coefficients
            .iter()
            .zip(index.as_array())
            .map(|(&a, x)| i64::from(a) * i64::from(x))
            .sum();
        value.rem_euclid(i64::from(self.modulus.get())) == 0
    }
}

impl fmt::Display for Congruence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (coefficient, symbol) in self.coefficients.iter().zip(['h', 'k', 'l']) {
            match *coefficient {
                0 => continue,
                1 if first => write!(f, "{symbol}")?,
                1 => write!(f, "+{symbol}")?,
                -1 => write!(f, "-{symbol}")?,
                c if c > 0 && !first => write!(f, "+{c}{symbol}")?,
                c => write!(f, "{c}{symbol}")?,
            }
            first = false;
        }
        write!(f, "={}n", self.modulus)
    }
}

impl FromStr for Congruence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let malformed = |reason| ParseError::Congruence(s.trim().to_string(), reason);

        let (lhs, rhs) = text
            .split_once('=')
            .ok_or_else(|| malformed("missing '='"))?;

        let modulus = rhs
            .strip_suffix('n')
            .ok_or_else(|| malformed("right-hand side must end in 'n'"))?;
        let modulus = if modulus.is_empty() {
            1
        } else {
            modulus
                .parse::<u32>()
                .map_err(|_| malformed("modulus is not a positive integer"))?
        };
        let modulus =
            NonZeroU32::new(modulus).ok_or_else(|| ParseError::ZeroModulus(s.trim().to_string()))?;

        let mut coefficients = [0i32; 3];
        let mut seen_index = false;
        let mut rest = lhs;
        while !rest.is_empty() {
            let (sign, after_sign) = match rest.as_bytes()[0] {
                b'+' => (1, &rest[1..]),
                b'-' => (-1, &rest[1..]),
                _ if !seen_index => (1, rest),
                _ => return Err(malformed("terms must be separated by '+' or '-'")),
            };

            let digits = after_sign
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(|| malformed("term is missing an index"))?;
            let magnitude = if digits == 0 {
                1
            } else {
                after_sign[..digits]
                    .parse::<i32>()
                    .map_err(|_| malformed("coefficient out of range"))?
            };

            let mut remainder = after_sign[digits..].chars();
            let slot = match remainder.next() {
                Some('h') => 0,
                Some('k') => 1,
                Some('l') => 2,
                _ => return Err(malformed("expected one of 'h', 'k' or 'l'")),
            };
            coefficients[slot] = magnitude
                .checked_mul(sign)
                .and_then(|term| coefficients[slot].checked_add(term))
                .ok_or_else(|| malformed("coefficient out of range"))?;
            seen_index = true;
            rest = remainder.as_str();
        }

        if !seen_index || coefficients == [0; 3] {
            return Err(malformed("left-hand side has no indices"));
        }

        Ok(Self::new(coefficients, modulus))
    }
}

/// The rule of a reflection condition: one or more congruences that must all
/// hold for a reflection to be observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule(NonEmpty<Congruence>);

impl Rule {
    /// The congruences making up this rule.
    pub fn congruences(&self) -> impl Iterator<Item = &Congruence> {
        self.0.iter()
    }

    /// Whether the reflection satisfies every congruence of the rule.
    #[must_use]
    pub fn is_satisfied(&self, index: Miller) -> bool {
        self.0.iter().all(|congruence| congruence.is_satisfied(index))
    }
}

impl From<Congruence> for Rule {
    fn from(congruence: Congruence) -> Self {
        Self(NonEmpty::new(congruence))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(", "))
    }
}

impl FromStr for Rule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let congruences = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Congruence>, _>>()?;
        NonEmpty::from_vec(congruences)
            .map(Self)
            .ok_or(ParseError::EmptyRule)
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A reflection condition (systematic absence) of a space group.
///
/// Reflections of the given class that do not satisfy the rule are
/// extinguished by the symmetry element named in `cause`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtinctionCondition {
    #[serde(rename = "reflections")]
    class: ReflectionClass,
    rule: Rule,
    cause: String,
}

impl ExtinctionCondition {
    /// Creates a condition from already-parsed parts.
    #[must_use]
    pub const fn new(class: ReflectionClass, rule: Rule, cause: String) -> Self {
        Self { class, rule, cause }
    }

    /// Parses a condition from its textual class and rule notation.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if either the class or the rule is malformed.
    pub fn parse(class: &str, rule: &str, cause: impl Into<String>) -> Result<Self, ParseError> {
        Ok(Self::new(class.parse()?, rule.parse()?, cause.into()))
    }

    /// The class of reflections this condition restricts.
    #[must_use]
    pub const fn class(&self) -> ReflectionClass {
        self.class
    }

    /// The rule observed reflections of the class satisfy.
    #[must_use]
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The symmetry element responsible for the absences.
    #[must_use]
    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// Whether the condition restricts the given reflection.
    #[must_use]
    pub const fn applies_to(&self, index: Miller) -> bool {
        self.class.contains(index)
    }

    /// Whether the reflection may be observed under this condition.
    ///
    /// Reflections outside the condition's class are always permitted.
    #[must_use]
    pub fn permits(&self, index: Miller) -> bool {
        !self.applies_to(index) || self.rule.is_satisfied(index)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("h=2n", [1, 0, 0], 2; "single index")]
    #[test_case("h+k=2n", [1, 1, 0], 2; "two indices")]
    #[test_case("2k+l=4n", [0, 2, 1], 4; "leading coefficient")]
    #[test_case("-h+k+l=3n", [-1, 1, 1], 3; "negative leading term")]
    #[test_case("2h + l = 4n", [2, 0, 1], 4; "whitespace tolerated")]
    #[test_case("h+h-k+k=2n", [2, 0, 0], 2; "like terms combine")]
    fn parses_congruence(text: &str, coefficients: [i32; 3], modulus: u32) {
        let congruence: Congruence = text.parse().unwrap();
        assert_eq!(congruence.coefficients(), coefficients);
        assert_eq!(congruence.modulus().get(), modulus);
    }

    #[test_case("h+k"; "missing equals")]
    #[test_case("h=2"; "missing n")]
    #[test_case("=2n"; "no indices")]
    #[test_case("h+x=2n"; "unknown index")]
    #[test_case("hk=2n"; "missing operator")]
    #[test_case("h+=2n"; "dangling operator")]
    #[test_case("2147483647h+1h=2n"; "coefficient overflow")]
    #[test_case("-2147483648h-1h=2n"; "coefficient underflow")]
    #[test_case("99999999999k=2n"; "coefficient too large")]
    #[test_case("h-h=2n"; "terms cancel")]
    #[test_case("2k+l-2k-l=4n"; "every term cancels")]
    fn rejects_malformed_congruence(text: &str) {
        assert!(matches!(
            text.parse::<Congruence>(),
            Err(ParseError::Congruence(..))
        ));
    }

    #[test]
    fn rejects_zero_modulus() {
        assert_eq!(
            "h=0n".parse::<Congruence>(),
            Err(ParseError::ZeroModulus("h=0n".to_string()))
        );
    }

    #[test]
    fn display_matches_tables_notation() {
        for text in ["h=2n", "h+k=2n", "2k+l=4n", "-h+k+l=3n", "2h+l=4n"] {
            assert_eq!(text.parse::<Congruence>().unwrap().to_string(), text);
        }
    }

    #[test]
    fn negative_values_reduce_correctly() {
        let rhombohedral: Congruence = "-h+k+l=3n".parse().unwrap();
        assert!(rhombohedral.is_satisfied(Miller::new(1, 1, 0)));
        assert!(rhombohedral.is_satisfied(Miller::new(2, 1, 1)));
        assert!(!rhombohedral.is_satisfied(Miller::new(1, 1, 1)));
        assert!(rhombohedral.is_satisfied(Miller::new(1, -1, 2)));
    }

    #[test]
    fn rule_requires_every_congruence() {
        let face_centred: Rule = "h+k=2n, k+l=2n, h+l=2n".parse().unwrap();
        assert_eq!(face_centred.congruences().count(), 3);
        assert!(face_centred.is_satisfied(Miller::new(1, 1, 1)));
        assert!(face_centred.is_satisfied(Miller::new(2, 0, 0)));
        assert!(!face_centred.is_satisfied(Miller::new(1, 1, 0)));
        assert_eq!(face_centred.to_string(), "h+k=2n, k+l=2n, h+l=2n");
    }

    #[test]
    fn empty_rule_is_rejected() {
        assert_eq!("".parse::<Rule>(), Err(ParseError::EmptyRule));
    }

    #[test]
    fn condition_only_restricts_its_class() {
        let screw = ExtinctionCondition::parse("0k0", "k=2n", "b-axis 2₁ screw axis").unwrap();

        assert!(!screw.permits(Miller::new(0, 1, 0)));
        assert!(screw.permits(Miller::new(0, 2, 0)));
        // Odd k outside the axis is unaffected.
        assert!(screw.permits(Miller::new(1, 1, 0)));
        assert_eq!(screw.cause(), "b-axis 2₁ screw axis");
    }
}
