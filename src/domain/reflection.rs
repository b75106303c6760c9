use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use super::condition::ParseError;

/// The Miller indices `(h, k, l)` identifying a reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Miller {
    /// Index along a*.
    pub h: i32,
    /// Index along b*.
    pub k: i32,
    /// Index along c*.
    pub l: i32,
}

impl Miller {
    /// Creates a new set of Miller indices.
    #[must_use]
    pub const fn new(h: i32, k: i32, l: i32) -> Self {
        Self { h, k, l }
    }

    /// Returns the indices as an array, in `[h, k, l]` order.
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.h, self.k, self.l]
    }

    /// Whether this is a general-position reflection (no index is zero).
    #[must_use]
    pub const fn is_general(self) -> bool {
        self.h != 0 && self.k != 0 && self.l != 0
    }
}

impl fmt::Display for Miller {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.h, self.k, self.l)
    }
}

impl From<(i32, i32, i32)> for Miller {
    fn from((h, k, l): (i32, i32, i32)) -> Self {
        Self::new(h, k, l)
    }
}

/// A reflection as it appears in a (synthetic) diffraction pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reflection {
    /// The Miller indices of the reflection.
    #[serde(flatten)]
    pub index: Miller,
    /// Integrated intensity, in arbitrary units.
    pub intensity: f64,
}

/// A class of reflections restricted by a reflection condition.
///
/// Each class is a template over the Miller indices. The notation follows
/// the International Tables: `hkl` is every reflection, `h00` the reflections
/// on the a* axis, `0kl` the zone with `h = 0`, `hhl` the diagonal zone with
/// `h = k`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReflectionClass {
    /// `hkl`: all reflections.
    General,
    /// `h00`: reflections along a*.
    AxisH,
    /// `0k0`: reflections along b*.
    AxisK,
    /// `00l`: reflections along c*.
    AxisL,
    /// `0kl`: the zone `h = 0`.
    ZoneH,
    /// `h0l`: the zone `k = 0`.
    ZoneK,
    /// `hk0`: the zone `l = 0`.
    ZoneL,
    /// `hhl`: the diagonal zone `h = k`.
    Diagonal,
    /// `h-hl`: the diagonal zone `k = -h`.
    AntiDiagonal,
}

impl ReflectionClass {
    /// Every reflection class, from the most general to the most specific.
    pub const ALL: [Self; 9] = [
        Self::General,
        Self::AxisH,
        Self::AxisK,
        Self::AxisL,
        Self::ZoneH,
        Self::ZoneK,
        Self::ZoneL,
        Self::Diagonal,
        Self::AntiDiagonal,
    ];

    /// The International Tables notation for this class.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::General => "hkl",
            Self::AxisH => "h00",
            Self::AxisK => "0k0",
            Self::AxisL => "00l",
            Self::ZoneH => "0kl",
            Self::ZoneK => "h0l",
            Self::ZoneL => "hk0",
            Self::Diagonal => "hhl",
            Self::AntiDiagonal => "h-hl",
        }
    }

    /// Whether the given reflection belongs to this class.
    #[must_use]
    pub const fn contains(self, index: Miller) -> bool {
        let Miller { h, k, l } = index;
        match self {
            Self::General => true,
            Self::AxisH => k == 0 && l == 0,
            Self::AxisK => h == 0 && l == 0,
            Self::AxisL => h == 0 && k == 0,
            Self::ZoneH => h == 0,
            Self::ZoneK => k == 0,
            Self::ZoneL => l == 0,
            Self::Diagonal => h == k,
            Self::AntiDiagonal => k == -h,
        }
    }
}

impl fmt::Display for ReflectionClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for ReflectionClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.notation() == s)
            .ok_or_else(|| ParseError::UnknownClass(s.to_string()))
    }
}

impl Serialize for ReflectionClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(ReflectionClass::General, (1, 2, 3), true; "general contains everything")]
    #[test_case(ReflectionClass::AxisH, (3, 0, 0), true; "h00 on axis")]
    #[test_case(ReflectionClass::AxisH, (3, 1, 0), false; "h00 off axis")]
    #[test_case(ReflectionClass::AxisK, (0, 5, 0), true; "0k0 on axis")]
    #[test_case(ReflectionClass::AxisL, (0, 1, 4), false; "00l off axis")]
    #[test_case(ReflectionClass::ZoneK, (2, 0, 3), true; "h0l in zone")]
    #[test_case(ReflectionClass::ZoneK, (0, 0, 3), true; "h0l contains 00l")]
    #[test_case(ReflectionClass::ZoneH, (1, 2, 3), false; "0kl excludes general")]
    #[test_case(ReflectionClass::Diagonal, (2, 2, 1), true; "hhl diagonal")]
    #[test_case(ReflectionClass::Diagonal, (2, -2, 1), false; "hhl rejects h-hl")]
    #[test_case(ReflectionClass::AntiDiagonal, (2, -2, 1), true; "h-hl diagonal")]
    fn class_membership(class: ReflectionClass, index: (i32, i32, i32), expected: bool) {
        assert_eq!(class.contains(index.into()), expected);
    }

    #[test]
    fn notation_parses_back_to_class() {
        for class in ReflectionClass::ALL {
            assert_eq!(class.notation().parse::<ReflectionClass>().unwrap(), class);
        }
    }

    #[test]
    fn unknown_notation_is_rejected() {
        let error = "hhh".parse::<ReflectionClass>().unwrap_err();
        assert_eq!(error, ParseError::UnknownClass("hhh".to_string()));
    }

    #[test]
    fn reflection_serializes_flat() {
        let reflection = Reflection {
            index: Miller::new(0, 2, 0),
            intensity: 100.0,
        };
        let json = serde_json::to_value(reflection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "h": 0, "k": 2, "l": 0, "intensity": 100.0 })
        );
    }
}
