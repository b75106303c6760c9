use std::{
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Configuration for problem generation.
///
/// This struct holds settings that control how problems are assembled:
/// how many answer choices are offered, which reflections are sampled and
/// the range of synthetic intensities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Versions", into = "Versions")]
pub struct Config {
    /// The number of answer choices offered per problem.
    ///
    /// Correct answers always appear; decoys fill the remaining slots.
    choice_count: usize,

    /// The highest index sampled along each reciprocal axis (`h00`, `0k0`,
    /// `00l`).
    max_axial_index: i32,

    /// The highest index sampled in the zones, diagonals and general
    /// positions.
    max_zone_index: i32,

    /// Lower bound of the synthetic intensities.
    intensity_min: f64,

    /// Upper bound of the synthetic intensities.
    intensity_max: f64,

    /// An alternative catalog file to load instead of the built-in one.
    pub catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            choice_count: default_choice_count(),
            max_axial_index: default_max_axial_index(),
            max_zone_index: default_max_zone_index(),
            intensity_min: default_intensity_min(),
            intensity_max: default_intensity_max(),
            catalog: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the number of answer choices offered per problem.
    #[must_use]
    pub const fn choice_count(&self) -> usize {
        self.choice_count
    }

    /// Sets the number of answer choices offered per problem.
    ///
    /// At least one choice is always offered.
    pub const fn set_choice_count(&mut self, value: usize) {
        self.choice_count = if value == 0 { 1 } else { value };
    }

    /// Returns the highest sampled index along the reciprocal axes.
    #[must_use]
    pub const fn max_axial_index(&self) -> i32 {
        self.max_axial_index
    }

    /// Returns the highest sampled index in zones and general positions.
    #[must_use]
    pub const fn max_zone_index(&self) -> i32 {
        self.max_zone_index
    }

    /// Sets the sampling limits for axial and zonal reflections.
    ///
    /// Limits are clamped to `1..=MAX_AXIAL_INDEX` and `1..=MAX_ZONE_INDEX`.
    pub fn set_index_limits(&mut self, axial: i32, zone: i32) {
        self.max_axial_index = axial.clamp(1, MAX_AXIAL_INDEX);
        self.max_zone_index = zone.clamp(1, MAX_ZONE_INDEX);
    }

    /// Returns the range of synthetic intensities, lowest bound first.
    #[must_use]
    pub fn intensity_range(&self) -> RangeInclusive<f64> {
        if self.intensity_min <= self.intensity_max {
            self.intensity_min..=self.intensity_max
        } else {
            self.intensity_max..=self.intensity_min
        }
    }

    /// Sets the range of synthetic intensities.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not finite or the range is too
    /// wide to sample from.
    pub fn set_intensity_range(&mut self, min: f64, max: f64) -> Result<(), String> {
        check_intensity_range(min, max)?;
        self.intensity_min = min;
        self.intensity_max = max;
        Ok(())
    }
}

/// The highest accepted `max_axial_index`.
pub const MAX_AXIAL_INDEX: i32 = 64;

/// The highest accepted `max_zone_index`.
pub const MAX_ZONE_INDEX: i32 = 16;

fn check_intensity_range(min: f64, max: f64) -> Result<(), String> {
    if !min.is_finite() || !max.is_finite() {
        return Err(format!(
            "intensity bounds must be finite (got {min} and {max})"
        ));
    }
    if !(max - min).is_finite() {
        return Err(format!("intensity range {min}..={max} is too wide"));
    }
    Ok(())
}

fn check_index_limit(name: &str, value: i32, max: i32) -> Result<(), String> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} must be between 1 and {max} (got {value})"))
    }
}

const fn default_choice_count() -> usize {
    5
}

const fn default_max_axial_index() -> i32 {
    8
}

const fn default_max_zone_index() -> i32 {
    3
}

const fn default_intensity_min() -> f64 {
    10.0
}

const fn default_intensity_max() -> f64 {
    250.0
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_choice_count")]
        choice_count: usize,

        #[serde(default = "default_max_axial_index")]
        max_axial_index: i32,

        #[serde(default = "default_max_zone_index")]
        max_zone_index: i32,

        #[serde(default = "default_intensity_min")]
        intensity_min: f64,

        #[serde(default = "default_intensity_max")]
        intensity_max: f64,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        catalog: Option<PathBuf>,
    },
}

impl TryFrom<Versions> for Config {
    type Error = String;

    fn try_from(versions: Versions) -> Result<Self, Self::Error> {
        match versions {
            Versions::V1 {
                choice_count,
                max_axial_index,
                max_zone_index,
                intensity_min,
                intensity_max,
                catalog,
            } => {
                if choice_count == 0 {
                    return Err("choice_count must be at least 1".to_string());
                }
                check_index_limit("max_axial_index", max_axial_index, MAX_AXIAL_INDEX)?;
                check_index_limit("max_zone_index", max_zone_index, MAX_ZONE_INDEX)?;
                check_intensity_range(intensity_min, intensity_max)?;

                Ok(Self {
                    choice_count,
                    max_axial_index,
                    max_zone_index,
                    intensity_min,
                    intensity_max,
                    catalog,
                })
            }
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            choice_count: config.choice_count,
            max_axial_index: config.max_axial_index,
            max_zone_index: config.max_zone_index,
            intensity_min: config.intensity_min,
            intensity_max: config.intensity_max,
            catalog: config.catalog,
        }
    }
}
