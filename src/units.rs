//! Unit systems and length conversions.
//!
//! Building dimensions (span, wall height, ridge offset) are expressed in the
//! *large* unit of the active system, feet or meters. A pitch numerator is
//! conventionally quoted in the *small* unit, inches per foot of run or
//! centimetres per meter of run.

use std::fmt;

use serde::{Deserialize, Serialize};
use uom::si::f64::Length;
use uom::si::length::{foot, meter};

/// Inches per foot.
const INCHES_PER_FOOT: f64 = 12.0;
/// Centimetres per meter.
const CENTIMETRES_PER_METER: f64 = 100.0;

/// Measurement system used for every length passed to or returned from the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Feet for building dimensions, inches for pitch.
    #[default]
    Imperial,
    /// Meters for building dimensions, centimetres for pitch.
    Metric,
}

impl UnitSystem {
    /// Number of small units in one large unit.
    #[must_use]
    pub const fn small_unit_factor(self) -> f64 {
        match self {
            Self::Imperial => INCHES_PER_FOOT,
            Self::Metric => CENTIMETRES_PER_METER,
        }
    }

    /// Conventional pitch run for this system: 12 (inches per foot) or 100
    /// (centimetres per meter).
    ///
    /// # Examples
    /// ```
    /// use gable_roof::UnitSystem;
    ///
    /// assert_eq!(UnitSystem::Imperial.canonical_pitch_run(), 12.0);
    /// assert_eq!(UnitSystem::Metric.canonical_pitch_run(), 100.0);
    /// ```
    #[must_use]
    pub const fn canonical_pitch_run(self) -> f64 {
        self.small_unit_factor()
    }

    /// Symbol of the large unit.
    #[must_use]
    pub const fn large_unit_symbol(self) -> &'static str {
        match self {
            Self::Imperial => "ft",
            Self::Metric => "m",
        }
    }

    /// Symbol of the small unit.
    #[must_use]
    pub const fn small_unit_symbol(self) -> &'static str {
        match self {
            Self::Imperial => "in",
            Self::Metric => "cm",
        }
    }

    /// Wrap a large-unit value as a dimensioned quantity.
    fn length(self, value: f64) -> Length {
        match self {
            Self::Imperial => Length::new::<foot>(value),
            Self::Metric => Length::new::<meter>(value),
        }
    }

    /// Read a dimensioned quantity back in this system's large unit.
    fn value_of(self, length: Length) -> f64 {
        match self {
            Self::Imperial => length.get::<foot>(),
            Self::Metric => length.get::<meter>(),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => f.write_str("imperial"),
            Self::Metric => f.write_str("metric"),
        }
    }
}

/// Convert a large-unit value (feet or meters) to the small unit (inches or centimetres).
///
/// # Examples
/// ```
/// use gable_roof::{to_small_unit, UnitSystem};
///
/// assert_eq!(to_small_unit(2.0, UnitSystem::Imperial), 24.0);
/// assert_eq!(to_small_unit(1.5, UnitSystem::Metric), 150.0);
/// ```
#[must_use]
pub fn to_small_unit(value: f64, units: UnitSystem) -> f64 {
    value * units.small_unit_factor()
}

/// Convert a small-unit value (inches or centimetres) to the large unit.
#[must_use]
pub fn to_large_unit(value: f64, units: UnitSystem) -> f64 {
    value / units.small_unit_factor()
}

/// Convert a large-unit length between unit systems.
///
/// Values are returned unchanged when both systems are the same. Otherwise the
/// foot is taken as exactly 0.3048 m.
///
/// # Examples
/// ```
/// use approx::assert_relative_eq;
/// use gable_roof::{convert_length, UnitSystem};
///
/// let meters = convert_length(10.0, UnitSystem::Imperial, UnitSystem::Metric);
/// assert_relative_eq!(meters, 3.048, epsilon = 1.0e-12);
/// ```
#[must_use]
pub fn convert_length(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return value;
    }
    to.value_of(from.length(value))
}
