//! Roof steepness as a rise-over-run ratio.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::UnitSystem;

/// Rise over run, independent of the building's size.
///
/// Both terms share a unit so the ratio is unit-free; by convention the run is 12
/// (inches per foot) for imperial pitches and 100 (centimetres per meter) for
/// metric ones. The solver rejects a negative rise or a non-positive run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    /// Numerator, vertical change per `run`.
    pub rise: f64,
    /// Denominator, horizontal distance.
    pub run: f64,
}

impl Pitch {
    /// Create a pitch from explicit rise and run.
    #[must_use]
    pub const fn new(rise: f64, run: f64) -> Self {
        Self { rise, run }
    }

    /// Inches of rise per foot (run of 12).
    ///
    /// # Examples
    /// ```
    /// use gable_roof::Pitch;
    ///
    /// assert_eq!(Pitch::imperial(6.0).to_string(), "6/12");
    /// ```
    #[must_use]
    pub const fn imperial(rise: f64) -> Self {
        Self::new(rise, UnitSystem::Imperial.canonical_pitch_run())
    }

    /// Centimetres of rise per meter (run of 100).
    #[must_use]
    pub const fn metric(rise: f64) -> Self {
        Self::new(rise, UnitSystem::Metric.canonical_pitch_run())
    }

    /// Tangent of the nominal slope.
    #[must_use]
    pub fn ratio(self) -> f64 {
        self.rise / self.run
    }

    /// Nominal slope from horizontal, in degrees.
    ///
    /// # Examples
    /// ```
    /// use approx::assert_relative_eq;
    /// use gable_roof::Pitch;
    ///
    /// assert_relative_eq!(Pitch::imperial(12.0).angle_degrees(), 45.0, epsilon = 1.0e-12);
    /// ```
    #[must_use]
    pub fn angle_degrees(self) -> f64 {
        self.ratio().atan().to_degrees()
    }

    /// Re-express the pitch for another unit system.
    ///
    /// When the systems differ the run becomes the target's conventional run and
    /// the rise is rescaled so the ratio is unchanged. No rounding is applied.
    ///
    /// # Examples
    /// ```
    /// use approx::assert_relative_eq;
    /// use gable_roof::{Pitch, UnitSystem};
    ///
    /// let metric = Pitch::imperial(6.0).converted(UnitSystem::Imperial, UnitSystem::Metric);
    /// assert_eq!(metric.run, 100.0);
    /// assert_relative_eq!(metric.rise, 50.0, epsilon = 1.0e-12);
    /// ```
    #[must_use]
    pub fn converted(self, from: UnitSystem, to: UnitSystem) -> Self {
        if from == to {
            return self;
        }
        let run = to.canonical_pitch_run();
        Self::new(self.rise / self.run * run, run)
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self::imperial(6.0)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.rise, self.run)
    }
}
