//! Error types produced while solving or editing a roof design.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wall::WallPosition;

/// Input field a [`ValidationError`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The wall collection itself (identity or ridge-bearing roles).
    Walls,
    /// Distance between the ridge-bearing walls.
    Span,
    /// Length of a ridge-bearing wall.
    Width,
    /// Pitch numerator.
    PitchRise,
    /// Pitch denominator.
    PitchRun,
    /// Height of one of the walls.
    WallHeight,
    /// Ridge displacement from the centerline.
    RidgeOffset,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Walls => "walls",
            Self::Span => "span",
            Self::Width => "width",
            Self::PitchRise => "pitchRise",
            Self::PitchRun => "pitchRun",
            Self::WallHeight => "wallHeight",
            Self::RidgeOffset => "ridgeOffset",
        };
        f.write_str(name)
    }
}

/// Error returned when the solver inputs violate a precondition.
///
/// All checks run before any geometry is computed, so a failed solve never yields
/// a partial result. Use [`ValidationError::field`] to find which input to correct.
///
/// # Examples
///
/// ```
/// use gable_roof::{solve, Field, Pitch, RoofDesign, UnitSystem};
///
/// let design = RoofDesign::default();
/// let error = solve(&design.walls, Pitch::new(6.0, 0.0), UnitSystem::Imperial, 0.0)
///     .expect_err("zero run is rejected");
/// assert_eq!(error.field(), Field::PitchRun);
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Returned when two walls share an identifier.
    #[error("wall id {wall_id:?} is used more than once")]
    DuplicateWallId {
        /// The repeated identifier.
        wall_id: String,
    },
    /// Returned when there is not exactly one wall in a ridge-bearing position.
    #[error("expected exactly one {position} wall, found {found}")]
    RidgeWallCount {
        /// Ridge-bearing position that is missing or repeated.
        position: WallPosition,
        /// Number of walls found in that position.
        found: usize,
    },
    /// Returned when the span between the ridge-bearing walls is not strictly positive.
    #[error("span must be positive and finite (received {span})")]
    NonPositiveSpan {
        /// Rejected span, or the offending gable wall length.
        span: f64,
    },
    /// Returned when a ridge-bearing wall has no positive, finite length.
    #[error("wall {wall_id:?} length must be positive and finite (received {length})")]
    NonPositiveWidth {
        /// Identifier of the offending wall.
        wall_id: String,
        /// Rejected length.
        length: f64,
    },
    /// Returned when the pitch rise is negative or not finite.
    #[error("pitch rise must be non-negative and finite (received {rise})")]
    NegativePitchRise {
        /// Rejected rise.
        rise: f64,
    },
    /// Returned when the pitch run is zero, negative or not finite.
    #[error("pitch run must be positive and finite (received {run})")]
    NonPositivePitchRun {
        /// Rejected run.
        run: f64,
    },
    /// Returned when a wall height is negative or not finite.
    #[error("wall {wall_id:?} height must be non-negative and finite (received {height})")]
    NegativeWallHeight {
        /// Identifier of the offending wall.
        wall_id: String,
        /// Rejected height.
        height: f64,
    },
    /// Returned when the ridge offset is NaN or infinite.
    #[error("ridge offset must be finite (received {offset})")]
    NonFiniteRidgeOffset {
        /// Rejected offset.
        offset: f64,
    },
}

impl ValidationError {
    /// Input field that failed validation.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::DuplicateWallId { .. } | Self::RidgeWallCount { .. } => Field::Walls,
            Self::NonPositiveSpan { .. } => Field::Span,
            Self::NonPositiveWidth { .. } => Field::Width,
            Self::NegativePitchRise { .. } => Field::PitchRise,
            Self::NonPositivePitchRun { .. } => Field::PitchRun,
            Self::NegativeWallHeight { .. } => Field::WallHeight,
            Self::NonFiniteRidgeOffset { .. } => Field::RidgeOffset,
        }
    }
}

/// Error returned when a wall edit carries a value that is not physically meaningful.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WallPropertyError {
    /// Returned when the height is negative or not finite.
    #[error("height must be a non-negative number (received {height})")]
    InvalidHeight {
        /// Identifier of the affected wall.
        wall_id: String,
        /// Rejected height.
        height: f64,
    },
    /// Returned when the length is negative or not finite.
    #[error("length must be a non-negative number (received {length})")]
    InvalidLength {
        /// Identifier of the affected wall.
        wall_id: String,
        /// Rejected length.
        length: f64,
    },
}

/// Error returned when editing a [`RoofDesign`](crate::RoofDesign).
///
/// # Examples
///
/// ```
/// use gable_roof::{DesignEditError, RoofDesign, WallUpdate};
///
/// let mut design = RoofDesign::default();
/// let error = design
///     .update_wall("garage", &WallUpdate::height(9.0))
///     .expect_err("unknown wall is rejected");
/// assert_eq!(error, DesignEditError::UnknownWall("garage".to_string()));
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DesignEditError {
    /// Returned when no wall has the given identifier.
    #[error("wall {0:?} does not exist in this design")]
    UnknownWall(String),
    /// Returned when adding a wall whose identifier is already taken.
    #[error("wall {0:?} already exists in this design")]
    DuplicateWall(String),
    /// Returned when the supplied wall properties are invalid.
    #[error("{0}")]
    InvalidWallProperty(#[from] WallPropertyError),
}
