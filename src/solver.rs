//! Gable roof solver.
//!
//! The ridge height is anchored to the mean height of the two ridge-bearing walls
//! plus the rise the pitch produces over half the span. Each roof side then runs
//! from its own wall top to that ridge, so unequal walls or an offset ridge give
//! sides with different rises, rafter lengths and slopes while the nominal pitch
//! angle is still reported as entered.

use std::collections::HashSet;

use log::{debug, warn};

use crate::errors::ValidationError;
use crate::pitch::Pitch;
use crate::solution::{RidgeSolution, RoofSolution};
use crate::units::{to_large_unit, to_small_unit, UnitSystem};
use crate::wall::{Wall, WallPosition};

/// Run, rise, rafter and slope of one roof side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SideGeometry {
    /// Horizontal distance from the wall to the ridge.
    pub(crate) run: f64,
    /// Signed vertical distance from the wall top to the ridge.
    pub(crate) rise: f64,
    /// Hypotenuse of run and rise.
    pub(crate) rafter_length: f64,
    /// Slope in degrees, 90 for a collapsed run.
    pub(crate) angle: f64,
}

impl SideGeometry {
    /// Derive rafter length and slope from a run and rise.
    fn new(run: f64, rise: f64) -> Self {
        let angle = if run > 0.0 {
            rise.atan2(run).to_degrees()
        } else {
            90.0
        };
        Self {
            run,
            rise,
            rafter_length: run.hypot(rise),
            angle,
        }
    }
}

/// Intermediate result handed to [`RoofSolution::assemble`].
#[derive(Debug)]
pub(crate) struct SolvedRoof<'a> {
    /// Front (A) ridge-bearing wall.
    pub(crate) front: &'a Wall,
    /// Back (B) ridge-bearing wall.
    pub(crate) back: &'a Wall,
    /// Distance between the ridge-bearing walls.
    pub(crate) span: f64,
    /// Ridge length.
    pub(crate) width: f64,
    /// Half the span.
    pub(crate) base_run: f64,
    /// Nominal rise over `base_run`.
    pub(crate) base_rise: f64,
    /// Ridge position and height.
    pub(crate) ridge: RidgeSolution,
    /// Side rising from the front wall.
    pub(crate) front_side: SideGeometry,
    /// Side rising from the back wall.
    pub(crate) back_side: SideGeometry,
}

/// Validated view of the footprint.
#[derive(Debug)]
struct Footprint<'a> {
    /// Front (A) ridge-bearing wall.
    front: &'a Wall,
    /// Back (B) ridge-bearing wall.
    back: &'a Wall,
    /// Mean gable wall length.
    span: f64,
    /// Mean ridge-bearing wall length.
    width: f64,
}

/// Solve a gable roof over `walls`.
///
/// `walls` must contain exactly one [`WallPosition::Front`] and one
/// [`WallPosition::Back`] wall; the span is the mean length of the gable
/// ([`WallPosition::Left`] / [`WallPosition::Right`]) walls. All lengths, including
/// `ridge_offset`, are in the large unit of `units`. A positive `ridge_offset`
/// moves the ridge toward the back wall and lengthens the front side.
///
/// Degenerate configurations are reported numerically: an offset of half the span
/// or more collapses one side's run and that side is reported at 90 degrees, and a
/// ridge below a wall top yields a negative rise.
///
/// # Errors
///
/// Returns a [`ValidationError`] when wall identities or roles are inconsistent, the
/// span or a ridge-bearing wall length is not positive, the pitch rise is negative,
/// the pitch run is not positive, a wall height is negative or the ridge offset is
/// not finite. Infinite and NaN values fail the check they reach. Checks run in
/// that order and nothing is computed until all of them pass.
///
/// # Examples
/// ```
/// use approx::assert_relative_eq;
/// use gable_roof::{solve, Pitch, RoofDesign, UnitSystem};
///
/// let design = RoofDesign::rectangular(24.0, 36.0, 8.0, 8.0, Pitch::imperial(6.0), UnitSystem::Imperial);
/// let roof = solve(&design.walls, design.pitch, design.units, 0.0)?;
///
/// assert_relative_eq!(roof.ridge.height, 14.0);
/// assert_relative_eq!(roof.common_rafter_length, 13.416, epsilon = 1.0e-3);
/// # Ok::<(), gable_roof::ValidationError>(())
/// ```
pub fn solve(
    walls: &[Wall],
    pitch: Pitch,
    units: UnitSystem,
    ridge_offset: f64,
) -> Result<RoofSolution, ValidationError> {
    let footprint = validate(walls, pitch, ridge_offset).map_err(|error| {
        debug!("rejected roof input ({} field): {error}", error.field());
        error
    })?;
    let Footprint {
        front,
        back,
        span,
        width,
    } = footprint;

    let base_run = span / 2.0;
    let rise_small = to_small_unit(base_run, units) * pitch.rise / pitch.run;
    let base_rise = to_large_unit(rise_small, units);

    let ridge_height = (front.height + back.height) / 2.0 + base_rise;

    let front_side = SideGeometry::new(base_run + ridge_offset, ridge_height - front.height);
    let back_side = SideGeometry::new(base_run - ridge_offset, ridge_height - back.height);
    for (wall, side) in [(front, &front_side), (back, &back_side)] {
        if side.run <= 0.0 {
            warn!(
                "ridge offset {ridge_offset} leaves no run over wall {:?}; reporting it as vertical",
                wall.id
            );
        }
    }

    debug!(
        "solved {units} gable roof: span {span}, pitch {pitch}, ridge {ridge_height} at offset {ridge_offset}"
    );

    let solved = SolvedRoof {
        front,
        back,
        span,
        width,
        base_run,
        base_rise,
        ridge: RidgeSolution {
            offset: ridge_offset,
            height: ridge_height,
        },
        front_side,
        back_side,
    };
    Ok(RoofSolution::assemble(walls, pitch, units, &solved))
}

/// Check every precondition and locate the ridge-bearing walls.
fn validate(
    walls: &[Wall],
    pitch: Pitch,
    ridge_offset: f64,
) -> Result<Footprint<'_>, ValidationError> {
    let mut seen = HashSet::with_capacity(walls.len());
    for wall in walls {
        if !seen.insert(wall.id.as_str()) {
            return Err(ValidationError::DuplicateWallId {
                wall_id: wall.id.clone(),
            });
        }
    }

    let front = single_wall(walls, WallPosition::Front)?;
    let back = single_wall(walls, WallPosition::Back)?;

    let gables = walls.iter().filter(|wall| wall.position.is_gable());
    let span = mean_length(gables, |wall| ValidationError::NonPositiveSpan { span: wall.length })?;
    if !span.is_finite() || span <= 0.0 {
        return Err(ValidationError::NonPositiveSpan { span });
    }
    let width = mean_length([front, back].into_iter(), |wall| {
        ValidationError::NonPositiveWidth {
            wall_id: wall.id.clone(),
            length: wall.length,
        }
    })?;

    if !pitch.rise.is_finite() || pitch.rise < 0.0 {
        return Err(ValidationError::NegativePitchRise { rise: pitch.rise });
    }
    if !pitch.run.is_finite() || pitch.run <= 0.0 {
        return Err(ValidationError::NonPositivePitchRun { run: pitch.run });
    }

    if let Some(wall) = walls
        .iter()
        .find(|wall| !wall.height.is_finite() || wall.height < 0.0)
    {
        return Err(ValidationError::NegativeWallHeight {
            wall_id: wall.id.clone(),
            height: wall.height,
        });
    }

    if !ridge_offset.is_finite() {
        return Err(ValidationError::NonFiniteRidgeOffset {
            offset: ridge_offset,
        });
    }

    Ok(Footprint {
        front,
        back,
        span,
        width,
    })
}

/// Return the only wall in `position`.
fn single_wall(walls: &[Wall], position: WallPosition) -> Result<&Wall, ValidationError> {
    let mut matching = walls.iter().filter(|wall| wall.position == position);
    match (matching.next(), matching.count()) {
        (Some(wall), 0) => Ok(wall),
        (first, rest) => Err(ValidationError::RidgeWallCount {
            position,
            found: usize::from(first.is_some()) + rest,
        }),
    }
}

/// Mean length of `walls`, 0 when there are none.
///
/// Every wall must have a finite, positive length; the first one that does not is
/// reported through `reject`.
fn mean_length<'a>(
    walls: impl Iterator<Item = &'a Wall>,
    reject: impl Fn(&Wall) -> ValidationError,
) -> Result<f64, ValidationError> {
    let mut total = 0.0;
    let mut count = 0_u32;
    for wall in walls {
        if !wall.length.is_finite() || wall.length <= 0.0 {
            return Err(reject(wall));
        }
        total += wall.length;
        count += 1;
    }
    Ok(if count == 0 {
        0.0
    } else {
        total / f64::from(count)
    })
}
