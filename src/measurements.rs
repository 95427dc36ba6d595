//! Surface areas and overall dimensions of a solved roof.

use serde::{Deserialize, Serialize};

use crate::geometry::{RoofFrame, Surface, SurfaceKind};
use crate::solution::RoofSolution;

/// Area of one named surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceArea {
    /// Identifier of the wall or roof side.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Area in square large units.
    pub area: f64,
}

/// Building dimensions and surface areas derived from a [`RoofSolution`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoofMeasurements {
    /// Distance between the front and back walls.
    pub span: f64,
    /// Length of the ridge.
    pub width: f64,
    /// Highest point of the building.
    pub max_height: f64,
    /// One entry per laid-out wall, gable walls including their triangular part.
    pub wall_areas: Vec<SurfaceArea>,
    /// One entry per roof side.
    pub roof_areas: Vec<SurfaceArea>,
    /// Sum of `wall_areas`.
    pub total_wall_area: f64,
    /// Sum of `roof_areas`.
    pub total_roof_area: f64,
    /// Area enclosed by the footprint.
    pub floor_area: f64,
}

/// Measure the walls and roof planes of a solution.
///
/// # Examples
/// ```
/// use approx::assert_relative_eq;
/// use gable_roof::{measure, RoofDesign};
///
/// let solution = RoofDesign::default().solve()?;
/// let measurements = measure(&solution);
/// assert_relative_eq!(measurements.floor_area, 24.0 * 36.0);
/// # Ok::<(), gable_roof::ValidationError>(())
/// ```
#[must_use]
pub fn measure(solution: &RoofSolution) -> RoofMeasurements {
    let frame = RoofFrame::from_solution(solution);
    let areas = |kind| -> Vec<SurfaceArea> {
        frame.surfaces_of(kind).map(SurfaceArea::from).collect()
    };
    let wall_areas = areas(SurfaceKind::Wall);
    let roof_areas = areas(SurfaceKind::Roof);

    let max_height = solution
        .walls
        .iter()
        .map(|wall| wall.height)
        .fold(solution.ridge.height, f64::max);

    RoofMeasurements {
        span: solution.span,
        width: solution.width,
        max_height,
        total_wall_area: wall_areas.iter().map(|entry| entry.area).sum(),
        total_roof_area: roof_areas.iter().map(|entry| entry.area).sum(),
        wall_areas,
        roof_areas,
        floor_area: solution.span * solution.width,
    }
}

impl From<&Surface> for SurfaceArea {
    fn from(surface: &Surface) -> Self {
        Self {
            id: surface.id.clone(),
            name: surface.name.clone(),
            area: surface.area(),
        }
    }
}
