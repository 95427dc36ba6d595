//! Display- and render-ready roof solutions.

use serde::{Deserialize, Serialize};

use crate::pitch::Pitch;
use crate::solver::{SideGeometry, SolvedRoof};
use crate::units::UnitSystem;
use crate::wall::{Wall, WallPosition};

/// Horizontal position and absolute height of the ridge line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RidgeSolution {
    /// Displacement from the footprint centerline; positive is toward the back wall.
    pub offset: f64,
    /// Height of the ridge above the wall-base datum.
    pub height: f64,
}

/// Geometry of the roof plane rising from one ridge-bearing wall.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoofSide {
    /// Identifier derived from the attached wall.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Wall this side rises from.
    pub attached_wall_id: String,
    /// Horizontal distance from the wall to the ridge.
    pub horizontal_run: f64,
    /// Vertical distance from the wall top to the ridge; negative when the ridge
    /// sits below the wall top.
    pub vertical_rise: f64,
    /// Length of the rafter from wall top to ridge.
    pub rafter_length: f64,
    /// Slope from horizontal in degrees; 90 when the run has collapsed.
    pub angle: f64,
}

/// Complete solution for a gable roof.
///
/// Inputs needed for unit-aware display are echoed back so consumers can format or
/// render without re-deriving anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoofSolution {
    /// Unit system of every length in this solution.
    pub units: UnitSystem,
    /// Pitch the roof was solved for.
    pub pitch: Pitch,
    /// Walls the roof was solved for.
    pub walls: Vec<Wall>,
    /// Distance between the front and back walls.
    pub span: f64,
    /// Length of the ridge, taken from the ridge-bearing walls.
    pub width: f64,
    /// Half the span.
    pub base_run: f64,
    /// Rise of the nominal pitch over `base_run`.
    pub base_rise: f64,
    /// Ridge position and height.
    pub ridge: RidgeSolution,
    /// Front side followed by back side.
    pub roof_sides: [RoofSide; 2],
    /// Rafter length of the symmetric roof with the same span and pitch.
    pub common_rafter_length: f64,
    /// Nominal pitch angle in degrees.
    pub pitch_angle: f64,
    /// Pitch label such as `6/12`.
    pub pitch_ratio: String,
}

impl RoofSolution {
    /// Package solver output together with the inputs it was computed from.
    pub(crate) fn assemble(
        walls: &[Wall],
        pitch: Pitch,
        units: UnitSystem,
        solved: &SolvedRoof<'_>,
    ) -> Self {
        let side = |wall: &Wall, geometry: &SideGeometry| RoofSide {
            id: format!("{}-roof", wall.id),
            name: side_name(wall.position).to_string(),
            attached_wall_id: wall.id.clone(),
            horizontal_run: geometry.run,
            vertical_rise: geometry.rise,
            rafter_length: geometry.rafter_length,
            angle: geometry.angle,
        };
        let roof_sides = [
            side(solved.front, &solved.front_side),
            side(solved.back, &solved.back_side),
        ];

        Self {
            units,
            pitch,
            walls: walls.to_vec(),
            span: solved.span,
            width: solved.width,
            base_run: solved.base_run,
            base_rise: solved.base_rise,
            ridge: solved.ridge,
            roof_sides,
            common_rafter_length: solved.base_run.hypot(solved.base_rise),
            pitch_angle: pitch.angle_degrees(),
            pitch_ratio: pitch.to_string(),
        }
    }

    /// Roof side rising from the front wall.
    #[must_use]
    pub fn front(&self) -> &RoofSide {
        &self.roof_sides[0]
    }

    /// Roof side rising from the back wall.
    #[must_use]
    pub fn back(&self) -> &RoofSide {
        &self.roof_sides[1]
    }

    /// Roof side attached to the wall with the given identifier.
    #[must_use]
    pub fn side_for_wall(&self, wall_id: &str) -> Option<&RoofSide> {
        self.roof_sides
            .iter()
            .find(|side| side.attached_wall_id == wall_id)
    }

    /// First wall in the given position.
    #[must_use]
    pub fn wall_at(&self, position: WallPosition) -> Option<&Wall> {
        self.walls.iter().find(|wall| wall.position == position)
    }

    /// Whether both roof sides match within `tolerance`.
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let (front, back) = (self.front(), self.back());
        (front.horizontal_run - back.horizontal_run).abs() <= tolerance
            && (front.vertical_rise - back.vertical_rise).abs() <= tolerance
            && (front.rafter_length - back.rafter_length).abs() <= tolerance
            && (front.angle - back.angle).abs() <= tolerance
    }
}

/// Display label of the roof side above a ridge-bearing wall.
fn side_name(position: WallPosition) -> &'static str {
    match position {
        WallPosition::Front => "Front Roof",
        WallPosition::Back => "Back Roof",
        WallPosition::Left => "Left Roof",
        WallPosition::Right => "Right Roof",
    }
}
