//! Editable roof design state.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{DesignEditError, ValidationError, WallPropertyError};
use crate::measurements::{measure, RoofMeasurements};
use crate::pitch::Pitch;
use crate::solution::RoofSolution;
use crate::solver::solve;
use crate::units::{convert_length, UnitSystem};
use crate::wall::{Wall, WallPosition, WallUpdate};

/// Walls, pitch, unit system and ridge offset as edited by a user.
///
/// The design is plain data; [`RoofDesign::solve`] hands it to the stateless
/// [`solve`] function each time. Editing methods reject unknown wall ids and
/// values that can never be valid, while cross-field checks such as the number of
/// ridge-bearing walls are left to the solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoofDesign {
    /// Walls of the building.
    pub walls: Vec<Wall>,
    /// Roof pitch.
    pub pitch: Pitch,
    /// Unit system of every length in the design.
    pub units: UnitSystem,
    /// Ridge displacement from the centerline, positive toward the back wall.
    #[serde(default)]
    pub ridge_offset: f64,
}

impl Default for RoofDesign {
    fn default() -> Self {
        Self::rectangular(24.0, 36.0, 8.0, 8.0, Pitch::default(), UnitSystem::Imperial)
    }
}

impl RoofDesign {
    /// Rectangular four-wall building with a centred ridge.
    ///
    /// `span` is the length of the gable walls and `width` the length of the front
    /// and back walls. The gable walls take the lower of the two wall heights.
    ///
    /// # Examples
    /// ```
    /// use gable_roof::{Pitch, RoofDesign, UnitSystem, WallPosition};
    ///
    /// let design = RoofDesign::rectangular(7.32, 10.0, 2.4, 2.4, Pitch::metric(50.0), UnitSystem::Metric);
    /// assert_eq!(design.walls.len(), 4);
    /// assert_eq!(design.walls[2].position, WallPosition::Left);
    /// ```
    #[must_use]
    pub fn rectangular(
        span: f64,
        width: f64,
        front_height: f64,
        back_height: f64,
        pitch: Pitch,
        units: UnitSystem,
    ) -> Self {
        let gable_height = front_height.min(back_height);
        Self {
            walls: vec![
                Wall::new("front", "Front Wall", front_height, width, WallPosition::Front),
                Wall::new("back", "Back Wall", back_height, width, WallPosition::Back),
                Wall::new("left", "Left Wall", gable_height, span, WallPosition::Left),
                Wall::new("right", "Right Wall", gable_height, span, WallPosition::Right),
            ],
            pitch,
            units,
            ridge_offset: 0.0,
        }
    }

    /// Look up a wall by identifier.
    #[must_use]
    pub fn wall(&self, wall_id: &str) -> Option<&Wall> {
        self.walls.iter().find(|wall| wall.id == wall_id)
    }

    /// Add a wall.
    ///
    /// # Errors
    ///
    /// Returns [`DesignEditError::DuplicateWall`] when the id is taken and
    /// [`DesignEditError::InvalidWallProperty`] for a negative or non-finite height
    /// or length.
    pub fn add_wall(&mut self, wall: Wall) -> Result<(), DesignEditError> {
        if self.wall(&wall.id).is_some() {
            return Err(DesignEditError::DuplicateWall(wall.id));
        }
        check_dimension(&wall.id, Some(wall.height), Some(wall.length))?;
        self.walls.push(wall);
        Ok(())
    }

    /// Remove a wall and return it.
    ///
    /// # Errors
    ///
    /// Returns [`DesignEditError::UnknownWall`] when no wall has `wall_id`.
    pub fn remove_wall(&mut self, wall_id: &str) -> Result<Wall, DesignEditError> {
        let index = self.wall_index(wall_id)?;
        Ok(self.walls.remove(index))
    }

    /// Apply a partial edit to one wall.
    ///
    /// # Errors
    ///
    /// Returns [`DesignEditError::UnknownWall`] when no wall has `wall_id` and
    /// [`DesignEditError::InvalidWallProperty`] when the new height or length is
    /// negative or not finite. A rejected edit leaves the wall unchanged.
    ///
    /// # Examples
    /// ```
    /// use gable_roof::{RoofDesign, WallUpdate};
    ///
    /// let mut design = RoofDesign::default();
    /// design.update_wall("back", &WallUpdate::height(10.0))?;
    /// let roof = design.solve()?;
    /// assert_eq!(roof.ridge.height, 15.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn update_wall(&mut self, wall_id: &str, update: &WallUpdate) -> Result<(), DesignEditError> {
        let index = self.wall_index(wall_id)?;
        check_dimension(wall_id, update.height, update.length)?;
        self.walls[index].apply(update);
        Ok(())
    }

    /// Replace the pitch.
    pub fn set_pitch(&mut self, pitch: Pitch) {
        self.pitch = pitch;
    }

    /// Move the ridge; positive values move it toward the back wall.
    pub fn set_ridge_offset(&mut self, ridge_offset: f64) {
        self.ridge_offset = ridge_offset;
    }

    /// Switch unit system, converting every stored length and the pitch first.
    ///
    /// The pitch run becomes the new system's conventional run with the rise scaled
    /// to keep the slope, so re-solving yields the same roof in the new units.
    pub fn set_units(&mut self, units: UnitSystem) {
        let from = self.units;
        if from == units {
            return;
        }
        debug!("converting roof design from {from} to {units}");
        for wall in &mut self.walls {
            *wall = wall.converted(from, units);
        }
        self.pitch = self.pitch.converted(from, units);
        self.ridge_offset = convert_length(self.ridge_offset, from, units);
        self.units = units;
    }

    /// Solve the current design.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] reported by [`solve`].
    pub fn solve(&self) -> Result<RoofSolution, ValidationError> {
        solve(&self.walls, self.pitch, self.units, self.ridge_offset)
    }

    /// Solve the current design and measure its surfaces.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] reported by [`solve`].
    pub fn measure(&self) -> Result<RoofMeasurements, ValidationError> {
        self.solve().map(|solution| measure(&solution))
    }

    /// Position of a wall in `walls`.
    fn wall_index(&self, wall_id: &str) -> Result<usize, DesignEditError> {
        self.walls
            .iter()
            .position(|wall| wall.id == wall_id)
            .ok_or_else(|| DesignEditError::UnknownWall(wall_id.to_string()))
    }
}

/// Reject negative or non-finite wall dimensions.
fn check_dimension(
    wall_id: &str,
    height: Option<f64>,
    length: Option<f64>,
) -> Result<(), WallPropertyError> {
    let invalid = |value: f64| !value.is_finite() || value < 0.0;
    if let Some(height) = height.filter(|&height| invalid(height)) {
        return Err(WallPropertyError::InvalidHeight {
            wall_id: wall_id.to_string(),
            height,
        });
    }
    if let Some(length) = length.filter(|&length| invalid(length)) {
        return Err(WallPropertyError::InvalidLength {
            wall_id: wall_id.to_string(),
            length,
        });
    }
    Ok(())
}
