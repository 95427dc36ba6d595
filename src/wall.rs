//! Straight wall segments making up the building footprint.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::{convert_length, UnitSystem};

/// Role a wall plays in a gable-roofed footprint.
///
/// The ridge runs parallel to the two ridge-bearing walls, [`WallPosition::Front`]
/// (wall A) and [`WallPosition::Back`] (wall B). A positive ridge offset moves the
/// ridge toward the back wall, which lengthens the front roof side. The two gable
/// walls, [`WallPosition::Left`] and [`WallPosition::Right`], close the footprint
/// at each end of the ridge and their length is the span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallPosition {
    /// Ridge-bearing wall A.
    Front,
    /// Ridge-bearing wall B; positive ridge offsets move toward it.
    Back,
    /// Gable wall at the start of the ridge.
    Left,
    /// Gable wall at the end of the ridge.
    Right,
}

impl WallPosition {
    /// Whether a roof side rises from walls in this position.
    #[must_use]
    pub const fn is_ridge_bearing(self) -> bool {
        matches!(self, Self::Front | Self::Back)
    }

    /// Whether walls in this position close the footprint under a gable end.
    #[must_use]
    pub const fn is_gable(self) -> bool {
        !self.is_ridge_bearing()
    }
}

impl fmt::Display for WallPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(label)
    }
}

/// A straight vertical wall.
///
/// Height and length are in the large unit of whichever [`UnitSystem`] the wall is
/// solved under. The engine only reads walls; editing happens through
/// [`RoofDesign`](crate::RoofDesign) or directly on the fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Identifier unique within a building.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Height of the wall top above the base datum.
    pub height: f64,
    /// Length along the footprint.
    pub length: f64,
    /// Role of the wall in the footprint.
    pub position: WallPosition,
}

impl Wall {
    /// Create a wall.
    ///
    /// # Examples
    /// ```
    /// use gable_roof::{Wall, WallPosition};
    ///
    /// let wall = Wall::new("front", "Front Wall", 8.0, 36.0, WallPosition::Front);
    /// assert!(wall.is_ridge_bearing());
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        height: f64,
        length: f64,
        position: WallPosition,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            height,
            length,
            position,
        }
    }

    /// Whether a roof side rises from this wall.
    #[must_use]
    pub const fn is_ridge_bearing(&self) -> bool {
        self.position.is_ridge_bearing()
    }

    /// Return a copy with height and length converted between unit systems.
    #[must_use]
    pub fn converted(&self, from: UnitSystem, to: UnitSystem) -> Self {
        Self {
            height: convert_length(self.height, from, to),
            length: convert_length(self.length, from, to),
            ..self.clone()
        }
    }

    /// Apply a partial update. Fields left as `None` are unchanged.
    pub fn apply(&mut self, update: &WallUpdate) {
        if let Some(name) = &update.name {
            self.name.clone_from(name);
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        if let Some(length) = update.length {
            self.length = length;
        }
    }
}

/// Partial edit of a [`Wall`], as produced by a form changing one field at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WallUpdate {
    /// New display label.
    pub name: Option<String>,
    /// New height.
    pub height: Option<f64>,
    /// New length.
    pub length: Option<f64>,
}

impl WallUpdate {
    /// Update only the height.
    #[must_use]
    pub fn height(height: f64) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    /// Update only the length.
    #[must_use]
    pub fn length(length: f64) -> Self {
        Self {
            length: Some(length),
            ..Self::default()
        }
    }

    /// Update only the name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
