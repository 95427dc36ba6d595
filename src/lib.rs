#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod design;
pub mod errors;
pub mod geometry;
pub mod measurements;
pub mod pitch;
pub mod solution;
pub mod solver;
pub mod units;
pub mod wall;

pub use crate::design::RoofDesign;
pub use crate::errors::{DesignEditError, Field, ValidationError, WallPropertyError};
pub use crate::geometry::{polygon_area, Corners, RoofFrame, Surface, SurfaceKind};
pub use crate::measurements::{measure, RoofMeasurements, SurfaceArea};
pub use crate::pitch::Pitch;
pub use crate::solution::{RidgeSolution, RoofSide, RoofSolution};
pub use crate::solver::solve;
pub use crate::units::{convert_length, to_large_unit, to_small_unit, UnitSystem};
pub use crate::wall::{Wall, WallPosition, WallUpdate};
