//! Three dimensional frame of a solved roof.
//!
//! Coordinates are right-handed with `y` pointing up and measured in the
//! solution's large unit. The front wall sits at `x = -span / 2`, the back wall at
//! `x = +span / 2`, and the ridge runs along `z` between the gable walls at
//! `z = -width / 2` (left) and `z = +width / 2` (right).

use std::collections::HashSet;

use log::debug;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::solution::RoofSolution;
use crate::wall::{Wall, WallPosition};

/// The four corners of the footprint at one height level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corners {
    /// Where the front wall meets the left gable.
    pub front_left: Point3<f64>,
    /// Where the front wall meets the right gable.
    pub front_right: Point3<f64>,
    /// Where the back wall meets the left gable.
    pub back_left: Point3<f64>,
    /// Where the back wall meets the right gable.
    pub back_right: Point3<f64>,
}

/// What a [`Surface`] represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// A wall face, rectangular or gable-shaped.
    Wall,
    /// A roof plane between a wall top and the ridge.
    Roof,
}

/// Planar polygon with an identity, ready to be drawn or measured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Identifier of the wall or roof side this surface belongs to.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Wall or roof.
    pub kind: SurfaceKind,
    /// Boundary in order, without repeating the first vertex.
    pub vertices: Vec<Point3<f64>>,
}

impl Surface {
    /// Area of the surface.
    #[must_use]
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    /// Mean of the vertices.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        if self.vertices.is_empty() {
            return Point3::origin();
        }
        let sum: Vector3<f64> = self.vertices.iter().map(|vertex| vertex.coords).sum();
        Point3::from(sum / self.vertices.len() as f64)
    }

    /// Vertical extent of the surface.
    #[must_use]
    pub fn height(&self) -> f64 {
        let (low, high) = self
            .vertices
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), vertex| {
                (low.min(vertex.y), high.max(vertex.y))
            });
        if self.vertices.is_empty() {
            0.0
        } else {
            high - low
        }
    }

    /// Angle between the surface plane and the horizontal, in degrees.
    ///
    /// Walls report 90 and flat roof planes 0. Degenerate outlines report 0.
    #[must_use]
    pub fn slope_degrees(&self) -> f64 {
        let normal = vector_area(&self.vertices);
        let length = normal.norm();
        if length == 0.0 {
            return 0.0;
        }
        (normal.y.abs() / length).clamp(0.0, 1.0).acos().to_degrees()
    }

    /// Boundary segments, closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        let next = self.vertices.iter().cycle().skip(1);
        self.vertices.iter().copied().zip(next.copied())
    }
}

/// Points and surfaces describing the walls and roof of a solution.
///
/// Only the first wall in each [`WallPosition`] is laid out; further walls in an
/// occupied position contribute to the span or width average but get no surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoofFrame {
    /// Footprint corners at ground level.
    pub ground: Corners,
    /// Wall tops; front corners at the front wall height, back corners at the back
    /// wall height.
    pub tops: Corners,
    /// Ridge end above the left gable.
    pub ridge_start: Point3<f64>,
    /// Ridge end above the right gable.
    pub ridge_end: Point3<f64>,
    /// One surface per wall position followed by one per roof side.
    pub surfaces: Vec<Surface>,
}

impl RoofFrame {
    /// Lay out a solved roof in space.
    ///
    /// # Examples
    /// ```
    /// use gable_roof::{RoofDesign, RoofFrame};
    ///
    /// let solution = RoofDesign::default().solve()?;
    /// let frame = RoofFrame::from_solution(&solution);
    /// assert_eq!(frame.ridge_start.y, solution.ridge.height);
    /// assert_eq!(frame.surfaces.len(), 6);
    /// # Ok::<(), gable_roof::ValidationError>(())
    /// ```
    #[must_use]
    pub fn from_solution(solution: &RoofSolution) -> Self {
        let half_span = solution.span / 2.0;
        let half_width = solution.width / 2.0;
        let height_at = |position| solution.wall_at(position).map_or(0.0, |wall| wall.height);
        let front_height = height_at(WallPosition::Front);
        let back_height = height_at(WallPosition::Back);

        let corners = |front_y: f64, back_y: f64| Corners {
            front_left: Point3::new(-half_span, front_y, -half_width),
            front_right: Point3::new(-half_span, front_y, half_width),
            back_left: Point3::new(half_span, back_y, -half_width),
            back_right: Point3::new(half_span, back_y, half_width),
        };
        let ground = corners(0.0, 0.0);
        let tops = corners(front_height, back_height);
        let ridge_start = Point3::new(solution.ridge.offset, solution.ridge.height, -half_width);
        let ridge_end = Point3::new(solution.ridge.offset, solution.ridge.height, half_width);

        let mut frame = Self {
            ground,
            tops,
            ridge_start,
            ridge_end,
            surfaces: Vec::with_capacity(solution.walls.len() + solution.roof_sides.len()),
        };
        let mut laid_out = HashSet::new();
        for wall in &solution.walls {
            if !laid_out.insert(wall.position) {
                debug!("wall {:?} shares the {} position and is not laid out", wall.id, wall.position);
                continue;
            }
            let surface = frame.wall_surface(wall);
            frame.surfaces.push(surface);
        }
        for side in &solution.roof_sides {
            let vertices = match solution.wall_at(WallPosition::Front) {
                Some(front) if front.id == side.attached_wall_id => vec![
                    tops.front_left,
                    tops.front_right,
                    ridge_end,
                    ridge_start,
                ],
                _ => vec![tops.back_right, tops.back_left, ridge_start, ridge_end],
            };
            frame.surfaces.push(Surface {
                id: side.id.clone(),
                name: side.name.clone(),
                kind: SurfaceKind::Roof,
                vertices,
            });
        }
        frame
    }

    /// Wall face for `wall`; gable walls reach up to the ridge.
    fn wall_surface(&self, wall: &Wall) -> Surface {
        let (ground, tops) = (&self.ground, &self.tops);
        let vertices = match wall.position {
            WallPosition::Front => vec![
                ground.front_left,
                ground.front_right,
                tops.front_right,
                tops.front_left,
            ],
            WallPosition::Back => vec![
                ground.back_right,
                ground.back_left,
                tops.back_left,
                tops.back_right,
            ],
            WallPosition::Left => vec![
                ground.front_left,
                tops.front_left,
                self.ridge_start,
                tops.back_left,
                ground.back_left,
            ],
            WallPosition::Right => vec![
                ground.back_right,
                tops.back_right,
                self.ridge_end,
                tops.front_right,
                ground.front_right,
            ],
        };
        Surface {
            id: wall.id.clone(),
            name: wall.name.clone(),
            kind: SurfaceKind::Wall,
            vertices,
        }
    }

    /// Surfaces of one kind.
    pub fn surfaces_of(&self, kind: SurfaceKind) -> impl Iterator<Item = &Surface> {
        self.surfaces
            .iter()
            .filter(move |surface| surface.kind == kind)
    }
}

/// Area of a planar polygon given by its boundary.
///
/// Uses the vector area (Newell's method), so non-convex outlines are measured
/// exactly. Fewer than three vertices have no area.
///
/// # Examples
/// ```
/// use gable_roof::polygon_area;
/// use nalgebra::Point3;
///
/// let square = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 2.0),
///     Point3::new(0.0, 0.0, 2.0),
/// ];
/// assert_eq!(polygon_area(&square), 4.0);
/// ```
#[must_use]
pub fn polygon_area(vertices: &[Point3<f64>]) -> f64 {
    vector_area(vertices).norm() / 2.0
}

/// Twice the vector area of a closed polygon; zero below three vertices.
fn vector_area(vertices: &[Point3<f64>]) -> Vector3<f64> {
    if vertices.len() < 3 {
        return Vector3::zeros();
    }
    let next = vertices.iter().cycle().skip(1);
    vertices
        .iter()
        .zip(next)
        .map(|(a, b)| a.coords.cross(&b.coords))
        .sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{solve, Pitch, RoofDesign, UnitSystem};

    #[test]
    fn ridge_sits_over_offset_position() {
        let design = RoofDesign::default();
        let solution = solve(&design.walls, Pitch::imperial(6.0), UnitSystem::Imperial, 3.0)
            .expect("valid roof");
        let frame = RoofFrame::from_solution(&solution);

        assert_eq!(frame.ridge_start.x, 3.0);
        assert_eq!(frame.ridge_end.x, 3.0);
        assert_eq!(frame.ridge_start.z, -18.0);
        assert_eq!(frame.ridge_end.z, 18.0);

        let front_run = frame.ridge_start.x - frame.tops.front_left.x;
        assert_relative_eq!(front_run, solution.front().horizontal_run);
        let back_run = frame.tops.back_left.x - frame.ridge_start.x;
        assert_relative_eq!(back_run, solution.back().horizontal_run);
    }

    #[test]
    fn roof_plane_edges_match_rafters() {
        let design = RoofDesign::rectangular(20.0, 30.0, 8.0, 10.0, Pitch::imperial(6.0), UnitSystem::Imperial);
        let solution = design.solve().expect("valid roof");
        let frame = RoofFrame::from_solution(&solution);

        let rafter = |surface: &Surface| {
            let (top, ridge) = (surface.vertices[0], surface.vertices[3]);
            (ridge - top).norm()
        };
        let roofs: Vec<&Surface> = frame.surfaces_of(SurfaceKind::Roof).collect();
        assert_eq!(roofs.len(), 2);
        assert_eq!(roofs[0].id, "front-roof");
        assert_relative_eq!(rafter(roofs[0]), solution.front().rafter_length, epsilon = 1.0e-12);
        assert_relative_eq!(rafter(roofs[1]), solution.back().rafter_length, epsilon = 1.0e-12);
    }

    #[test]
    fn gable_walls_reach_the_ridge() {
        let frame = RoofFrame::from_solution(&RoofDesign::default().solve().expect("valid roof"));
        let left = frame
            .surfaces_of(SurfaceKind::Wall)
            .find(|surface| surface.id == "left")
            .expect("left gable present");
        assert_eq!(left.vertices.len(), 5);
        assert!(left.vertices.contains(&frame.ridge_start));
        assert_eq!(left.edges().count(), 5);
    }

    #[test]
    fn extra_wall_in_a_position_gets_no_surface() {
        let mut design = RoofDesign::default();
        design
            .add_wall(Wall::new("annex", "Annex Gable", 8.0, 24.0, WallPosition::Left))
            .expect("new gable accepted");
        let frame = RoofFrame::from_solution(&design.solve().expect("valid roof"));

        assert_eq!(frame.surfaces_of(SurfaceKind::Wall).count(), 4);
        assert!(frame.surfaces.iter().all(|surface| surface.id != "annex"));
    }

    #[test]
    fn surfaces_report_centroid_height_and_slope() {
        let solution = RoofDesign::default().solve().expect("valid roof");
        let frame = RoofFrame::from_solution(&solution);
        let surface = |id: &str| {
            frame
                .surfaces
                .iter()
                .find(|surface| surface.id == id)
                .expect("surface present")
        };

        let front = surface("front");
        assert_eq!(front.centroid(), Point3::new(-12.0, 4.0, 0.0));
        assert_eq!(front.height(), 8.0);
        assert_relative_eq!(front.slope_degrees(), 90.0, epsilon = 1.0e-9);

        let roof = surface("front-roof");
        assert_eq!(roof.centroid(), Point3::new(-6.0, 11.0, 0.0));
        assert_eq!(roof.height(), 6.0);
        assert_relative_eq!(roof.slope_degrees(), solution.front().angle, epsilon = 1.0e-9);
    }

    #[test]
    fn polygon_area_handles_non_convex_outline() {
        let l_shape = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ];
        assert_relative_eq!(polygon_area(&l_shape), 3.0, epsilon = 1.0e-12);
        assert_eq!(polygon_area(&l_shape[..2]), 0.0);
    }
}
