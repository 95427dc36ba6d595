//! Invariants checked over sweeps of valid inputs.

use approx::assert_relative_eq;
use gable_roof::{solve, Pitch, RoofDesign, RoofSolution, UnitSystem, Wall};

const SPANS: [f64; 4] = [6.0, 20.0, 24.0, 37.5];
const RISES: [f64; 5] = [0.0, 1.0, 4.5, 12.0, 24.0];
const HEIGHTS: [(f64, f64); 4] = [(8.0, 8.0), (8.0, 10.0), (12.0, 7.5), (0.0, 3.0)];
const OFFSET_FRACTIONS: [f64; 5] = [-0.75, -0.2, 0.0, 0.4, 1.0];

/// Every combination of span, pitch rise, wall heights and ridge offset.
fn sweep() -> impl Iterator<Item = (Vec<Wall>, Pitch, f64)> {
    SPANS.into_iter().flat_map(|span| {
        RISES.into_iter().flat_map(move |rise| {
            HEIGHTS.into_iter().flat_map(move |(front, back)| {
                OFFSET_FRACTIONS.into_iter().map(move |fraction| {
                    let design = RoofDesign::rectangular(
                        span,
                        30.0,
                        front,
                        back,
                        Pitch::imperial(rise),
                        UnitSystem::Imperial,
                    );
                    (design.walls, design.pitch, fraction * span / 2.0)
                })
            })
        })
    })
}

fn solved(walls: &[Wall], pitch: Pitch, offset: f64) -> RoofSolution {
    solve(walls, pitch, UnitSystem::Imperial, offset).expect("sweep inputs are valid")
}

/// Equal up to rounding, absolute near zero and relative elsewhere.
fn assert_close(actual: f64, expected: f64) {
    assert_relative_eq!(actual, expected, epsilon = 1.0e-9, max_relative = 1.0e-6);
}

#[test]
fn side_runs_sum_to_span() {
    for (walls, pitch, offset) in sweep() {
        let roof = solved(&walls, pitch, offset);
        assert_relative_eq!(
            roof.front().horizontal_run + roof.back().horizontal_run,
            roof.span,
            epsilon = 1.0e-9
        );
    }
}

#[test]
fn rafters_are_at_least_as_long_as_run_and_rise() {
    for (walls, pitch, offset) in sweep() {
        let roof = solved(&walls, pitch, offset);
        for side in &roof.roof_sides {
            assert!(side.rafter_length >= 0.0);
            assert!(side.rafter_length >= side.horizontal_run);
            assert!(side.rafter_length >= side.vertical_rise.abs());
        }
    }
}

#[test]
fn centred_ridge_over_equal_walls_is_symmetric() {
    for (walls, pitch, offset) in sweep() {
        if offset != 0.0 || walls[0].height != walls[1].height {
            continue;
        }
        let roof = solved(&walls, pitch, offset);
        for side in &roof.roof_sides {
            assert_relative_eq!(side.vertical_rise, roof.base_rise, epsilon = 1.0e-9);
            assert_relative_eq!(side.angle, roof.pitch_angle, epsilon = 1.0e-9);
            assert_close(side.rafter_length, roof.common_rafter_length);
        }
        assert!(roof.is_symmetric(1.0e-9));
    }
}

#[test]
fn pitch_angle_ignores_walls_and_offset() {
    for (walls, pitch, offset) in sweep() {
        let roof = solved(&walls, pitch, offset);
        assert_eq!(roof.pitch_angle, pitch.angle_degrees());
    }
}

#[test]
fn collapsed_runs_report_vertical_sides() {
    for (walls, pitch, offset) in sweep() {
        let roof = solved(&walls, pitch, offset);
        for side in &roof.roof_sides {
            assert!(side.angle.is_finite());
            if side.horizontal_run <= 0.0 {
                assert_eq!(side.angle, 90.0);
            }
        }
    }
}

#[test]
fn unit_round_trip_resolves_to_same_roof() {
    for (walls, pitch, offset) in sweep() {
        let direct = solved(&walls, pitch, offset);

        let there = |wall: &Wall| wall.converted(UnitSystem::Imperial, UnitSystem::Metric);
        let metric_walls: Vec<Wall> = walls.iter().map(there).collect();
        let metric_pitch = pitch.converted(UnitSystem::Imperial, UnitSystem::Metric);
        let back_walls: Vec<Wall> = metric_walls
            .iter()
            .map(|wall| wall.converted(UnitSystem::Metric, UnitSystem::Imperial))
            .collect();
        let back_pitch = metric_pitch.converted(UnitSystem::Metric, UnitSystem::Imperial);
        let round_trip = solved(&back_walls, back_pitch, offset);

        assert_relative_eq!(
            round_trip.ridge.height,
            direct.ridge.height,
            max_relative = 1.0e-6
        );
        for (a, b) in round_trip.roof_sides.iter().zip(&direct.roof_sides) {
            assert_close(a.horizontal_run, b.horizontal_run);
            assert_close(a.vertical_rise, b.vertical_rise);
            assert_close(a.rafter_length, b.rafter_length);
            assert_close(a.angle, b.angle);
        }
    }
}

#[test]
fn metric_solution_is_the_imperial_one_rescaled() {
    for (walls, pitch, offset) in sweep() {
        let imperial = solved(&walls, pitch, offset);

        let mut design = RoofDesign {
            walls,
            pitch,
            units: UnitSystem::Imperial,
            ridge_offset: offset,
        };
        design.set_units(UnitSystem::Metric);
        let metric = design.solve().expect("converted design is valid");

        assert_relative_eq!(metric.span, imperial.span * 0.3048, max_relative = 1.0e-9);
        assert_close(metric.ridge.height, imperial.ridge.height * 0.3048);
        assert_relative_eq!(metric.pitch_angle, imperial.pitch_angle, epsilon = 1.0e-9);
        for (m, i) in metric.roof_sides.iter().zip(&imperial.roof_sides) {
            assert_close(m.rafter_length, i.rafter_length * 0.3048);
            assert_relative_eq!(m.angle, i.angle, epsilon = 1.0e-9);
        }
    }
}

#[test]
fn steeper_pitch_raises_ridge_and_every_slope() {
    for (walls, pitch, offset) in sweep() {
        if offset.abs() >= walls[2].length / 2.0 {
            continue;
        }
        let roof = solved(&walls, pitch, offset);
        let steeper = solved(&walls, Pitch::new(pitch.rise + 0.5, pitch.run), offset);

        assert!(steeper.ridge.height > roof.ridge.height);
        for (s, r) in steeper.roof_sides.iter().zip(&roof.roof_sides) {
            assert!(s.angle > r.angle, "{} should exceed {}", s.angle, r.angle);
        }
    }
}
