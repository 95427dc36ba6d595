use gable_roof::{RoofMeasurements, RoofSolution};
use std::fmt::Write;

/// Render a plain-text summary of a solved roof.
///
/// Lengths are printed in the solution's large unit with two decimals and angles
/// with one, which is enough to check numbers by hand against a framing square.
#[must_use]
pub fn render_summary(solution: &RoofSolution, measurements: &RoofMeasurements) -> String {
    let mut output = String::new();
    let unit = solution.units.large_unit_symbol();

    writeln!(
        &mut output,
        "Gable roof, {} pitch ({:.1} deg), span {:.2} {unit}, ridge length {:.2} {unit}",
        solution.pitch_ratio, solution.pitch_angle, solution.span, solution.width
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Ridge: height {:.2} {unit}, offset {:+.2} {unit}",
        solution.ridge.height, solution.ridge.offset
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Common rafter: {:.2} {unit} (run {:.2}, rise {:.2})",
        solution.common_rafter_length, solution.base_run, solution.base_rise
    )
    .expect("writing to string cannot fail");

    for side in &solution.roof_sides {
        writeln!(
            &mut output,
            "{}: run {:.2} {unit}, rise {:+.2} {unit}, rafter {:.2} {unit}, slope {:.1} deg",
            side.name, side.horizontal_run, side.vertical_rise, side.rafter_length, side.angle
        )
        .expect("writing to string cannot fail");
    }

    writeln!(
        &mut output,
        "Areas: walls {:.2} {unit}², roof {:.2} {unit}², floor {:.2} {unit}²",
        measurements.total_wall_area, measurements.total_roof_area, measurements.floor_area
    )
    .expect("writing to string cannot fail");

    output
}
