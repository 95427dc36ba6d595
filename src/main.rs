mod report;
mod scenario;

use gable_roof::measure;
use report::render_summary;
use scenario::load_design;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // An optional argument names a JSON design; otherwise the default house is used.
    let path = std::env::args_os().nth(1);
    let design = load_design(path.as_deref().map(std::path::Path::new))?;

    let solution = design.solve()?;
    let measurements = measure(&solution);

    let report = render_summary(&solution, &measurements);
    println!("{report}");

    Ok(())
}
