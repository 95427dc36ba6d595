use std::error::Error;
use std::fs;
use std::path::Path;

use gable_roof::RoofDesign;
use log::info;

/// Read a design from a JSON file, or fall back to the default design.
pub fn load_design(path: Option<&Path>) -> Result<RoofDesign, Box<dyn Error>> {
    let Some(path) = path else {
        info!("no design file given, using the default design");
        return Ok(RoofDesign::default());
    };
    let text = fs::read_to_string(path)
        .map_err(|error| format!("cannot read {}: {error}", path.display()))?;
    let design: RoofDesign = serde_json::from_str(&text)
        .map_err(|error| format!("invalid design in {}: {error}", path.display()))?;
    info!(
        "loaded {} walls from {} ({} units)",
        design.walls.len(),
        path.display(),
        design.units
    );
    Ok(design)
}
