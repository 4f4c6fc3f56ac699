use std::fs;
use std::path::Path;

use super::{EditScript, Result, ScriptReport};

pub fn load_script(path: impl AsRef<Path>) -> Result<EditScript> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let script = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<EditScript>(&raw)?
    } else {
        serde_json::from_str::<EditScript>(&raw)?
    };
    script.validate()?;
    Ok(script)
}

pub fn save_report(path: impl AsRef<Path>, report: &ScriptReport) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let serialized = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::to_string(report)?
    } else {
        serde_json::to_string_pretty(report)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
