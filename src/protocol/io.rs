use std::fs;
use std::path::Path;

use super::{GridPayload, Result};

pub fn read_payload(path: impl AsRef<Path>) -> Result<GridPayload> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let payload = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<GridPayload>(&raw)?
    } else {
        serde_json::from_str::<GridPayload>(&raw)?
    };
    Ok(payload)
}

pub fn write_payload(path: impl AsRef<Path>, payload: &GridPayload) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let serialized = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::to_string(payload)?
    } else {
        serde_json::to_string_pretty(payload)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
