use serde::{Deserialize, Serialize};

use crate::editor::SessionSummary;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepOutcome {
    pub op: String,
    pub duration_ms: u128,
    pub changed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptReport {
    pub script_name: Option<String>,
    pub steps: Vec<StepOutcome>,
    pub summary: SessionSummary,
}
