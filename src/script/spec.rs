use serde::{Deserialize, Serialize};

use crate::model::Color;

use super::{Result, ScriptError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditScript {
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<EditStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditStep {
    SetCell {
        row: usize,
        col: usize,
        color: Color,
    },
    Crop {
        min_row: usize,
        max_row: usize,
        min_col: usize,
        max_col: usize,
    },
    Select {
        color: Color,
    },
    ClearSelection,
}

impl EditStep {
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::SetCell { .. } => "set_cell",
            Self::Crop { .. } => "crop",
            Self::Select { .. } => "select",
            Self::ClearSelection => "clear_selection",
        }
    }
}

impl EditScript {
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(ScriptError::Parse(
                "script must include at least one step".to_string(),
            ));
        }
        for (index, step) in self.steps.iter().enumerate() {
            if let EditStep::Crop {
                min_row,
                max_row,
                min_col,
                max_col,
            } = step
            {
                if min_row > max_row || min_col > max_col {
                    return Err(ScriptError::Parse(format!(
                        "crop step at index {index} has inverted bounds"
                    )));
                }
            }
        }
        Ok(())
    }
}
