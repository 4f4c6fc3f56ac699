use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Color, ColorGrid, ColorStats};

use super::{PayloadError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridPayload {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub rows: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub cols: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<Vec<Color>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub color_stats: BTreeMap<Color, ColorEntry>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_colors: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorEntry {
    pub rgb: String,
    pub count: u32,
}

impl GridPayload {
    pub fn from_grid(grid: &ColorGrid) -> Self {
        let color_stats = grid
            .stats()
            .iter()
            .map(|(color, count)| {
                let entry = ColorEntry {
                    rgb: color.rgb().to_string(),
                    count,
                };
                (color, entry)
            })
            .collect();
        Self {
            success: true,
            error: None,
            rows: grid.rows(),
            cols: grid.cols(),
            colors: grid.cell_rows(),
            color_stats,
            total_colors: grid.stats().distinct(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn into_grid(self) -> Result<ColorGrid> {
        if !self.success {
            let message = self
                .error
                .unwrap_or_else(|| "no error message supplied".to_string());
            return Err(PayloadError::Rejected(message));
        }
        let grid = if self.color_stats.is_empty() {
            ColorGrid::new(self.rows, self.cols, self.colors)?
        } else {
            let declared = ColorStats::from_counts(
                self.color_stats
                    .into_iter()
                    .map(|(color, entry)| (color, entry.count)),
            );
            ColorGrid::with_stats(self.rows, self.cols, self.colors, declared)?
        };
        if self.total_colors != 0 && self.total_colors != grid.stats().distinct() {
            return Err(PayloadError::TotalColorsMismatch {
                declared: self.total_colors,
                actual: grid.stats().distinct(),
            });
        }
        Ok(grid)
    }
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}
