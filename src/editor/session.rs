use serde::{Deserialize, Serialize};

use crate::model::{Color, ColorGrid, GridPos, PaletteEntry, Region, Result};

use super::{CropDrag, EditorMode, Redraw, Selection, SessionEvent, Update};

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    grid: Option<ColorGrid>,
    selection: Selection,
    drag: CropDrag,
    mode: EditorMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    pub rows: usize,
    pub cols: usize,
    pub total_colors: usize,
    pub palette: Vec<PaletteEntry>,
    pub selected: Option<Color>,
    pub edit_mode: bool,
    pub crop_mode: bool,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> Option<&ColorGrid> {
        self.grid.as_ref()
    }

    pub fn selection(&self) -> Option<Color> {
        self.selection.current()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn drag(&self) -> CropDrag {
        self.drag
    }

    pub fn install_grid(&mut self, grid: ColorGrid) -> Update {
        self.grid = Some(grid);
        self.selection.clear();
        self.mode.reset();
        self.drag.disarm();
        Update::with_event(Redraw::Grid, SessionEvent::GridReplaced)
    }

    pub fn select_color(&mut self, color: Color) -> Update {
        let Some(grid) = self.grid.as_ref() else {
            return Update::none();
        };
        if !grid.stats().contains(color) {
            return Update::none();
        }
        self.selection.toggle(color);
        Update::with_event(Redraw::Grid, SessionEvent::SelectionChanged)
    }

    pub fn clear_selection(&mut self) -> Update {
        if self.selection.clear() {
            Update::with_event(Redraw::Grid, SessionEvent::SelectionChanged)
        } else {
            Update::none()
        }
    }

    pub fn toggle_edit_mode(&mut self) -> Update {
        if self.grid.is_none() {
            return Update::none();
        }
        let overlay_was_visible = self.drag.is_dragging();
        self.mode.toggle_edit();
        self.drag.disarm();
        if overlay_was_visible {
            Update::redraw(Redraw::Grid)
        } else {
            Update::none()
        }
    }

    pub fn toggle_crop_mode(&mut self) -> Update {
        if self.grid.is_none() {
            return Update::none();
        }
        let overlay_was_visible = self.drag.is_dragging();
        if self.mode.toggle_crop() {
            self.drag.arm();
        } else {
            self.drag.disarm();
        }
        if overlay_was_visible {
            Update::redraw(Redraw::Grid)
        } else {
            Update::none()
        }
    }

    pub fn click(&mut self, pos: GridPos) -> Update {
        if self.mode.crop() {
            return Update::none();
        }
        let Some(grid) = self.grid.as_ref() else {
            return Update::none();
        };
        let Some(cell_color) = grid.color_at(pos) else {
            return Update::none();
        };
        if self.mode.edit() {
            if let Some(selected) = self.selection.current() {
                return self.recolor(pos, selected).expect("cell bounds checked");
            }
        }
        self.select_color(cell_color)
    }

    pub fn recolor(&mut self, pos: GridPos, color: Color) -> Result<Update> {
        let Some(grid) = self.grid.as_mut() else {
            return Ok(Update::none());
        };
        if !grid.set_cell(pos, color)? {
            return Ok(Update::none());
        }
        let mut update = Update::with_event(Redraw::Grid, SessionEvent::GridEdited);
        if self.selection.retain_present(grid) {
            update.events.push(SessionEvent::SelectionChanged);
        }
        Ok(update)
    }

    pub fn apply_crop(&mut self, region: Region) -> Result<Update> {
        let Some(grid) = self.grid.as_mut() else {
            return Ok(Update::none());
        };
        grid.crop(region)?;
        self.drag.abort();
        let mut update = Update::with_event(Redraw::Grid, SessionEvent::GridEdited);
        if self.selection.retain_present(grid) {
            update.events.push(SessionEvent::SelectionChanged);
        }
        Ok(update)
    }

    pub fn pointer_down(&mut self, pos: Option<GridPos>) -> Update {
        if !self.mode.crop() {
            return Update::none();
        }
        let Some(pos) = pos else {
            return Update::none();
        };
        if !self.grid.as_ref().is_some_and(|grid| grid.contains(pos)) {
            return Update::none();
        }
        if self.drag.begin(pos) {
            Update::redraw(Redraw::GridWithCropOverlay)
        } else {
            Update::none()
        }
    }

    pub fn pointer_move(&mut self, pos: Option<GridPos>) -> Update {
        let pos = pos.filter(|pos| self.grid.as_ref().is_some_and(|grid| grid.contains(*pos)));
        if self.drag.update(pos) {
            Update::redraw(Redraw::GridWithCropOverlay)
        } else {
            Update::none()
        }
    }

    pub fn pointer_up(&mut self) -> Result<Update> {
        let Some(region) = self.drag.finish() else {
            return Ok(Update::none());
        };
        self.apply_crop(region)
    }

    pub fn pointer_leave(&mut self) -> Update {
        if self.drag.abort() {
            Update::redraw(Redraw::Grid)
        } else {
            Update::none()
        }
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        let grid = self.grid.as_ref()?;
        let summary = grid.summary();
        Some(SessionSummary {
            rows: summary.rows,
            cols: summary.cols,
            total_colors: summary.total_colors,
            palette: summary.palette,
            selected: self.selection.current(),
            edit_mode: self.mode.edit(),
            crop_mode: self.mode.crop(),
        })
    }
}
