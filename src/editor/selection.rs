use crate::model::{Color, ColorGrid};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<Color>,
}

impl Selection {
    pub fn current(&self) -> Option<Color> {
        self.current
    }

    pub fn toggle(&mut self, color: Color) {
        if self.current == Some(color) {
            self.current = None;
        } else {
            self.current = Some(color);
        }
    }

    pub fn clear(&mut self) -> bool {
        let had_selection = self.current.is_some();
        self.current = None;
        had_selection
    }

    pub fn retain_present(&mut self, grid: &ColorGrid) -> bool {
        match self.current {
            Some(color) if !grid.stats().contains(color) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
