use crate::model::{GridPos, Region};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CropDrag {
    #[default]
    Idle,
    Armed,
    Dragging {
        start: GridPos,
        end: GridPos,
    },
}

impl CropDrag {
    pub fn arm(&mut self) {
        *self = Self::Armed;
    }

    pub fn disarm(&mut self) {
        *self = Self::Idle;
    }

    pub fn begin(&mut self, pos: GridPos) -> bool {
        if *self == Self::Armed {
            *self = Self::Dragging {
                start: pos,
                end: pos,
            };
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, pos: Option<GridPos>) -> bool {
        if let (Self::Dragging { end, .. }, Some(pos)) = (self, pos) {
            if *end != pos {
                *end = pos;
                return true;
            }
        }
        false
    }

    pub fn finish(&mut self) -> Option<Region> {
        match *self {
            Self::Dragging { start, end } => {
                *self = Self::Armed;
                Some(Region::from_corners(start, end))
            }
            _ => None,
        }
    }

    pub fn abort(&mut self) -> bool {
        if self.is_dragging() {
            *self = Self::Armed;
            true
        } else {
            false
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn active_region(&self) -> Option<Region> {
        match *self {
            Self::Dragging { start, end } => Some(Region::from_corners(start, end)),
            _ => None,
        }
    }
}
