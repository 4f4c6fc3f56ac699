#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Redraw {
    #[default]
    None,
    Grid,
    GridWithCropOverlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SelectionChanged,
    GridEdited,
    GridReplaced,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    pub redraw: Redraw,
    pub events: Vec<SessionEvent>,
}

impl Update {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw(redraw: Redraw) -> Self {
        Self {
            redraw,
            events: Vec::new(),
        }
    }

    pub fn with_event(redraw: Redraw, event: SessionEvent) -> Self {
        Self {
            redraw,
            events: vec![event],
        }
    }
}
