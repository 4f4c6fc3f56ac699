#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorMode {
    edit: bool,
    crop: bool,
}

impl EditorMode {
    pub fn edit(&self) -> bool {
        self.edit
    }

    pub fn crop(&self) -> bool {
        self.crop
    }

    pub fn toggle_edit(&mut self) -> bool {
        self.edit = !self.edit;
        if self.edit {
            self.crop = false;
        }
        self.edit
    }

    pub fn toggle_crop(&mut self) -> bool {
        self.crop = !self.crop;
        if self.crop {
            self.edit = false;
        }
        self.crop
    }

    pub fn reset(&mut self) {
        self.edit = false;
        self.crop = false;
    }
}
