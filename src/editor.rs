mod crop;
mod mode;
mod selection;
mod session;
mod update;


pub use crop::CropDrag;
pub use mode::EditorMode;
pub use selection::Selection;
pub use session::{EditorSession, SessionSummary};
pub use update::{Redraw, SessionEvent, Update};
