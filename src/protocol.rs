mod error;
mod export;
mod io;
mod payload;


pub use error::{PayloadError, Result};
pub use export::{DEFAULT_EXPORT_CELL_SIZE, ExportRequest};
pub use io::{read_payload, write_payload};
pub use payload::{ColorEntry, GridPayload};
