//! Laurel/Lafite mail file format
//!
//! Messages are packed back to back, each framed by a stamp declaring
//! its length.

pub mod format;
pub mod reader;
pub mod stamp;

pub use format::{is_binary, parse_format_header, resolve_content_type, TEXT_FORMAT};
pub use reader::{FramedReader, LineStatus};
pub use stamp::{FlagAnomaly, Stamp, START_MARKER};
