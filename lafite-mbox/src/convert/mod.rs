//! Lafite to MBOX conversion
//!
//! [`MessageConverter`] works on streams; [`convert_file`] and
//! [`convert_directory`] drive it over files on disk.

pub mod batch;
pub mod converter;
pub mod observer;
pub mod types;

pub use batch::{convert_directory, convert_file};
pub use converter::{convert_stream, MessageConverter};
pub use observer::{ConversionObserver, NullObserver, TracingObserver};
pub use types::*;
