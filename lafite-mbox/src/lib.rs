//! lafite-mbox: Laurel/Lafite to mbox converter
//!
//! Lafite mail files hold messages packed back to back, each preceded by
//! a stamp declaring its byte length. This crate walks those stamps,
//! rewrites the headers, and emits a standard mbox file.
//!
//! # Example
//!
//! ```no_run
//! use lafite_mbox::convert::{convert_file, ConvertOptions, TracingObserver};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = convert_file(
//!         Path::new("Inbox.mail"),
//!         Path::new("Inbox.mail.mbox"),
//!         &ConvertOptions::default(),
//!         TracingObserver::default(),
//!     )?;
//!     println!("{} message(s)", summary.summary.messages);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`lafite`]: Stamp parsing and framed reads of the input format
//! - [`mbox`]: MBOX output
//! - [`convert`]: Message conversion and file/directory drivers
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod config;
pub mod convert;
pub mod error;
pub mod lafite;
pub mod mbox;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConvertError, ErrorKind, Result};
