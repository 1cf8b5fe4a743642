//! MBOX output
//!
//! Messages are concatenated, each opened by a `From ` separator line.

pub mod writer;

pub use writer::{needs_from_quoting, MboxWriter, FROM_LINE_DATE_FORMAT};
