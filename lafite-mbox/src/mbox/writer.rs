//! MBOX writer
//!
//! Serializes converted messages. Lines are always terminated with LF.

use chrono::{DateTime, Utc};
use std::io::{self, Write};

const NEWLINE: &[u8] = b"\n";

/// Date layout of the `From ` separator line
pub const FROM_LINE_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// MBOX writer wrapping an output byte sink
pub struct MboxWriter<W: Write> {
    writer: W,
    quote_from_lines: bool,
}

impl<W: Write> MboxWriter<W> {
    /// Create a new MBOX writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            quote_from_lines: true,
        }
    }

    /// Enable or disable `>From` quoting of body lines
    pub fn with_from_quoting(mut self, enabled: bool) -> Self {
        self.quote_from_lines = enabled;
        self
    }

    /// Write the `From_` separator that opens every message
    pub fn write_from_line(&mut self, sender: &str, date: DateTime<Utc>) -> io::Result<()> {
        let sender = if sender.is_empty() { "MAILER-DAEMON" } else { sender };
        writeln!(
            self.writer,
            "From {} {}",
            sender,
            date.format(FROM_LINE_DATE_FORMAT)
        )
    }

    /// Write a `Name: value` header line
    pub fn write_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        writeln!(self.writer, "{}: {}", name, value)
    }

    /// Write bytes followed by a newline
    pub fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line)?;
        self.writer.write_all(NEWLINE)
    }

    /// Write a bare newline
    pub fn write_blank_line(&mut self) -> io::Result<()> {
        self.writer.write_all(NEWLINE)
    }

    /// Write a body text line, quoting it if it could pass for a separator
    pub fn write_body_line(&mut self, line: &[u8]) -> io::Result<()> {
        if self.quote_from_lines && needs_from_quoting(line) {
            self.writer.write_all(b">")?;
        }
        self.write_line(line)
    }

    /// Write bytes with no interpretation
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Does the line match `^>*From ` (mboxrd quoting)?
pub fn needs_from_quoting(line: &[u8]) -> bool {
    let unquoted = line.iter().position(|&b| b != b'>').unwrap_or(line.len());
    line[unquoted..].starts_with(b"From ")
}
