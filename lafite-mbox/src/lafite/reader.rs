//! Line and byte reads over a Laurel/Lafite mail file
//!
//! Lines end with CR or LF. The terminator is consumed and never returned.

use std::io::{self, BufRead};

use crate::error::{ConvertError, Result};

const NEWLINE: u8 = b'\n';
const CR: u8 = b'\r';

/// Result of a single line read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStatus {
    /// Line content without its terminator
    pub chars: Vec<u8>,
    /// Set on end of input, and also when the read stopped at its limit
    pub eof: bool,
}

impl LineStatus {
    /// Number of content bytes read
    pub fn chars_read(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Byte-stream cursor over a Lafite file
pub struct FramedReader<R: BufRead> {
    reader: R,
    exhausted: bool,
}

impl<R: BufRead> FramedReader<R> {
    /// Create a new reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            exhausted: false,
        }
    }

    /// Read a line holding at most `no_more_than` content bytes.
    ///
    /// Once the limit is reached one more byte is examined: a terminator
    /// ends the line normally, anything else is kept and the line is
    /// reported as `eof`. A line can therefore carry `no_more_than + 1`
    /// bytes, which is where the one-byte slack in message lengths comes
    /// from.
    pub fn read_line_bounded(&mut self, no_more_than: usize) -> io::Result<LineStatus> {
        let mut chars = Vec::new();
        while chars.len() <= no_more_than {
            match self.next_byte()? {
                None => return Ok(LineStatus { chars, eof: true }),
                Some(NEWLINE) | Some(CR) => return Ok(LineStatus { chars, eof: false }),
                Some(byte) => chars.push(byte),
            }
        }
        Ok(LineStatus { chars, eof: true })
    }

    /// Read a line of any length
    pub fn read_line(&mut self) -> io::Result<LineStatus> {
        self.read_line_bounded(usize::MAX)
    }

    /// Read exactly `count` bytes with no line interpretation
    pub fn read_raw_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(count);
        while buffer.len() < count {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                self.exhausted = true;
                return Err(ConvertError::LengthMismatch {
                    expected: count,
                    actual: buffer.len(),
                });
            }
            let take = available.len().min(count - buffer.len());
            buffer.extend_from_slice(&available[..take]);
            self.reader.consume(take);
        }
        Ok(buffer)
    }

    /// Discard `count` bytes
    pub fn skip_ahead(&mut self, count: usize) -> Result<()> {
        let mut skipped = 0;
        while skipped < count {
            let available = self.reader.fill_buf()?.len();
            if available == 0 {
                self.exhausted = true;
                return Err(ConvertError::LengthMismatch {
                    expected: count,
                    actual: skipped,
                });
            }
            let take = available.min(count - skipped);
            self.reader.consume(take);
            skipped += take;
        }
        Ok(())
    }

    /// True once a read has hit the real end of input
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = match self.reader.fill_buf()?.first() {
            Some(&byte) => byte,
            None => {
                self.exhausted = true;
                return Ok(None);
            }
        };
        self.reader.consume(1);
        Ok(Some(byte))
    }
}
