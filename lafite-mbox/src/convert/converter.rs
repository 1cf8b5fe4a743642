//! Lafite to MBOX message conversion
//!
//! Each message goes through the same steps: find the `*start*` marker,
//! parse the stamp, copy the headers (swallowing `Format:`), write the
//! content type, then copy the body either line by line (text) or as raw
//! bytes (every other format). The stamp's declared length is the only
//! thing that tells us where a message ends, so every byte read is
//! counted against it.

use chrono::Utc;
use std::io::{BufRead, Write};

use super::observer::ConversionObserver;
use super::types::{ConversionSummary, ConvertOptions};
use crate::error::{ConvertError, Result};
use crate::lafite::{
    is_binary, parse_format_header, resolve_content_type, FramedReader, LineStatus, Stamp,
    START_MARKER, TEXT_FORMAT,
};
use crate::mbox::MboxWriter;

/// Length of the line terminator counted by the stamp
const NEWLINE_LENGTH: usize = 1;

/// Converts every message of one Lafite stream into MBOX
pub struct MessageConverter<R: BufRead, W: Write, O: ConversionObserver> {
    reader: FramedReader<R>,
    writer: MboxWriter<W>,
    observer: O,
    options: ConvertOptions,
    summary: ConversionSummary,
}

impl<R: BufRead, W: Write, O: ConversionObserver> MessageConverter<R, W, O> {
    /// Create a converter reading `input` and writing to `output`
    pub fn new(input: R, output: W, options: ConvertOptions, observer: O) -> Self {
        let writer = MboxWriter::new(output).with_from_quoting(options.quote_from_lines);
        Self {
            reader: FramedReader::new(input),
            writer,
            observer,
            options,
            summary: ConversionSummary::default(),
        }
    }

    /// Convert messages until the end of input.
    ///
    /// Any framing problem aborts the whole stream: once one length is
    /// wrong, no later boundary can be trusted.
    pub fn convert(&mut self) -> Result<ConversionSummary> {
        while self.convert_next()? {}
        Ok(self.summary)
    }

    /// Convert a single message. Returns `false` at end of input.
    pub fn convert_next(&mut self) -> Result<bool> {
        let index = self.summary.messages + self.summary.skipped;

        if !self.seek_marker()? {
            return Ok(false);
        }
        let stamp = self.parse_stamp(index)?;

        if self.options.skip_deleted && stamp.is_deleted() {
            self.skip_message(&stamp)?;
            self.observer.message_skipped(index, &stamp);
            self.summary.skipped += 1;
            return Ok(true);
        }

        let date = self.options.timestamp.unwrap_or_else(Utc::now);
        self.writer.write_from_line(&self.options.program_id, date)?;

        let mut consumed = stamp.stamp_length;
        let format = self.copy_headers(index, &stamp, &mut consumed)?;
        self.write_content_headers(&format, &stamp)?;

        if is_binary(&format) {
            self.copy_binary_body(&stamp, &mut consumed)?;
        } else {
            self.copy_text_body(index, &stamp, &mut consumed)?;
        }

        // the final newline is not always counted
        if consumed > stamp.message_length + NEWLINE_LENGTH {
            return Err(ConvertError::OverRead {
                consumed,
                declared: stamp.message_length,
            });
        }

        self.summary.messages += 1;
        self.observer.message_finished(index, consumed);
        Ok(true)
    }

    /// Counters so far
    pub fn summary(&self) -> ConversionSummary {
        self.summary
    }

    /// Flush the output and hand it back
    pub fn finish(self) -> Result<W> {
        Ok(self.writer.finish()?)
    }

    fn seek_marker(&mut self) -> Result<bool> {
        let status = self.reader.read_line()?;
        if status.eof && status.is_empty() {
            return Ok(false);
        }
        if status.eof || status.chars != START_MARKER {
            return Err(ConvertError::MissingMarker {
                found: String::from_utf8_lossy(&status.chars).into_owned(),
            });
        }
        Ok(true)
    }

    fn parse_stamp(&mut self, index: u64) -> Result<Stamp> {
        let status = self.reader.read_line()?;
        let stamp = Stamp::parse(&status.chars)?;

        if stamp.stamp_length > stamp.message_length {
            return Err(ConvertError::OverRead {
                consumed: stamp.stamp_length,
                declared: stamp.message_length,
            });
        }

        self.observer.message_started(index, &stamp);
        let anomalies = stamp.anomalies();
        if !anomalies.is_empty() {
            self.summary.anomalies += 1;
        }
        for anomaly in anomalies {
            self.observer.flag_anomaly(index, anomaly);
        }
        Ok(stamp)
    }

    /// Discard the rest of a message without writing anything
    fn skip_message(&mut self, stamp: &Stamp) -> Result<()> {
        let remaining = stamp.message_length - stamp.stamp_length;
        if remaining == 0 {
            return Ok(());
        }
        self.reader.skip_ahead(remaining - NEWLINE_LENGTH)?;

        // the final newline may be missing at end of input
        match self.reader.skip_ahead(NEWLINE_LENGTH) {
            Err(ConvertError::LengthMismatch { .. }) if self.reader.is_exhausted() => Ok(()),
            other => other,
        }
    }

    /// Copy headers up to the blank line, returning the body format
    fn copy_headers(&mut self, index: u64, stamp: &Stamp, consumed: &mut usize) -> Result<String> {
        let mut format = TEXT_FORMAT.to_string();

        while *consumed < stamp.message_length {
            let status = self.read_message_line(stamp, consumed)?;
            self.observer.header_line(index, &status.chars);

            if let Some(value) = parse_format_header(&status.chars) {
                self.observer.format_detected(index, &value);
                format = value;
            } else if status.is_empty() {
                break;
            } else {
                self.writer.write_line(&status.chars)?;
            }
        }

        Ok(format)
    }

    fn write_content_headers(&mut self, format: &str, stamp: &Stamp) -> Result<()> {
        self.writer
            .write_header("Content-Type", resolve_content_type(format))?;
        if stamp.is_fixed() {
            self.writer.write_header("X-Message-Repaired", "true")?;
        }
        self.writer.write_blank_line()?;
        Ok(())
    }

    fn copy_binary_body(&mut self, stamp: &Stamp, consumed: &mut usize) -> Result<()> {
        if *consumed >= stamp.message_length {
            return Ok(());
        }

        let remaining = stamp.message_length - *consumed;
        let body = self.reader.read_raw_bytes(remaining)?;
        self.writer.write_raw(&body)?;
        *consumed += remaining;

        // keep the next separator at the start of a line
        if body.last() != Some(&b'\n') {
            self.writer.write_blank_line()?;
        }
        Ok(())
    }

    fn copy_text_body(&mut self, index: u64, stamp: &Stamp, consumed: &mut usize) -> Result<()> {
        while *consumed < stamp.message_length {
            let status = self.read_message_line(stamp, consumed)?;
            self.observer.body_line(index, &status.chars);
            self.writer.write_body_line(&status.chars)?;
        }
        Ok(())
    }

    /// Read a line bounded by what is left of the message
    fn read_message_line(&mut self, stamp: &Stamp, consumed: &mut usize) -> Result<LineStatus> {
        let remaining = stamp.message_length - *consumed;
        let status = self
            .reader
            .read_line_bounded(remaining - NEWLINE_LENGTH)?;
        *consumed += status.chars_read() + NEWLINE_LENGTH;

        if self.reader.is_exhausted() && *consumed < stamp.message_length {
            return Err(ConvertError::Truncated {
                consumed: *consumed,
                declared: stamp.message_length,
            });
        }
        Ok(status)
    }
}

/// Convert a whole Lafite stream into `output`
pub fn convert_stream<R, W, O>(
    input: R,
    output: W,
    options: ConvertOptions,
    observer: O,
) -> Result<ConversionSummary>
where
    R: BufRead,
    W: Write,
    O: ConversionObserver,
{
    let mut converter = MessageConverter::new(input, output, options, observer);
    let summary = converter.convert()?;
    converter.finish()?;
    Ok(summary)
}
