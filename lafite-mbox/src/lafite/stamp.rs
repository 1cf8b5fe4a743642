//! The stamp that frames every Lafite message
//!
//! ```text
//! *start*
//! 01659 00024 UUF
//! ```
//!
//! The second line carries the total message length, the length of the
//! stamp itself, and three single-character flags.

use std::fmt;

use crate::error::{ConvertError, Result};

/// Marker line opening every message
pub const START_MARKER: &[u8] = b"*start*";

const STAMP_LINE_LENGTH: usize = 15;

/// Decoded lengths and flags line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    /// Total message length, stamp included
    pub message_length: usize,
    /// Length of the two stamp lines, terminators included
    pub stamp_length: usize,
    /// `U` or `D`
    pub deleted: char,
    /// `S` or `U`
    pub seen: char,
    /// Space, `F` for a manually repaired message, or something undocumented
    pub fixed: char,
}

/// A stamp flag outside its documented alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagAnomaly {
    Deleted(char),
    Seen(char),
    Undocumented(char),
}

impl fmt::Display for FlagAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagAnomaly::Deleted(c) => write!(f, "Deleted flag = '{}'", c),
            FlagAnomaly::Seen(c) => write!(f, "Seen flag = '{}'", c),
            FlagAnomaly::Undocumented(c) => write!(f, "Undocumented flag = '{}'", c),
        }
    }
}

impl Stamp {
    /// Parse the lengths and flags line.
    ///
    /// The whole line must be five digits, a space, five digits, a space
    /// and exactly three flag characters.
    pub fn parse(line: &[u8]) -> Result<Self> {
        let malformed = || ConvertError::MalformedStamp {
            line: String::from_utf8_lossy(line).into_owned(),
        };

        if line.len() != STAMP_LINE_LENGTH || line[5] != b' ' || line[11] != b' ' {
            return Err(malformed());
        }

        let message_length = parse_length(&line[0..5]).ok_or_else(malformed)?;
        let stamp_length = parse_length(&line[6..11]).ok_or_else(malformed)?;

        // flags are single bytes; read them as Latin-1
        Ok(Self {
            message_length,
            stamp_length,
            deleted: char::from(line[12]),
            seen: char::from(line[13]),
            fixed: char::from(line[14]),
        })
    }

    /// Did someone repair this message by hand?
    pub fn is_fixed(&self) -> bool {
        self.fixed == 'F'
    }

    /// Is the trailing flag neither a space nor `F`?
    pub fn is_undocumented_flag(&self) -> bool {
        self.fixed != 'F' && self.fixed != ' '
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted == 'D'
    }

    /// Flags falling outside their expected alphabets
    pub fn anomalies(&self) -> Vec<FlagAnomaly> {
        let mut anomalies = Vec::new();
        if self.deleted != 'D' && self.deleted != 'U' {
            anomalies.push(FlagAnomaly::Deleted(self.deleted));
        }
        if self.seen != 'S' && self.seen != 'U' {
            anomalies.push(FlagAnomaly::Seen(self.seen));
        }
        if self.is_undocumented_flag() {
            anomalies.push(FlagAnomaly::Undocumented(self.fixed));
        }
        anomalies
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:05} {:05} {}{}{}",
            self.message_length, self.stamp_length, self.deleted, self.seen, self.fixed
        )
    }
}

fn parse_length(digits: &[u8]) -> Option<usize> {
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(
        digits
            .iter()
            .fold(0, |acc, d| acc * 10 + usize::from(d - b'0')),
    )
}
