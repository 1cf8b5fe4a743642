//! Builders for Lafite test input

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use lafite_mbox::convert::ConvertOptions;

/// `*start*\r` plus `LLLLL SSSSS DSF\r`
pub const STAMP_LENGTH: usize = 24;

pub fn fixed_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1985, 3, 12, 10, 31, 0).unwrap()
}

pub fn test_options() -> ConvertOptions {
    ConvertOptions {
        timestamp: Some(fixed_date()),
        ..ConvertOptions::default()
    }
}

/// Frame `headers` and `body` as one Lafite message
pub fn lafite_message(flags: &str, headers: &[&str], body: &[u8]) -> Vec<u8> {
    let mut content = Vec::new();
    for header in headers {
        content.extend_from_slice(header.as_bytes());
        content.push(b'\r');
    }
    content.push(b'\r');
    content.extend_from_slice(body);

    let total = STAMP_LENGTH + content.len();
    let mut message =
        format!("*start*\r{:05} {:05} {}\r", total, STAMP_LENGTH, flags).into_bytes();
    message.extend_from_slice(&content);
    message
}

/// Frame a text message, padding the body with a filler line so the whole
/// message is exactly `total` bytes long
pub fn lafite_text_message_of_length(flags: &str, headers: &[&str], total: usize) -> Vec<u8> {
    let header_bytes: usize = headers.iter().map(|h| h.len() + 1).sum();
    let filler = total - STAMP_LENGTH - header_bytes - 1 - 1;

    let mut body = b"Filler follows.\r".to_vec();
    body.extend(std::iter::repeat(b'x').take(filler - body.len()));
    body.push(b'\r');

    let message = lafite_message(flags, headers, &body);
    assert_eq!(message.len(), total);
    message
}

/// Number of mbox separator lines in `output`
pub fn count_separators(output: &[u8]) -> usize {
    output
        .split(|&b| b == b'\n')
        .filter(|line| line.starts_with(b"From "))
        .count()
}
