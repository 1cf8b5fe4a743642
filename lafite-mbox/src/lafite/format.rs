//! Body formats named by the `Format:` header

pub const TEDIT_MIME_TYPE: &str = "application/vnd.interlisp.tedit";
pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain; charset=x-xerox-xccs";
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Format assumed when a message has no `Format:` header
pub const TEXT_FORMAT: &str = "text";

const TEDIT_FORMAT: &str = "tedit";

/// Map a format token to a MIME content type. Case-insensitive.
pub fn resolve_content_type(format: &str) -> &'static str {
    if format.eq_ignore_ascii_case(TEDIT_FORMAT) {
        TEDIT_MIME_TYPE
    } else if format.eq_ignore_ascii_case(TEXT_FORMAT) {
        PLAIN_TEXT_MIME_TYPE
    } else {
        UNKNOWN_MIME_TYPE
    }
}

/// Anything other than text is copied byte for byte
pub fn is_binary(format: &str) -> bool {
    !format.eq_ignore_ascii_case(TEXT_FORMAT)
}

/// Extract the lowercased value of a `Format:` header line.
///
/// Any number of spaces may separate the colon from the value.
pub fn parse_format_header(line: &[u8]) -> Option<String> {
    const NAME: &[u8] = b"format:";

    if line.len() < NAME.len() || !line[..NAME.len()].eq_ignore_ascii_case(NAME) {
        return None;
    }
    let value = &line[NAME.len()..];
    let start = value.iter().position(|&b| b != b' ').unwrap_or(value.len());
    let value = String::from_utf8_lossy(&value[start..]);
    Some(value.trim_end().to_ascii_lowercase())
}
