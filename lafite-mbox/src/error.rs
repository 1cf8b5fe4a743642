use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Expected '*start*', got '{found}'")]
    MissingMarker { found: String },

    #[error("Expected lengths and flags, got '{line}'")]
    MalformedStamp { line: String },

    #[error("Read too far: consumed {consumed} bytes, message length is {declared}")]
    OverRead { consumed: usize, declared: usize },

    #[error("Input ended after {consumed} bytes of a {declared}-byte message")]
    Truncated { consumed: usize, declared: usize },

    #[error("Expected {expected} bytes, read {actual} bytes")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Broad classes of conversion failure.
///
/// Every variant aborts the conversion of the current file. Anomalous
/// stamp flags are not errors and never show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Message boundaries can no longer be trusted
    Framing,
    /// Fewer bytes available than the stamp declared
    Shortfall,
    Io,
    Config,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::MissingMarker { .. }
            | ConvertError::MalformedStamp { .. }
            | ConvertError::OverRead { .. }
            | ConvertError::Truncated { .. } => ErrorKind::Framing,
            ConvertError::LengthMismatch { .. } => ErrorKind::Shortfall,
            ConvertError::Io(_) => ErrorKind::Io,
            ConvertError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
