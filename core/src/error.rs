use thiserror::Error;

/// Error type for raw input parsing and catalogue lookups.
///
/// The estimation engine itself is total over its domain; this type only
/// appears at the boundary where untrusted text enters the core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("invalid input at position {position}: {message}")]
    Invalid { position: u32, message: String },

    #[error("value out of range: {0}")]
    OutOfRange(String),

    #[error("unknown image quality: {0}")]
    UnknownQuality(String),

    #[error("unknown datacenter city: {0}")]
    UnknownCity(String),
}
