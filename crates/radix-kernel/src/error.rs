//! Error types for radix kernel operations.
//!
//! Only the consecutive decoder fails explicitly. Encoders and the
//! sexagesimal decoder report bad input through [`crate::outcome`] instead.

/// Errors raised while decoding consecutive-radix text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The radix is outside `2..=36`.
    #[error("radix {radix} out of range 2..=36")]
    RadixOutOfRange { radix: u32 },

    /// The text to decode is empty.
    #[error("the given value cannot be empty")]
    EmptyInput,

    /// The decoded value does not fit in 64 bits.
    #[error("{text} overflows a 64-bit value in radix {radix}")]
    Overflow { text: String, radix: u32 },

    /// A character is not a glyph, or its value is not below the radix.
    #[error("{text} is invalid for radix {radix} (glyph {glyph:?} at position {position})")]
    MalformedDigit {
        text: String,
        radix: u32,
        glyph: char,
        position: usize,
    },
}

/// Coarse classification of a [`ConversionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The call itself was invalid: bad radix, empty text, or an
    /// unrepresentable result.
    InvalidArgument,
    /// The text contains a character that is not a digit of the radix.
    MalformedInput,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RadixOutOfRange { .. } | Self::EmptyInput | Self::Overflow { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::MalformedDigit { .. } => ErrorKind::MalformedInput,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid_argument"),
            Self::MalformedInput => write!(f, "malformed_input"),
        }
    }
}
