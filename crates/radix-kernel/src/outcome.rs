//! Typed outcomes for the non-error conversion policies.
//!
//! Encoders never fail: out-of-domain input degrades to [`Encoding::Empty`],
//! whose legacy text view is `""`. The sexagesimal decoder never fails
//! either: malformed input yields [`Decoding::SilentZero`], whose legacy
//! value view is `0`. Both keep the reason so callers can pattern-match
//! instead of guessing from an empty string or a zero.

use serde::{Deserialize, Serialize};

/// Why an encoder produced the degraded empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    NegativeValue,
    RadixOutOfRange,
}

/// Result of encoding a decimal value into some radix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Encoding {
    /// The value rendered in the requested radix.
    Digits { text: String },

    /// Degraded result for invalid input. Renders as an empty string.
    Empty { reason: EmptyReason },
}

impl Encoding {
    pub fn digits(text: impl Into<String>) -> Self {
        Self::Digits { text: text.into() }
    }

    pub fn empty(reason: EmptyReason) -> Self {
        Self::Empty { reason }
    }

    /// Legacy text view: the digits, or `""` when degraded.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Digits { text } => text,
            Self::Empty { .. } => "",
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Digits { text } => text,
            Self::Empty { .. } => String::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the sexagesimal decoder fell back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SilentZeroReason {
    /// No text at all.
    EmptyInput,
    /// A group is empty or not a run of decimal digits.
    MalformedGroup,
    /// A group is a number outside `0..=59`.
    GroupOutOfRange,
    /// The value does not fit in 64 bits.
    Overflow,
}

/// Result of decoding text into a decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Decoding {
    Value { value: i64 },
    SilentZero { reason: SilentZeroReason },
}

impl Decoding {
    /// Legacy value view: the decoded value, or `0` for a silent zero.
    pub fn value(&self) -> i64 {
        match self {
            Self::Value { value } => *value,
            Self::SilentZero { .. } => 0,
        }
    }

    pub fn is_silent_zero(&self) -> bool {
        matches!(self, Self::SilentZero { .. })
    }
}

impl From<i64> for Decoding {
    fn from(value: i64) -> Self {
        Self::Value { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_views() {
        assert_eq!(Encoding::digits("FF").as_str(), "FF");
        assert_eq!(Encoding::empty(EmptyReason::NegativeValue).as_str(), "");
        assert_eq!(
            Encoding::empty(EmptyReason::RadixOutOfRange).to_string(),
            ""
        );
        assert_eq!(
            Decoding::SilentZero {
                reason: SilentZeroReason::Overflow
            }
            .value(),
            0
        );
        assert_eq!(Decoding::from(42).value(), 42);
    }

    #[test]
    fn degraded_and_silent_zero_predicates() {
        assert!(Encoding::empty(EmptyReason::NegativeValue).is_degraded());
        assert!(Encoding::empty(EmptyReason::RadixOutOfRange).is_degraded());
        // "0" is a real encoding, not the degraded empty text.
        assert!(!Encoding::digits("0").is_degraded());

        assert!(
            Decoding::SilentZero {
                reason: SilentZeroReason::EmptyInput
            }
            .is_silent_zero()
        );
        assert!(!Decoding::from(0).is_silent_zero());
    }

    #[test]
    fn serialized_shape() {
        assert_eq!(
            serde_json::to_value(Encoding::digits("4;15")).unwrap(),
            json!({"status": "digits", "text": "4;15"})
        );
        assert_eq!(
            serde_json::to_value(Encoding::empty(EmptyReason::RadixOutOfRange)).unwrap(),
            json!({"status": "empty", "reason": "radix_out_of_range"})
        );
        assert_eq!(
            serde_json::to_value(Decoding::SilentZero {
                reason: SilentZeroReason::GroupOutOfRange
            })
            .unwrap(),
            json!({"status": "silent_zero", "reason": "group_out_of_range"})
        );
    }
}
