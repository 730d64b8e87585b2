//! Conversions for base 60.
//!
//! No consecutive glyph set covers sixty values, so each digit is written
//! as a decimal group and groups are separated by `;`, following Aaboe's
//! notation for Babylonian numbers: `1;0` is 60 and `1;0;0` is 3600.

use crate::outcome::{Decoding, EmptyReason, Encoding, SilentZeroReason};
use crate::positional::{compose, decompose};
use crate::radix::{SEXAGESIMAL_DELIMITER, SEXAGESIMAL_RADIX};

/// Stateless converter between decimal values and sexagesimal text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SexagesimalConverter;

impl SexagesimalConverter {
    /// Encode `value` as `;`-separated groups, most significant first.
    ///
    /// Negative values degrade to the empty result. Zero encodes as `"0"`.
    pub fn encode(&self, value: i64) -> Encoding {
        if value < 0 {
            tracing::trace!(value, "negative value, sexagesimal encoding degraded");
            return Encoding::empty(EmptyReason::NegativeValue);
        }

        let mut text = String::new();
        for (index, group) in decompose(value, SEXAGESIMAL_RADIX).into_iter().enumerate() {
            if index > 0 {
                text.push(SEXAGESIMAL_DELIMITER);
            }
            text.push_str(&group.to_string());
        }
        Encoding::digits(text)
    }

    /// Decode `;`-separated groups into a decimal value.
    ///
    /// Never fails. Empty text, a group that is not a run of decimal digits,
    /// a group outside `0..=59`, or a value beyond `i64` all yield
    /// [`Decoding::SilentZero`].
    pub fn decode(&self, text: &str) -> Decoding {
        if text.is_empty() {
            return silent_zero(SilentZeroReason::EmptyInput);
        }

        let mut groups = Vec::new();
        for group in text.split(SEXAGESIMAL_DELIMITER) {
            match parse_group(group) {
                Ok(digit) => groups.push(digit),
                Err(reason) => return silent_zero(reason),
            }
        }

        match compose(&groups, SEXAGESIMAL_RADIX) {
            Some(value) => Decoding::Value { value },
            None => silent_zero(SilentZeroReason::Overflow),
        }
    }
}

fn silent_zero(reason: SilentZeroReason) -> Decoding {
    tracing::trace!(?reason, "sexagesimal decode fell back to zero");
    Decoding::SilentZero { reason }
}

fn parse_group(group: &str) -> Result<u32, SilentZeroReason> {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SilentZeroReason::MalformedGroup);
    }
    // A digit run too long for u64 is still a number, just far out of range.
    match group.parse::<u64>() {
        Ok(digit) if digit < u64::from(SEXAGESIMAL_RADIX) => Ok(digit as u32),
        _ => Err(SilentZeroReason::GroupOutOfRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: SexagesimalConverter = SexagesimalConverter;

    fn zero_because(reason: SilentZeroReason) -> Decoding {
        Decoding::SilentZero { reason }
    }

    #[test]
    fn encode_known_values() {
        assert_eq!(S.encode(59).as_str(), "59");
        assert_eq!(S.encode(60).as_str(), "1;0");
        assert_eq!(S.encode(255).as_str(), "4;15");
        assert_eq!(S.encode(3599).as_str(), "59;59");
        assert_eq!(S.encode(3661).as_str(), "1;1;1");
    }

    #[test]
    fn encode_3600_has_three_groups_and_no_stray_delimiters() {
        let text = S.encode(3600).into_string();
        assert_eq!(text, "1;0;0");
        assert!(!text.starts_with(SEXAGESIMAL_DELIMITER));
        assert!(!text.ends_with(SEXAGESIMAL_DELIMITER));
    }

    #[test]
    fn encode_zero_and_negative() {
        assert_eq!(S.encode(0), Encoding::digits("0"));
        assert_eq!(S.encode(-1), Encoding::empty(EmptyReason::NegativeValue));
        assert_eq!(S.encode(i64::MIN).as_str(), "");
    }

    #[test]
    fn decode_known_values() {
        assert_eq!(S.decode("1;0;0"), Decoding::from(3600));
        assert_eq!(S.decode("4;15"), Decoding::from(255));
        assert_eq!(S.decode("59;0"), Decoding::from(3540));
        assert_eq!(S.decode("0"), Decoding::from(0));
        assert_eq!(S.decode("007;01"), Decoding::from(421));
    }

    #[test]
    fn decode_empty_is_silent_zero() {
        assert_eq!(S.decode(""), zero_because(SilentZeroReason::EmptyInput));
        assert_eq!(S.decode("").value(), 0);
    }

    #[test]
    fn decode_group_bound_is_fifty_nine() {
        assert_eq!(S.decode("59"), Decoding::from(59));
        assert_eq!(S.decode("60;0"), zero_because(SilentZeroReason::GroupOutOfRange));
        assert_eq!(S.decode("61;0"), zero_because(SilentZeroReason::GroupOutOfRange));
        assert_eq!(S.decode("61;0").value(), 0);
        assert_eq!(
            S.decode("1;99999999999999999999999"),
            zero_because(SilentZeroReason::GroupOutOfRange)
        );
    }

    #[test]
    fn decode_malformed_groups_are_silent_zero() {
        for text in ["1;a", "1;;2", "1;", ";1", "-1", "+5", " 1", "1,0"] {
            assert_eq!(
                S.decode(text),
                zero_because(SilentZeroReason::MalformedGroup),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn decode_overflow_is_silent_zero() {
        let text = ["59"; 12].join(";");
        assert_eq!(S.decode(&text), zero_because(SilentZeroReason::Overflow));
    }

    #[test]
    fn round_trip() {
        for value in (0..10_000).chain([216_000, 12_960_000, i64::MAX]) {
            let encoded = S.encode(value);
            assert_eq!(S.decode(encoded.as_str()), Decoding::from(value));
        }
    }
}
