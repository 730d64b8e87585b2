//! Conversions for the consecutive radices 2 through 36.
//!
//! Each digit is one glyph from [`crate::glyph::GLYPHS`]; 36 is the limit
//! because there are no further consecutive glyphs.

use crate::error::ConversionError;
use crate::glyph::{glyph_of, value_of};
use crate::outcome::{EmptyReason, Encoding};
use crate::positional::{compose, decompose};
use crate::radix::is_consecutive;

/// Stateless converter between decimal values and radices `2..=36`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsecutiveRadix;

impl ConsecutiveRadix {
    /// Encode `value` in `radix`, most significant glyph first.
    ///
    /// A negative value or a radix outside `2..=36` degrades to the empty
    /// result. Zero encodes as `"0"`.
    pub fn encode(&self, value: i64, radix: u32) -> Encoding {
        if value < 0 {
            tracing::trace!(value, radix, "negative value, encoding degraded");
            return Encoding::empty(EmptyReason::NegativeValue);
        }
        if !is_consecutive(radix) {
            tracing::trace!(value, radix, "radix out of range, encoding degraded");
            return Encoding::empty(EmptyReason::RadixOutOfRange);
        }

        // Every digit is below the radix, so every digit has a glyph.
        let text: String = decompose(value, radix)
            .into_iter()
            .filter_map(glyph_of)
            .collect();
        Encoding::digits(text)
    }

    /// Decode `text` written in `radix`. Lowercase glyphs are accepted.
    ///
    /// Fails with an invalid-argument error for a radix outside `2..=36`,
    /// empty text, or a value that does not fit `i64`. Fails with a
    /// malformed-input error for any character that is not a glyph or whose
    /// value is not below the radix.
    pub fn decode(&self, text: &str, radix: u32) -> Result<i64, ConversionError> {
        if !is_consecutive(radix) {
            return Err(ConversionError::RadixOutOfRange { radix });
        }
        if text.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        let mut digits = Vec::with_capacity(text.len());
        for (position, glyph) in text.chars().enumerate() {
            match value_of(glyph.to_ascii_uppercase()) {
                Some(digit) if digit < radix => digits.push(digit),
                _ => {
                    return Err(ConversionError::MalformedDigit {
                        text: text.to_string(),
                        radix,
                        glyph,
                        position,
                    });
                }
            }
        }

        compose(&digits, radix).ok_or_else(|| ConversionError::Overflow {
            text: text.to_string(),
            radix,
        })
    }

    /// Re-encode `text` from `source` radix into `target` radix.
    pub fn convert(
        &self,
        text: &str,
        source: u32,
        target: u32,
    ) -> Result<Encoding, ConversionError> {
        let value = self.decode(text, source)?;
        Ok(self.encode(value, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const C: ConsecutiveRadix = ConsecutiveRadix;

    #[test]
    fn encode_known_values() {
        assert_eq!(C.encode(255, 16).as_str(), "FF");
        assert_eq!(C.encode(10, 2).as_str(), "1010");
        assert_eq!(C.encode(35, 36).as_str(), "Z");
        assert_eq!(C.encode(36, 36).as_str(), "10");
        assert_eq!(C.encode(i64::MAX, 16).as_str(), "7FFFFFFFFFFFFFFF");
    }

    #[test]
    fn encode_zero_is_single_zero_glyph() {
        for radix in 2..=36 {
            assert_eq!(C.encode(0, radix), Encoding::digits("0"));
        }
    }

    #[test]
    fn encode_degrades_on_invalid_input() {
        assert_eq!(C.encode(-1, 10), Encoding::empty(EmptyReason::NegativeValue));
        assert_eq!(C.encode(-1, 10).as_str(), "");
        assert_eq!(C.encode(5, 1), Encoding::empty(EmptyReason::RadixOutOfRange));
        assert_eq!(C.encode(5, 37), Encoding::empty(EmptyReason::RadixOutOfRange));
        assert_eq!(C.encode(5, 60), Encoding::empty(EmptyReason::RadixOutOfRange));
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(C.decode("ff", 16), C.decode("FF", 16));
        assert_eq!(C.decode("fF", 16).unwrap(), 255);
        assert_eq!(C.decode("z", 36).unwrap(), 35);
    }

    #[test]
    fn decode_rejects_bad_radix_and_empty_text() {
        let err = C.decode("10", 1).unwrap_err();
        assert_eq!(err, ConversionError::RadixOutOfRange { radix: 1 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = C.decode("10", 37).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = C.decode("", 10).unwrap_err();
        assert_eq!(err, ConversionError::EmptyInput);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn decode_rejects_malformed_glyphs() {
        let err = C.decode("1G", 16).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(matches!(
            err,
            ConversionError::MalformedDigit {
                glyph: 'G',
                position: 1,
                ..
            }
        ));

        assert_eq!(C.decode("13A", 10).unwrap_err().kind(), ErrorKind::MalformedInput);
        assert_eq!(C.decode("-1", 10).unwrap_err().kind(), ErrorKind::MalformedInput);
        assert_eq!(C.decode(" 1", 10).unwrap_err().kind(), ErrorKind::MalformedInput);
        assert_eq!(C.decode("ß", 36).unwrap_err().kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn decode_bounds_digits_by_radix() {
        // G is in the alphabet (value 16) but not a digit of radix 2 or 16.
        assert_eq!(C.decode("G", 2).unwrap_err().kind(), ErrorKind::MalformedInput);
        assert_eq!(C.decode("2", 2).unwrap_err().kind(), ErrorKind::MalformedInput);
        assert_eq!(C.decode("G", 17).unwrap(), 16);
    }

    #[test]
    fn decode_overflow_is_invalid_argument() {
        let err = C.decode("8000000000000000", 16).unwrap_err();
        assert!(matches!(err, ConversionError::Overflow { radix: 16, .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(C.decode("7FFFFFFFFFFFFFFF", 16).unwrap(), i64::MAX);
    }

    #[test]
    fn round_trip_every_radix() {
        for radix in 2..=36 {
            for value in (0..2_000).chain([1_i64 << 40, i64::MAX - 1, i64::MAX]) {
                let encoded = C.encode(value, radix);
                assert_eq!(C.decode(encoded.as_str(), radix), Ok(value), "radix {radix}");
            }
        }
    }

    #[test]
    fn convert_composes_decode_and_encode() {
        assert_eq!(C.convert("FF", 16, 2).unwrap().as_str(), "11111111");
        assert_eq!(C.convert("zz", 36, 10).unwrap().as_str(), "1295");
        assert_eq!(
            C.convert("10", 10, 40).unwrap(),
            Encoding::empty(EmptyReason::RadixOutOfRange)
        );
        assert_eq!(
            C.convert("19", 9, 10).unwrap_err().kind(),
            ErrorKind::MalformedInput
        );
    }
}
