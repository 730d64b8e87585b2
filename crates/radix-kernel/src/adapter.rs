//! The shared conversion contract and the adapter over both families.
//!
//! ```text
//! text ──decode(source family)──▶ i64 ──encode(target family)──▶ text
//! ```
//!
//! The decimal value is the only interchange form: `convert` always goes
//! through it, even when both radices are consecutive.

use crate::consecutive::ConsecutiveRadix;
use crate::error::ConversionError;
use crate::outcome::{Decoding, Encoding};
use crate::radix::RadixFamily;
use crate::sexagesimal::SexagesimalConverter;

/// Conversions between decimal values and text in some radix.
///
/// Each operation keeps the failure policy of the family that serves it:
/// encoders degrade to [`Encoding::Empty`], consecutive decoding fails with
/// [`ConversionError`], sexagesimal decoding yields
/// [`Decoding::SilentZero`].
pub trait Converter {
    /// Encode a decimal `value` in `radix`.
    fn encode(&self, value: i64, radix: u32) -> Encoding;

    /// Decode `text` written in `radix`.
    fn decode(&self, text: &str, radix: u32) -> Result<Decoding, ConversionError>;

    /// Re-encode `text` from `source` radix into `target` radix.
    fn convert(&self, text: &str, source: u32, target: u32) -> Result<Encoding, ConversionError> {
        let decimal = self.decode(text, source)?;
        Ok(self.encode(decimal.value(), target))
    }
}

impl Converter for ConsecutiveRadix {
    fn encode(&self, value: i64, radix: u32) -> Encoding {
        ConsecutiveRadix::encode(self, value, radix)
    }

    fn decode(&self, text: &str, radix: u32) -> Result<Decoding, ConversionError> {
        ConsecutiveRadix::decode(self, text, radix).map(Decoding::from)
    }
}

/// Presents both families behind [`Converter`], dispatching on the radix.
///
/// Radix 60 goes to the sexagesimal converter; every other radix goes to
/// the consecutive converter, which rejects or degrades values outside
/// `2..=36` under its own policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionAdapter {
    consecutive: ConsecutiveRadix,
    sexagesimal: SexagesimalConverter,
}

impl Converter for ConversionAdapter {
    fn encode(&self, value: i64, radix: u32) -> Encoding {
        match RadixFamily::for_radix(radix) {
            RadixFamily::Sexagesimal => self.sexagesimal.encode(value),
            RadixFamily::Consecutive => self.consecutive.encode(value, radix),
        }
    }

    fn decode(&self, text: &str, radix: u32) -> Result<Decoding, ConversionError> {
        match RadixFamily::for_radix(radix) {
            RadixFamily::Sexagesimal => Ok(self.sexagesimal.decode(text)),
            RadixFamily::Consecutive => self.consecutive.decode(text, radix).map(Decoding::from),
        }
    }

    fn convert(&self, text: &str, source: u32, target: u32) -> Result<Encoding, ConversionError> {
        let source_family = RadixFamily::for_radix(source);
        let target_family = RadixFamily::for_radix(target);
        if source_family != target_family {
            tracing::debug!(
                source,
                target,
                %source_family,
                %target_family,
                "bridging radix families through decimal"
            );
        }

        // A silent zero from the source carries forward as the value zero.
        let decimal = self.decode(text, source)?;
        Ok(self.encode(decimal.value(), target))
    }
}
