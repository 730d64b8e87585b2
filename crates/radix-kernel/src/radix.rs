//! Radix constants and family selection.
//!
//! Two numbering families share one conversion contract:
//!
//! - **Consecutive**: radices 2 through 36, one glyph per digit.
//! - **Sexagesimal**: radix 60, digits written as `;`-separated decimal groups.
//!
//! The family for a conversion is a pure function of the radix.

/// The smallest supported radix.
pub const MINIMUM_RADIX: u32 = 2;

/// The largest radix with a consecutive single-glyph alphabet.
pub const MAXIMUM_CONSECUTIVE_RADIX: u32 = 36;

/// Base 60.
pub const SEXAGESIMAL_RADIX: u32 = 60;

/// Separates the decimal groups of a sexagesimal number.
pub const SEXAGESIMAL_DELIMITER: char = ';';

/// Returns true if `radix` lies in the consecutive range `2..=36`.
pub fn is_consecutive(radix: u32) -> bool {
    (MINIMUM_RADIX..=MAXIMUM_CONSECUTIVE_RADIX).contains(&radix)
}

/// The numbering family a radix belongs to.
///
/// Selection never fails: anything other than 60 is routed to the
/// consecutive family, which applies its own range policy to the radix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RadixFamily {
    /// Radices 2 through 36 over the glyph alphabet.
    Consecutive,

    /// Radix 60 with delimited decimal groups.
    Sexagesimal,
}

impl RadixFamily {
    /// Select the family responsible for `radix`.
    pub fn for_radix(radix: u32) -> Self {
        if radix == SEXAGESIMAL_RADIX {
            Self::Sexagesimal
        } else {
            Self::Consecutive
        }
    }
}

impl std::fmt::Display for RadixFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Consecutive => write!(f, "consecutive"),
            Self::Sexagesimal => write!(f, "sexagesimal"),
        }
    }
}
