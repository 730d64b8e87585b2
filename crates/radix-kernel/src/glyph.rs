//! Glyph table for the consecutive radices.

/// The glyphs in digit-value order. Index `i` is the glyph for digit `i`.
pub const GLYPHS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const GLYPH_BYTES: &[u8] = GLYPHS.as_bytes();

/// The glyph for `digit`, defined for `0..=35`.
pub fn glyph_of(digit: u32) -> Option<char> {
    GLYPH_BYTES.get(digit as usize).map(|&b| char::from(b))
}

/// The digit value of `glyph`, or `None` if it is not in the alphabet.
///
/// Lowercase letters are not in the alphabet; decoders uppercase first.
pub fn value_of(glyph: char) -> Option<u32> {
    match glyph {
        '0'..='9' => Some(glyph as u32 - '0' as u32),
        'A'..='Z' => Some(glyph as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_bijective() {
        for digit in 0..36 {
            let glyph = glyph_of(digit).expect("digit in table");
            assert_eq!(value_of(glyph), Some(digit));
        }
        assert_eq!(GLYPHS.chars().count(), 36);
    }

    #[test]
    fn out_of_table() {
        assert_eq!(glyph_of(36), None);
        assert_eq!(value_of('a'), None);
        assert_eq!(value_of(';'), None);
        assert_eq!(value_of('é'), None);
        // Zero is found, not confused with "missing".
        assert_eq!(value_of('0'), Some(0));
    }
}
