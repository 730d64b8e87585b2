//! Digit extraction and composition shared by both families.
//!
//! Digits are plain values here; rendering them as glyphs or decimal groups
//! is the converter's job.

/// Split a non-negative `value` into its digits in `radix`, most significant
/// first. Zero yields a single zero digit.
pub fn decompose(value: i64, radix: u32) -> Vec<u32> {
    debug_assert!(value >= 0, "decompose requires a non-negative value");
    debug_assert!(radix >= 2, "decompose requires radix >= 2");

    let radix = i64::from(radix);
    let mut rest = value;
    let mut digits = Vec::new();
    loop {
        digits.push((rest % radix) as u32);
        rest /= radix;
        if rest == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Rebuild a value from digits given most significant first.
///
/// Scans right to left accumulating `digit * radix^position` with exact
/// checked arithmetic. Returns `None` when the value does not fit `i64`.
/// The positional weight may overflow past the top non-zero digit without
/// error, so leading zeros are harmless.
pub fn compose(digits: &[u32], radix: u32) -> Option<i64> {
    let radix = i64::from(radix);
    let mut sum: i64 = 0;
    let mut weight = Some(1_i64);

    for &digit in digits.iter().rev() {
        if digit != 0 {
            let term = weight?.checked_mul(i64::from(digit))?;
            sum = sum.checked_add(term)?;
        }
        weight = weight.and_then(|w| w.checked_mul(radix));
    }
    Some(sum)
}
