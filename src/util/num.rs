/// Converts an `i64` to the nearest `f64`.
///
/// Magnitudes above `2^53` are rounded to the nearest representable value.
///
/// # Example
/// ```
/// use waju::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(i64::MAX), 9_223_372_036_854_775_808.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an exponent to `u32` for integer exponentiation.
///
/// Returns `None` for negative exponents and exponents too large for
/// [`i64::checked_pow`].
#[must_use]
pub fn i64_to_u32_exponent(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}
