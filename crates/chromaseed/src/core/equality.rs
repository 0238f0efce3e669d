/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// An optional third argument overrides the default rounding factor, which
/// compares nine fractional digits. Use `1e4` to compare against values
/// published with four fractional digits.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        $crate::assert_close_enough!($f1, $f2, $crate::ROUNDING_FACTOR)
    };
    ($f1:expr, $f2:expr, $factor:expr $(,)?) => {
        let (f1, f2): (f64, f64) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1, $factor);
        let bits2 = $crate::to_eq_bits(f2, $factor);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// The default rounding factor for [`to_eq_bits`].
#[doc(hidden)]
pub const ROUNDING_FACTOR: f64 = 1e9;

/// Normalize the floating point number and return its bits.
///
/// This function zeroes out not-a-number, reduces the precision by
/// multiplying with the factor and rounding, and turns negative zero into
/// positive zero. It is only public because the [`assert_close_enough`] test
/// macro uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: f64, factor: f64) -> u64 {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (factor * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

// ====================================================================================================================
