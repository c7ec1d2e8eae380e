//! Support operations for curve calculation.

/// Convert a flag into `0` or `1`.
#[inline]
pub const fn b2i(flag: bool) -> u8 {
    if flag { 1 } else { 0 }
}

/// Classify `n` as an exact power of three (`3^k`, `k >= 0`).
///
/// Divides by three until the value drops below one, so values that are merely
/// close to a power of three (`8.9999`, `9.00001`) are rejected. Every integer
/// up to `2^53` is exact in `f64`; wider integers should go through
/// [`is_power_of_three_u64`].
pub fn is_power_of_three(mut n: f64) -> bool {
    while n >= 1.0 {
        if n == 1.0 {
            return true;
        }
        n /= 3.0;
    }
    false
}

/// Integer form of [`is_power_of_three`], exact over the whole `u64` range.
pub const fn is_power_of_three_u64(mut n: u64) -> bool {
    if n == 0 {
        return false;
    }
    while n % 3 == 0 {
        n /= 3;
    }
    n == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_powers_of_three() {
        for n in [1.0, 3.0, 9.0, 27.0, 59049.0] {
            assert!(is_power_of_three(n), "{n} should be a power of three");
        }
        for n in [0.0, -1.0, 2.0, 4.0, 3.1, 8.9999, 9.00001] {
            assert!(!is_power_of_three(n), "{n} should not be a power of three");
        }
    }

    #[test]
    fn integer_classification_matches_float() {
        for n in 0u64..1000 {
            assert_eq!(is_power_of_three_u64(n), is_power_of_three(n as f64), "{n}");
        }
        assert!(is_power_of_three_u64(3u64.pow(40)));
        assert!(!is_power_of_three_u64(3u64.pow(40) + 2));
        assert!(!is_power_of_three_u64(u64::MAX));
    }

    #[test]
    fn flags() {
        assert_eq!(b2i(true), 1);
        assert_eq!(b2i(false), 0);
    }
}
