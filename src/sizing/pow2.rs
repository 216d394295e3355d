//! Branch-free power-of-two rounding.

/// Returns the smallest power of two greater than or equal to `n`.
///
/// Exact powers of two map to themselves and `0` maps to `0`. The
/// computation is the classic bit smear: decrement, fold every set bit into
/// all lower positions, increment.
///
/// `n` must not exceed `1 << 63`; larger inputs have no representable
/// answer and overflow (a panic in debug builds).
///
/// # Example
///
/// ```
/// use scratchio::least_power_of_two;
///
/// assert_eq!(least_power_of_two(0), 0);
/// assert_eq!(least_power_of_two(1000), 1024);
/// assert_eq!(least_power_of_two(1024), 1024);
/// assert_eq!(least_power_of_two(1025), 2048);
/// ```
#[inline]
pub const fn least_power_of_two(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut v = n - 1;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v |= v >> 32;
    v + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        assert_eq!(least_power_of_two(0), 0);
    }

    #[test]
    fn test_exact_powers_map_to_themselves() {
        for shift in 0..64 {
            let p = 1u64 << shift;
            assert_eq!(least_power_of_two(p), p, "2^{shift}");
        }
    }

    #[test]
    fn test_every_value_in_alternate_octaves() {
        // Every input in (2^(k-1), 2^k] rounds to 2^k.
        for k in (1..22).step_by(2) {
            let target = 1u64 << k;
            for n in (target >> 1) + 1..=target {
                assert_eq!(least_power_of_two(n), target, "n = {n}");
            }
        }
    }

    #[test]
    fn test_upper_half_of_u64() {
        let top = 1u64 << 63;
        assert_eq!(least_power_of_two(top), top);
        assert_eq!(least_power_of_two(top - 1), top);
        assert_eq!(least_power_of_two((1u64 << 62) + 1), top);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_overflow_is_a_precondition_violation() {
        let _ = least_power_of_two((1u64 << 63) + 1);
    }

    proptest! {
        #[test]
        fn smallest_power_not_below(n in 1u64..=(1u64 << 63)) {
            let p = least_power_of_two(n);
            prop_assert!(p.is_power_of_two());
            prop_assert!(p >= n);
            // The next smaller power of two is already too small.
            prop_assert!(p == 1 || p / 2 < n);
            prop_assert_eq!(p, n.next_power_of_two());
        }
    }
}
