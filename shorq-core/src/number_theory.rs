//! Number-theoretic helpers for Shor's algorithm
//!
//! Everything here works on native `u64` values. The routines are the
//! textbook versions (trial division, Euclid, square-and-multiply, continued
//! fractions); the targets a classical state-vector simulation can handle are
//! small enough that nothing cleverer is needed.

use crate::error::ArithmeticError;
use crate::Result;

/// Smallest exponent tried when searching for `q`, i.e. `q >= 256`
const MIN_Q_EXPONENT: u32 = 8;

/// Returns true when `n` is divisible by two
#[inline]
pub fn is_even(n: u64) -> bool {
    n % 2 == 0
}

/// Primality by trial division over `2..=floor(sqrt(n))`
///
/// Like the trial-division definition it mirrors, `0` and `1` have no
/// divisor in that range and are therefore reported as prime.
///
/// # Example
/// ```
/// use shorq_core::is_prime;
///
/// assert!(is_prime(17));
/// assert!(!is_prime(15));
/// ```
pub fn is_prime(n: u64) -> bool {
    smallest_factor(n).is_none()
}

/// Returns true when `n == j^i` for its smallest factor `j` and some `i >= 2`
///
/// The search only runs when a factor `j <= sqrt(n)` exists. Primes have
/// none, so they are never prime powers here; callers screen primes first
/// with [`is_prime`].
///
/// # Example
/// ```
/// use shorq_core::is_prime_power;
///
/// assert!(is_prime_power(9));
/// assert!(is_prime_power(125));
/// assert!(!is_prime_power(15));
/// ```
pub fn is_prime_power(n: u64) -> bool {
    let Some(j) = smallest_factor(n) else {
        return false;
    };

    let max_exponent = n.ilog(j) + 1;
    let mut power = j;
    for _ in 2..=max_exponent {
        power = match power.checked_mul(j) {
            Some(next) => next,
            None => return false,
        };
        if power == n {
            return true;
        }
        if power > n {
            return false;
        }
    }

    false
}

/// Greatest common divisor by repeated remainder
///
/// # Errors
/// Returns [`ArithmeticError::ZeroOperand`] when either operand is zero.
///
/// # Example
/// ```
/// use shorq_core::gcd;
///
/// assert_eq!(gcd(48, 18).unwrap(), 6);
/// assert!(gcd(7, 0).is_err());
/// ```
pub fn gcd(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Err(ArithmeticError::zero_operand(a, b));
    }

    let (mut a, mut b) = (a, b);
    while a % b != 0 {
        let d = a % b;
        a = b;
        b = d;
    }

    Ok(b)
}

/// Number of bits needed to represent `a` (zero needs none)
#[inline]
pub fn bit_length(a: u64) -> u32 {
    u64::BITS - a.leading_zeros()
}

/// Smallest `q = 2^k` (with `k >= 8`) such that `q >= n^2`
///
/// For `n >= 12` this gives `n^2 <= q < 2n^2`; below that the floor of 256
/// dominates.
///
/// # Errors
/// Returns [`ArithmeticError::Overflow`] when `q` would not fit in a `u64`.
pub fn smallest_power_of_two_at_least_square(n: u64) -> Result<u64> {
    let square = u128::from(n) * u128::from(n);
    let mut exponent = MIN_Q_EXPONENT;

    while (1u128 << exponent) < square {
        exponent += 1;
        if exponent >= u64::BITS {
            return Err(ArithmeticError::overflow("power-of-two search", n));
        }
    }

    Ok(1u64 << exponent)
}

/// Computes `x^a mod n` by square-and-multiply
///
/// `x^a` itself is never formed; intermediate products are taken in `u128`
/// so any `u64` modulus is safe.
///
/// # Errors
/// Returns [`ArithmeticError::ZeroModulus`] when `n == 0`.
///
/// # Example
/// ```
/// use shorq_core::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000).unwrap(), 24);
/// assert_eq!(mod_pow(7, 0, 15).unwrap(), 1);
/// ```
pub fn mod_pow(x: u64, a: u64, n: u64) -> Result<u64> {
    if n == 0 {
        return Err(ArithmeticError::ZeroModulus);
    }

    let modulus = u128::from(n);
    let mut value = 1u128 % modulus;
    let mut base = u128::from(x) % modulus;
    let mut exponent = a;

    while exponent > 0 {
        if exponent & 1 == 1 {
            value = value * base % modulus;
        }
        base = base * base % modulus;
        exponent >>= 1;
    }

    // value < n, so it fits back into a u64
    Ok(value as u64)
}

/// Denominator of the best rational approximation to `c` below `qmax`
///
/// Walks the continued-fraction expansion of `c` with the convergent
/// recurrence `q2 = floor(y) * q1 + q0`, stopping once the fractional
/// remainder drops under `0.5 / qmax^2` or the next denominator would reach
/// `qmax`. Non-finite input yields `1`.
///
/// # Example
/// ```
/// use shorq_core::best_denominator;
///
/// assert_eq!(best_denominator(1.0 / 3.0, 10), 3);
/// assert_eq!(best_denominator(0.75, 256), 4);
/// ```
pub fn best_denominator(c: f64, qmax: u64) -> u64 {
    if !c.is_finite() {
        return 1;
    }

    let qmax_f = qmax as f64;
    let threshold = 0.5 / (qmax_f * qmax_f);

    let mut y = c;
    let mut q0: u64 = 0;
    let mut q1: u64 = 1;

    loop {
        let z = y - y.floor();
        if z < threshold || z == 0.0 {
            return q1;
        }

        y = 1.0 / z;
        let q2 = (y.floor() as u64).saturating_mul(q1).saturating_add(q0);
        if q2 >= qmax {
            return q1;
        }

        q0 = q1;
        q1 = q2;
    }
}

/// Numerator `p` that pairs with `den` in the approximation `p / den ≈ c`
#[inline]
pub fn numerator_for(c: f64, den: u64) -> u64 {
    (den as f64 * c + 0.5).floor() as u64
}

/// Smallest `j` in `2..=floor(sqrt(n))` dividing `n`
fn smallest_factor(n: u64) -> Option<u64> {
    let mut i: u64 = 2;
    while i <= n / i {
        if n % i == 0 {
            return Some(i);
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_even() {
        assert!(is_even(0));
        assert!(is_even(14));
        assert!(!is_even(15));
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(15));
        assert!(is_prime(17));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(49));
        assert!(is_prime(97));
    }

    #[test]
    fn test_is_prime_trivial_inputs() {
        // No divisor exists in 2..=sqrt(n)
        assert!(is_prime(0));
        assert!(is_prime(1));
    }

    #[test]
    fn test_is_prime_power() {
        assert!(is_prime_power(9));
        assert!(is_prime_power(27));
        assert!(is_prime_power(49));
        assert!(is_prime_power(1024));
        assert!(!is_prime_power(15));
        assert!(!is_prime_power(21));
        assert!(!is_prime_power(45));
    }

    #[test]
    fn test_is_prime_power_skips_primes() {
        assert!(!is_prime_power(13));
        assert!(!is_prime_power(2));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(48, 18).unwrap(), 6);
        assert_eq!(gcd(18, 48).unwrap(), 6);
        assert_eq!(gcd(17, 5).unwrap(), 1);
        assert_eq!(gcd(15, 15).unwrap(), 15);
        assert_eq!(gcd(15, 1).unwrap(), 1);
    }

    #[test]
    fn test_gcd_zero_operand() {
        assert_eq!(gcd(15, 0), Err(ArithmeticError::ZeroOperand { a: 15, b: 0 }));
        assert_eq!(gcd(0, 15), Err(ArithmeticError::ZeroOperand { a: 0, b: 15 }));
        assert!(gcd(0, 0).is_err());
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(15), 4);
        assert_eq!(bit_length(16), 5);
        assert_eq!(bit_length(256), 9);
        assert_eq!(bit_length(u64::MAX), 64);
    }

    #[test]
    fn test_smallest_power_of_two() {
        assert_eq!(smallest_power_of_two_at_least_square(3).unwrap(), 256);
        assert_eq!(smallest_power_of_two_at_least_square(15).unwrap(), 256);
        assert_eq!(smallest_power_of_two_at_least_square(16).unwrap(), 256);
        assert_eq!(smallest_power_of_two_at_least_square(17).unwrap(), 512);
        assert_eq!(smallest_power_of_two_at_least_square(21).unwrap(), 512);
        assert_eq!(smallest_power_of_two_at_least_square(35).unwrap(), 2048);
    }

    #[test]
    fn test_smallest_power_of_two_overflow() {
        assert!(smallest_power_of_two_at_least_square(u64::MAX).is_err());
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(2, 10, 1000).unwrap(), 24);
        assert_eq!(mod_pow(7, 4, 15).unwrap(), 1);
        assert_eq!(mod_pow(7, 2, 15).unwrap(), 4);
        assert_eq!(mod_pow(5, 0, 7).unwrap(), 1);
        assert_eq!(mod_pow(5, 3, 1).unwrap(), 0);
        assert_eq!(mod_pow(u64::MAX, 2, u64::MAX - 1).unwrap(), 1);
    }

    #[test]
    fn test_mod_pow_zero_modulus() {
        assert_eq!(mod_pow(3, 3, 0), Err(ArithmeticError::ZeroModulus));
    }

    #[test]
    fn test_best_denominator() {
        assert_eq!(best_denominator(1.0 / 3.0, 10), 3);
        assert_eq!(best_denominator(0.5, 256), 2);
        assert_eq!(best_denominator(0.0, 256), 1);
        // 192 / 256 = 3 / 4
        assert_eq!(best_denominator(192.0 / 256.0, 256), 4);
        // 85 / 256 is closest to 1 / 3
        assert_eq!(best_denominator(85.0 / 256.0, 256), 3);
    }

    #[test]
    fn test_best_denominator_respects_bound() {
        // 1/7 needs denominator 7, which the bound excludes
        assert!(best_denominator(1.0 / 7.0, 5) < 5);
    }

    #[test]
    fn test_best_denominator_non_finite() {
        assert_eq!(best_denominator(f64::NAN, 256), 1);
        assert_eq!(best_denominator(f64::INFINITY, 256), 1);
    }

    #[test]
    fn test_numerator_for() {
        assert_eq!(numerator_for(0.75, 4), 3);
        assert_eq!(numerator_for(85.0 / 256.0, 3), 1);
        assert_eq!(numerator_for(0.0, 5), 0);
    }

    proptest! {
        #[test]
        fn prop_gcd_divides_both(a in 1u64..1_000_000, b in 1u64..1_000_000) {
            let g = gcd(a, b).unwrap();
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
            prop_assert_eq!(gcd(a / g, b / g).unwrap(), 1);
        }

        #[test]
        fn prop_mod_pow_matches_repeated_multiplication(
            x in 0u64..1000,
            a in 0u64..64,
            n in 1u64..1000,
        ) {
            let mut expected = 1 % n;
            for _ in 0..a {
                expected = expected * (x % n) % n;
            }
            prop_assert_eq!(mod_pow(x, a, n).unwrap(), expected);
        }

        #[test]
        fn prop_q_brackets_square(n in 12u64..100_000) {
            let q = smallest_power_of_two_at_least_square(n).unwrap();
            let square = n * n;
            prop_assert!(q.is_power_of_two());
            prop_assert!(square <= q);
            prop_assert!(q < 2 * square);
        }

        #[test]
        fn prop_bit_length_bounds(a in 1u64..u64::MAX) {
            let bits = bit_length(a);
            prop_assert!(a >> (bits - 1) == 1);
        }

        #[test]
        fn prop_best_denominator_recovers_small_fractions(p in 1u64..20, r in 2u64..20) {
            prop_assume!(p < r && gcd(p, r).unwrap() == 1);
            prop_assert_eq!(best_denominator(p as f64 / r as f64, 1024), r);
        }
    }
}
