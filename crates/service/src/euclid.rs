//! Step-recording Euclidean algorithm.
//!
//! The single piece of algorithmic content in this service: given two
//! strictly positive integers, produce the ordered division trace and the
//! greatest common divisor. Pure and deterministic; positivity is enforced
//! upstream at the request boundary.

use serde::{Deserialize, Serialize};

/// One iteration of the division-based algorithm, recording dividend,
/// divisor, quotient and remainder. Invariant: `a = quotient * b + remainder`
/// with `0 <= remainder < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcdStep {
    pub a: u64,
    pub b: u64,
    pub quotient: u64,
    pub remainder: u64,
}

/// Compute `gcd(a, b)` with the full division trace.
///
/// Operands are swapped once up front so the dividend starts no smaller than
/// the divisor; equal inputs therefore yield exactly one step `(a, a, 1, 0)`.
///
/// # Examples
/// ```
/// let (result, steps) = service::euclid::compute(48, 18);
/// assert_eq!(result, 6);
/// assert_eq!(steps.len(), 3);
/// ```
pub fn compute(mut a: u64, mut b: u64) -> (u64, Vec<GcdStep>) {
    let mut steps = Vec::new();
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }
    while b != 0 {
        let quotient = a / b;
        let remainder = a % b;
        steps.push(GcdStep { a, b, quotient, remainder });
        a = b;
        b = remainder;
    }
    (a, steps)
}

#[cfg(test)]
mod tests {
    use super::{compute, GcdStep};

    fn reference_gcd(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

    fn assert_trace(steps: &[GcdStep], expected: &[(u64, u64, u64, u64)]) {
        let got: Vec<(u64, u64, u64, u64)> =
            steps.iter().map(|s| (s.a, s.b, s.quotient, s.remainder)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn gcd_48_18() {
        let (result, steps) = compute(48, 18);
        assert_eq!(result, 6);
        assert_trace(&steps, &[(48, 18, 2, 12), (18, 12, 1, 6), (12, 6, 2, 0)]);
    }

    #[test]
    fn gcd_100_35() {
        let (result, steps) = compute(100, 35);
        assert_eq!(result, 5);
        assert_trace(&steps, &[(100, 35, 2, 30), (35, 30, 1, 5), (30, 5, 6, 0)]);
    }

    #[test]
    fn equal_inputs_yield_single_step() {
        let (result, steps) = compute(7, 7);
        assert_eq!(result, 7);
        assert_trace(&steps, &[(7, 7, 1, 0)]);
    }

    #[test]
    fn operands_are_swapped_once() {
        // Same trace regardless of argument order
        let (r1, s1) = compute(18, 48);
        let (r2, s2) = compute(48, 18);
        assert_eq!(r1, r2);
        assert_eq!(s1, s2);
    }

    #[test]
    fn one_divides_everything() {
        let (result, steps) = compute(1, 982_451_653);
        assert_eq!(result, 1);
        assert_eq!(steps.last().map(|s| s.remainder), Some(0));
    }

    #[test]
    fn matches_reference_and_holds_step_invariant() {
        let samples: &[(u64, u64)] = &[
            (1, 1),
            (2, 3),
            (17, 5),
            (48, 18),
            (100, 35),
            (270, 192),
            (1_000_000, 1),
            (7_919, 7_907),
            (6_765, 10_946), // consecutive Fibonacci numbers: worst case
            (u64::from(u32::MAX), 600_851_475_143),
        ];
        for &(a, b) in samples {
            let (result, steps) = compute(a, b);
            assert_eq!(result, reference_gcd(a, b), "gcd({a}, {b})");
            assert_eq!(a % result, 0);
            assert_eq!(b % result, 0);
            for step in &steps {
                assert_eq!(step.a, step.quotient * step.b + step.remainder);
                assert!(step.remainder < step.b);
            }
            // Result equals the last step's divisor
            assert_eq!(steps.last().map(|s| s.b), Some(result));
        }
    }
}
