//! Arbitrary precision numbers stored in the type arena.
//!
//! The arena never runs destructors, so heap-backed `BigUint`/`BigRational`
//! values are copied into it as little-endian `u32` digit slices and rebuilt
//! on demand.

use core::fmt;

use bumpalo::Bump;
use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;

/// An unsigned integer of any size, borrowed from the arena.
///
/// Digits are normalized (no trailing zero digits), so digit-wise equality is
/// value equality.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ArenaUint<'a>(&'a [u32]);

impl<'a> ArenaUint<'a> {
    pub fn alloc(arena: &'a Bump, value: &BigUint) -> Self {
        Self(arena.alloc_slice_copy(&value.to_u32_digits()))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_slice(self.0)
    }

    /// The value, if it fits into a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        match self.0 {
            [] => Some(0),
            [lo] => Some(u64::from(*lo)),
            [lo, hi] => Some(u64::from(*lo) | (u64::from(*hi) << 32)),
            _ => None,
        }
    }
}

impl fmt::Debug for ArenaUint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_biguint(), f)
    }
}

impl fmt::Display for ArenaUint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_biguint(), f)
    }
}

/// An exact rational number, borrowed from the arena.
///
/// Stored in lowest terms with a positive denominator, so the derived
/// equality is value equality.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ArenaRational<'a> {
    negative: bool,
    numer: ArenaUint<'a>,
    denom: ArenaUint<'a>,
}

impl<'a> ArenaRational<'a> {
    pub fn alloc(arena: &'a Bump, value: &BigRational) -> Self {
        // `Ratio::new_raw` keeps any form; lowest terms put the sign on the numerator.
        let value = value.reduced();
        let (sign, numer) = value.numer().clone().into_parts();
        let denom = value.denom().magnitude();
        Self {
            negative: sign == Sign::Minus,
            numer: ArenaUint::alloc(arena, &numer),
            denom: ArenaUint::alloc(arena, denom),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_integer(&self) -> bool {
        self.denom.to_u64() == Some(1)
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn numer(&self) -> BigInt {
        let sign = if self.numer.is_zero() {
            Sign::NoSign
        } else if self.negative {
            Sign::Minus
        } else {
            Sign::Plus
        };
        BigInt::from_biguint(sign, self.numer.to_biguint())
    }

    pub fn denom(&self) -> BigInt {
        BigInt::from_biguint(Sign::Plus, self.denom.to_biguint())
    }

    pub fn to_big_rational(&self) -> BigRational {
        // The stored value is already in lowest terms.
        BigRational::new_raw(self.numer(), self.denom())
    }
}

impl fmt::Debug for ArenaRational<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for ArenaRational<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.numer.is_zero() {
            f.write_str("-")?;
        }
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{} / {}", self.numer, self.denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use num_traits::Zero;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_rational_is_reduced() {
        let arena = Bump::new();
        let a = ArenaRational::alloc(&arena, &ratio(2, 6));
        let b = ArenaRational::alloc(&arena, &ratio(1, 3));
        assert_eq!(a, b);
        assert_eq!(a.to_big_rational(), ratio(1, 3));
    }

    #[test]
    fn test_rational_sign() {
        let arena = Bump::new();
        let a = ArenaRational::alloc(&arena, &ratio(3, -4));
        assert!(a.is_negative());
        assert_eq!(a.to_string(), "-3 / 4");
        assert_eq!(a.to_big_rational(), ratio(-3, 4));
    }

    #[test]
    fn test_rational_integer() {
        let arena = Bump::new();
        let a = ArenaRational::alloc(&arena, &ratio(84, 2));
        assert!(a.is_integer());
        assert_eq!(a.to_string(), "42");
    }

    #[test]
    fn test_unreduced_input_is_normalized() {
        let arena = Bump::new();
        let raw = |n: i64, d: i64| BigRational::new_raw(BigInt::from(n), BigInt::from(d));

        let half = ArenaRational::alloc(&arena, &raw(2, 4));
        assert_eq!(half, ArenaRational::alloc(&arena, &ratio(1, 2)));
        assert_eq!(half.to_string(), "1 / 2");

        let third = ArenaRational::alloc(&arena, &raw(1, -3));
        assert!(third.is_negative());
        assert_eq!(third.to_string(), "-1 / 3");
        assert_eq!(third.to_big_rational(), ratio(-1, 3));

        let two = ArenaRational::alloc(&arena, &raw(4, 2));
        assert!(two.is_integer());
        assert_eq!(two.to_string(), "2");
    }

    #[test]
    fn test_uint_to_u64() {
        let arena = Bump::new();
        let big = BigUint::from(u64::MAX) + 1u32;
        assert_eq!(ArenaUint::alloc(&arena, &BigUint::from(7u32)).to_u64(), Some(7));
        assert_eq!(ArenaUint::alloc(&arena, &BigUint::from(u64::MAX)).to_u64(), Some(u64::MAX));
        assert_eq!(ArenaUint::alloc(&arena, &big).to_u64(), None);
        assert!(ArenaUint::alloc(&arena, &BigUint::zero()).is_zero());
    }
}
