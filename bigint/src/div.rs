//! Binary long division by repeated doubling.

use std::cmp::Ordering;

use crate::blocks::{Blocks, BLOCK_BITS};
use crate::{BigInt, BigIntError};

impl BigInt {
    /// Divide `self` by `divisor`, returning the quotient and leaving the
    /// remainder in `self`.
    ///
    /// A working copy of the divisor is doubled until it is no longer below
    /// the dividend, then walked back down one bit at a time: whenever it fits
    /// into what is left of the dividend, the matching quotient bit is set and
    /// it is subtracted. O(bit-length^2).
    ///
    /// Division truncates toward zero: the quotient's sign is the XOR of the
    /// operand signs and the remainder keeps the dividend's sign. A zero
    /// divisor returns [`BigIntError::DivisionByZero`] with `self` unchanged.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let mut n = BigInt::from_u32(100);
    /// let q = n.divmod(&BigInt::from_u32(7)).unwrap();
    /// assert_eq!(q, BigInt::from_u32(14));
    /// assert_eq!(n, BigInt::from_u32(2));
    /// ```
    pub fn divmod(&mut self, divisor: &Self) -> Result<Self, BigIntError> {
        self.check_initialized()?;
        divisor.check_initialized()?;
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }

        let mut d = divisor.try_clone()?;
        let mut shift = 0usize;
        while self.compare_magnitude(&d) == Ordering::Greater {
            d.shl1()?;
            shift += 1;
        }
        log::trace!(
            "divmod: {} block dividend, {} block divisor, {shift} doublings",
            self.blocks.len(),
            divisor.blocks.len()
        );

        // sized up front so the loop below never allocates
        let mut quotient = Self {
            blocks: Blocks::zeroed(shift / BLOCK_BITS as usize + 1)?,
            negative: self.is_negative() != divisor.is_negative(),
        };
        loop {
            if self.compare_magnitude(&d) != Ordering::Less {
                quotient.set_bit_at(shift, true)?;
                self.sub_from(&d)?;
            }
            d.shr1();
            if shift == 0 {
                break;
            }
            shift -= 1;
        }

        self.normalize();
        self.clear_zero_sign();
        quotient.normalize();
        quotient.clear_zero_sign();
        Ok(quotient)
    }

    /// Truncated quotient `self / divisor`, leaving `self` as is.
    pub fn div(&self, divisor: &Self) -> Result<Self, BigIntError> {
        let mut rem = self.try_clone()?;
        rem.divmod(divisor)
    }

    /// Remainder of truncated division, with the sign of `self`.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let a = BigInt::from_i32(-10);
    /// assert_eq!(a.modulo(&BigInt::from_i32(3)).unwrap(), BigInt::from_i32(-1));
    /// ```
    pub fn modulo(&self, divisor: &Self) -> Result<Self, BigIntError> {
        let mut rem = self.try_clone()?;
        rem.divmod(divisor)?;
        Ok(rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divmod_basic() {
        let mut n = BigInt::from_u32(100);
        let q = n.divmod(&BigInt::from_u32(7)).unwrap();
        assert_eq!(q.blocks(), &[14]);
        assert_eq!(n.blocks(), &[2]);
    }

    #[test]
    fn test_divmod_exact() {
        let mut n = BigInt::from_u32(42);
        let q = n.divmod(&BigInt::from_u32(7)).unwrap();
        assert_eq!(q, BigInt::from_u32(6));
        assert!(n.is_zero());
        assert_eq!(n.blocks(), &[0]);
    }

    #[test]
    fn test_divmod_dividend_smaller() {
        let mut n = BigInt::from_u32(3);
        let q = n.divmod(&BigInt::from_u32(7)).unwrap();
        assert_eq!(q.blocks(), &[0]);
        assert_eq!(n.blocks(), &[3]);
    }

    #[test]
    fn test_divmod_equal() {
        let mut n = BigInt::from_u64(u64::MAX);
        let q = n.divmod(&BigInt::from_u64(u64::MAX)).unwrap();
        assert_eq!(q.blocks(), &[1]);
        assert!(n.is_zero());
    }

    #[test]
    fn test_divmod_by_one() {
        let mut n = BigInt::from_raw_blocks(&[7, 8, 9]).unwrap();
        let q = n.divmod(&BigInt::from_u32(1)).unwrap();
        assert_eq!(q.blocks(), &[7, 8, 9]);
        assert!(n.is_zero());
    }

    #[test]
    fn test_divmod_zero_dividend() {
        let mut n = BigInt::zero();
        let q = n.divmod(&BigInt::from_u32(5)).unwrap();
        assert!(q.is_zero());
        assert!(n.is_zero());
    }

    #[test]
    fn test_divmod_multi_block() {
        // (2^64 + 5) / 2^32 = 2^32 rem 5
        let mut n = BigInt::from_raw_blocks(&[5, 0, 1]).unwrap();
        let q = n.divmod(&BigInt::from_u64(1 << 32)).unwrap();
        assert_eq!(q.blocks(), &[0, 1]);
        assert_eq!(n.blocks(), &[5]);
    }

    #[test]
    fn test_divmod_by_zero_leaves_dividend() {
        let mut n = BigInt::from_i32(-17);
        assert_eq!(
            n.divmod(&BigInt::zero()),
            Err(BigIntError::DivisionByZero)
        );
        assert_eq!(n, BigInt::from_i32(-17));
        assert_eq!(n.blocks(), &[17]);
    }

    #[test]
    fn test_divmod_signs_truncate() {
        let mut n = BigInt::from_i32(-17);
        let q = n.divmod(&BigInt::from_i32(5)).unwrap();
        assert_eq!(q, BigInt::from_i32(-3));
        assert_eq!(n, BigInt::from_i32(-2));

        let mut n = BigInt::from_i32(17);
        let q = n.divmod(&BigInt::from_i32(-5)).unwrap();
        assert_eq!(q, BigInt::from_i32(-3));
        assert_eq!(n, BigInt::from_i32(2));

        let mut n = BigInt::from_i32(-17);
        let q = n.divmod(&BigInt::from_i32(-5)).unwrap();
        assert_eq!(q, BigInt::from_i32(3));
        assert_eq!(n, BigInt::from_i32(-2));
    }

    #[test]
    fn test_divmod_zero_results_are_non_negative() {
        let mut n = BigInt::from_i32(-10);
        let q = n.divmod(&BigInt::from_i32(5)).unwrap();
        assert!(!n.negative);
        assert_eq!(q, BigInt::from_i32(-2));

        let mut small = BigInt::from_i32(-3);
        let q = small.divmod(&BigInt::from_i32(5)).unwrap();
        assert!(!q.negative);
        assert_eq!(small, BigInt::from_i32(-3));
    }

    #[test]
    fn test_divmod_divisor_untouched() {
        let d = BigInt::from_u32(10);
        let mut n = BigInt::from_u64(1_000_000_000_007);
        n.divmod(&d).unwrap();
        assert_eq!(d.blocks(), &[10]);
    }

    #[test]
    fn test_div_and_modulo() {
        let a = BigInt::from_u64(1_000_000_000_007);
        let b = BigInt::from_u32(1000);
        assert_eq!(a.div(&b).unwrap(), BigInt::from_u64(1_000_000_000));
        assert_eq!(a.modulo(&b).unwrap(), BigInt::from_u32(7));
        assert_eq!(a, BigInt::from_u64(1_000_000_000_007));
    }

    #[test]
    fn test_div_by_zero() {
        let a = BigInt::from_u32(1);
        assert_eq!(a.div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
        assert_eq!(a.modulo(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn test_divmod_uninitialized() {
        let mut e = BigInt::empty();
        assert_eq!(
            e.divmod(&BigInt::from_u32(1)),
            Err(BigIntError::Uninitialized)
        );
        let mut n = BigInt::from_u32(1);
        assert_eq!(n.divmod(&BigInt::empty()), Err(BigIntError::Uninitialized));
    }
}
