//! Schoolbook multiplication.

use crate::blocks::{adc, mac, Blocks};
use crate::{BigInt, BigIntError};

impl BigInt {
    /// Full product of two values.
    ///
    /// For each block of the shorter operand, a partial-product row is formed
    /// against the whole longer operand and then added into the result at that
    /// block's offset. O(len(l) * len(r)). The result is normalized and its
    /// sign is the XOR of the operand signs.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let a = BigInt::from_i32(-6);
    /// let b = BigInt::from_i32(7);
    /// assert_eq!(a.mul(&b).unwrap(), BigInt::from_i32(-42));
    /// ```
    pub fn mul(&self, other: &Self) -> Result<Self, BigIntError> {
        self.check_initialized()?;
        other.check_initialized()?;

        let (long, short) = if self.blocks.len() >= other.blocks.len() {
            (&self.blocks, &other.blocks)
        } else {
            (&other.blocks, &self.blocks)
        };
        let mut result = Blocks::zeroed(long.len() + short.len())?;
        let mut row = Blocks::zeroed(long.len() + 1)?;

        for (i, &s) in short.iter().enumerate() {
            if s == 0 {
                continue;
            }

            // row = long * s
            let mut carry = 0;
            for (out, &l) in row.iter_mut().zip(long.iter()) {
                let (lo, hi) = mac(l, s, 0, carry);
                *out = lo;
                carry = hi;
            }
            row[long.len()] = carry;

            // result[i..] += row
            let mut carry = 0;
            for (acc, &p) in result[i..].iter_mut().zip(row.iter()) {
                let (sum, c) = adc(*acc, p, carry);
                *acc = sum;
                carry = c;
            }
            for acc in result[i + row.len()..].iter_mut() {
                if carry == 0 {
                    break;
                }
                let (sum, c) = adc(*acc, 0, carry);
                *acc = sum;
                carry = c;
            }
            debug_assert_eq!(carry, 0, "product overflowed its buffer");
        }

        let mut res = Self {
            blocks: result,
            negative: self.is_negative() != other.is_negative(),
        };
        res.normalize();
        res.clear_zero_sign();
        Ok(res)
    }
}
