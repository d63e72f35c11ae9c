//! Addition and subtraction, full-width and immediate.

use std::cmp::Ordering;

use crate::blocks::{adc, mac, sbb, Block, Blocks};
use crate::{BigInt, BigIntError};

/// Add two magnitudes into a fresh buffer, one block longer than the longer
/// operand if the final carry escapes.
fn add_magnitudes(l: &[Block], r: &[Block]) -> Result<Blocks, BigIntError> {
    let (big, small) = if l.len() >= r.len() { (l, r) } else { (r, l) };
    let mut buf = Blocks::zeroed(big.len() + 1)?;

    let mut carry = 0;
    for ((out, &b), &s) in buf.iter_mut().zip(big).zip(small) {
        let (sum, c) = adc(b, s, carry);
        *out = sum;
        carry = c;
    }
    // carry ripples through the rest of the longer operand
    for (out, &b) in buf[small.len()..].iter_mut().zip(&big[small.len()..]) {
        let (sum, c) = adc(b, 0, carry);
        *out = sum;
        carry = c;
    }

    if carry != 0 {
        buf[big.len()] = carry;
    } else {
        buf.truncate(big.len());
    }
    Ok(buf)
}

impl BigInt {
    /// Signed addition.
    ///
    /// Equal signs add magnitudes and keep the sign. Different signs subtract
    /// the smaller magnitude from the larger and take the sign of the larger.
    /// The result is normalized and a zero result is non-negative.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let a = BigInt::from_i32(100);
    /// let b = BigInt::from_i32(-250);
    /// assert_eq!(a.add(&b).unwrap(), BigInt::from_i32(-150));
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self, BigIntError> {
        self.check_initialized()?;
        other.check_initialized()?;

        if self.is_negative() == other.is_negative() {
            let mut res = Self {
                blocks: add_magnitudes(&self.blocks, &other.blocks)?,
                negative: self.is_negative(),
            };
            res.normalize();
            return Ok(res);
        }

        let (big, small) = match self.compare_magnitude(other) {
            Ordering::Less => (other, self),
            _ => (self, other),
        };
        let mut res = big.try_clone()?;
        res.negative = big.is_negative();
        res.sub_from(small)?;
        res.normalize();
        res.clear_zero_sign();
        Ok(res)
    }

    /// Signed subtraction: `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self, BigIntError> {
        other.check_initialized()?;
        let mut negated = other.try_clone()?;
        negated.negative = !other.is_negative();
        self.add(&negated)
    }

    /// Subtract the magnitude of `b` from the magnitude of `self` in place.
    ///
    /// Requires `|self| >= |b|`; otherwise returns [`BigIntError::Underflow`]
    /// and leaves `self` untouched. The sign flag is not changed and the
    /// result is not normalized.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// let mut a = BigInt::from_u64(1 << 32);
    /// a.sub_from(&BigInt::from_u32(1)).unwrap();
    /// assert_eq!(a.blocks(), &[u32::MAX, 0]);
    ///
    /// let mut small = BigInt::from_u32(1);
    /// assert_eq!(small.sub_from(&BigInt::from_u32(2)), Err(BigIntError::Underflow));
    /// ```
    pub fn sub_from(&mut self, b: &Self) -> Result<(), BigIntError> {
        self.check_initialized()?;
        b.check_initialized()?;
        if self.compare_magnitude(b) == Ordering::Less {
            return Err(BigIntError::Underflow);
        }

        let mut borrow = 0;
        for (i, block) in self.blocks.iter_mut().enumerate() {
            // past the end of b only the borrow is left to ripple
            if i >= b.blocks.len() && borrow == 0 {
                break;
            }
            let (diff, bo) = sbb(*block, b.blocks.get_or_zero(i), borrow);
            *block = diff;
            borrow = bo;
        }
        debug_assert_eq!(borrow, 0, "magnitude check admitted an underflow");
        Ok(())
    }

    /// Add a single-block value to the magnitude in place.
    pub fn add_imm(&mut self, imm: Block) -> Result<(), BigIntError> {
        self.check_initialized()?;
        // room for the final carry, so a failure leaves the value untouched
        self.blocks.try_reserve(1)?;

        let mut carry = imm;
        for block in self.blocks.iter_mut() {
            if carry == 0 {
                break;
            }
            let (sum, c) = adc(*block, carry, 0);
            *block = sum;
            carry = c;
        }
        if carry != 0 {
            self.blocks.try_push(carry)?;
        }
        Ok(())
    }

    /// Multiply the magnitude by a single-block value in place.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let mut b = BigInt::from_u32(u32::MAX);
    /// b.mul_imm(16).unwrap();
    /// assert_eq!(b.blocks(), &[0xFFFF_FFF0, 0xF]);
    /// ```
    pub fn mul_imm(&mut self, imm: Block) -> Result<(), BigIntError> {
        self.check_initialized()?;
        self.blocks.try_reserve(1)?;

        let mut carry = 0;
        for block in self.blocks.iter_mut() {
            let (lo, hi) = mac(*block, imm, 0, carry);
            *block = lo;
            carry = hi;
        }
        if carry != 0 {
            self.blocks.try_push(carry)?;
        }
        if imm == 0 {
            self.normalize();
        }
        Ok(())
    }
}
