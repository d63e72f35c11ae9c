//! Bit shifts and single-bit access.

use crate::blocks::{Block, Blocks, BLOCK_BITS, BLOCK_HIGHEST_BIT};
use crate::{BigInt, BigIntError};

impl BigInt {
    /// Multiply the magnitude by two.
    ///
    /// Grows by one block when the top bit carries out. Cannot create high
    /// zero blocks, so no normalization follows.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let mut b = BigInt::from_u32(1 << 31);
    /// b.shl1().unwrap();
    /// assert_eq!(b.blocks(), &[0, 1]);
    /// ```
    pub fn shl1(&mut self) -> Result<(), BigIntError> {
        let mut carry = 0;
        for block in self.blocks.iter_mut() {
            let next_carry = (*block & BLOCK_HIGHEST_BIT != 0) as Block;
            *block = (*block << 1) | carry;
            carry = next_carry;
        }
        if carry != 0 {
            self.blocks.try_push(carry)?;
        }
        Ok(())
    }

    /// Halve the magnitude (rounding toward zero), then normalize.
    pub fn shr1(&mut self) {
        let mut carry = 0;
        for block in self.blocks.iter_mut().rev() {
            let next_carry = if *block & 1 != 0 { BLOCK_HIGHEST_BIT } else { 0 };
            *block = (*block >> 1) | carry;
            carry = next_carry;
        }
        self.normalize();
    }

    /// Shift the magnitude left by `nbit` bits.
    ///
    /// Whole blocks of zeros are inserted below, and one extra block is added
    /// on top only when the partial shift overflows the leading zeros of the
    /// current top block. The shifted buffer is built completely before it
    /// replaces the old one, so on failure the value is unchanged.
    pub fn shl(&mut self, nbit: usize) -> Result<(), BigIntError> {
        let top = *self.blocks.last().ok_or(BigIntError::Uninitialized)?;
        if nbit == 0 || self.is_zero() {
            return Ok(());
        }

        let zero_blocks = nbit / BLOCK_BITS as usize;
        let bits = (nbit % BLOCK_BITS as usize) as u32;
        let new_lead_block = bits > top.leading_zeros();
        let len = self.blocks.len() + zero_blocks + new_lead_block as usize;

        let mut buf = Blocks::zeroed(len)?;
        let mut carry = 0;
        for (i, &block) in self.blocks.iter().enumerate() {
            buf[zero_blocks + i] = (block << bits) | carry;
            carry = if bits == 0 { 0 } else { block >> (BLOCK_BITS - bits) };
        }
        if new_lead_block {
            buf[len - 1] = carry;
        }
        self.blocks = buf;
        Ok(())
    }

    /// Set or clear bit `idx` (0 is the least significant bit).
    ///
    /// Blocks beyond the current length are added zero-filled first, so the
    /// result may need [`normalize`](Self::normalize) after clearing a bit.
    pub fn set_bit_at(&mut self, idx: usize, set: bool) -> Result<(), BigIntError> {
        let blk_idx = idx / BLOCK_BITS as usize;
        let mask: Block = 1 << (idx % BLOCK_BITS as usize);
        if self.blocks.len() <= blk_idx {
            self.blocks.try_resize(blk_idx + 1)?;
        }
        if set {
            self.blocks[blk_idx] |= mask;
        } else {
            self.blocks[blk_idx] &= !mask;
        }
        Ok(())
    }

    /// Read bit `idx`; bits beyond the stored blocks read as zero.
    pub fn bit(&self, idx: usize) -> bool {
        let block = self.blocks.get_or_zero(idx / BLOCK_BITS as usize);
        (block >> (idx % BLOCK_BITS as usize)) & 1 != 0
    }
}
