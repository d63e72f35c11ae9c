//! Owned block buffer with fallible growth, plus block-level carry helpers.

use std::ops::{Deref, DerefMut};

use crate::BigIntError;

/// One unit of a magnitude.
pub type Block = u32;

/// Intermediate type wide enough for a block product plus two carries.
pub type DoubleBlock = u64;

/// Number of bits in a [`Block`].
pub const BLOCK_BITS: u32 = Block::BITS;

/// A block with only its most significant bit set.
pub const BLOCK_HIGHEST_BIT: Block = 1 << (BLOCK_BITS - 1);

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
pub(crate) const fn adc(a: Block, b: Block, carry: Block) -> (Block, Block) {
    let tmp = a as DoubleBlock + b as DoubleBlock + carry as DoubleBlock;
    (tmp as Block, (tmp >> BLOCK_BITS) as Block)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
pub(crate) const fn sbb(a: Block, b: Block, borrow: Block) -> (Block, Block) {
    let tmp = (a as DoubleBlock)
        .wrapping_sub(b as DoubleBlock)
        .wrapping_sub(borrow as DoubleBlock);
    (tmp as Block, (tmp >> (2 * BLOCK_BITS - 1)) as Block)
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
pub(crate) const fn mac(a: Block, b: Block, c: Block, carry: Block) -> (Block, Block) {
    let tmp = a as DoubleBlock * b as DoubleBlock + c as DoubleBlock + carry as DoubleBlock;
    (tmp as Block, (tmp >> BLOCK_BITS) as Block)
}

// ============================================================================
// Blocks
// ============================================================================

/// Exclusively owned sequence of blocks, least significant first.
///
/// Every operation that can grow the buffer reserves first and reports
/// [`BigIntError::AllocationFailed`] instead of aborting. A failed growth
/// leaves the contents as they were.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Blocks {
    data: Vec<Block>,
}

impl Blocks {
    /// Empty buffer (no blocks, no allocation).
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Take over an already built vector.
    pub(crate) fn from_vec(data: Vec<Block>) -> Self {
        Self { data }
    }

    /// Buffer of `len` zero blocks.
    pub fn zeroed(len: usize) -> Result<Self, BigIntError> {
        let mut blocks = Self::new();
        blocks.try_resize(len)?;
        Ok(blocks)
    }

    /// Copy of `src`, block for block.
    pub fn try_from_slice(src: &[Block]) -> Result<Self, BigIntError> {
        let mut data = Vec::new();
        reserve(&mut data, src.len())?;
        data.extend_from_slice(src);
        Ok(Self { data })
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, BigIntError> {
        Self::try_from_slice(&self.data)
    }

    /// Make room for `additional` more blocks without changing the contents.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), BigIntError> {
        reserve(&mut self.data, additional)
    }

    /// Append one block as the new most significant block.
    pub fn try_push(&mut self, block: Block) -> Result<(), BigIntError> {
        reserve(&mut self.data, 1)?;
        self.data.push(block);
        Ok(())
    }

    /// Grow (zero-filling) or shrink to exactly `len` blocks.
    pub fn try_resize(&mut self, len: usize) -> Result<(), BigIntError> {
        if len > self.data.len() {
            let additional = len - self.data.len();
            reserve(&mut self.data, additional)?;
        }
        self.data.resize(len, 0);
        Ok(())
    }

    /// Drop every block at index `len` and above.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Index of the most significant nonzero block, if any.
    pub fn highest_nonzero(&self) -> Option<usize> {
        self.data.iter().rposition(|&b| b != 0)
    }

    /// Block at `idx`, reading missing high blocks as zero.
    #[inline]
    pub fn get_or_zero(&self, idx: usize) -> Block {
        self.data.get(idx).copied().unwrap_or(0)
    }
}

fn reserve(data: &mut Vec<Block>, additional: usize) -> Result<(), BigIntError> {
    data.try_reserve(additional).map_err(|_| {
        log::debug!(
            "bigint: failed to reserve {additional} blocks on top of {}",
            data.len()
        );
        BigIntError::AllocationFailed
    })
}

impl Deref for Blocks {
    type Target = [Block];

    #[inline]
    fn deref(&self) -> &[Block] {
        &self.data
    }
}

impl DerefMut for Blocks {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Block] {
        &mut self.data
    }
}

impl std::fmt::Debug for Blocks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, b) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{b:#010x}")?;
        }
        write!(f, "]")
    }
}
