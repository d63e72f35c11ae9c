//! Arbitrary-precision signed integer: representation, lifecycle, and comparison.
//!
//! The magnitude lives in an owned [`Blocks`] buffer, least significant block
//! first. Outside of an operation in progress the value is normalized: the
//! most significant block is nonzero, or the value is exactly zero and holds
//! the single block `[0]`. An empty buffer marks an uninitialized value.

use std::cmp::Ordering;
use std::fmt;

use crate::blocks::{Block, Blocks, BLOCK_BITS};
use crate::BigIntError;

/// Signed integer of unbounded magnitude.
#[derive(Clone)]
pub struct BigInt {
    pub(crate) blocks: Blocks,
    pub(crate) negative: bool,
}

// ============================================================================
// Construction
// ============================================================================

impl BigInt {
    /// Uninitialized value: no blocks at all.
    ///
    /// Only useful as a placeholder that is about to be overwritten. Arithmetic
    /// on it returns [`BigIntError::Uninitialized`].
    pub const fn empty() -> Self {
        Self {
            blocks: Blocks::new(),
            negative: false,
        }
    }

    /// The value zero, stored as the single block `[0]`.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let z = BigInt::zero();
    /// assert!(z.is_zero());
    /// assert_eq!(z.blocks(), &[0]);
    /// ```
    pub fn zero() -> Self {
        Self::from_u32(0)
    }

    pub fn from_u32(val: u32) -> Self {
        Self {
            blocks: single_block(val),
            negative: false,
        }
    }

    pub fn from_i32(val: i32) -> Self {
        Self {
            blocks: single_block(val.unsigned_abs()),
            negative: val < 0,
        }
    }

    /// Create a BigInt from a u64 value, using one block when it fits.
    pub fn from_u64(val: u64) -> Self {
        let lo = val as Block;
        let hi = (val >> BLOCK_BITS) as Block;
        let blocks = if hi == 0 { vec![lo] } else { vec![lo, hi] };
        Self {
            blocks: Blocks::from_vec(blocks),
            negative: false,
        }
    }

    /// Create a BigInt from an i64 value.
    ///
    /// `i64::MIN` is handled through its unsigned absolute value.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let min = BigInt::from_i64(i64::MIN);
    /// assert!(min.is_negative());
    /// assert_eq!(min.blocks(), &[0, 0x8000_0000]);
    /// ```
    pub fn from_i64(val: i64) -> Self {
        let mut res = Self::from_u64(val.unsigned_abs());
        res.negative = val < 0;
        res
    }

    /// Copy `blocks` verbatim as a non-negative magnitude.
    ///
    /// The input is trusted: no normalization is applied, so high zero blocks
    /// are kept as given. Call [`normalize`](Self::normalize) if the source
    /// may carry them. An empty slice produces an uninitialized value.
    pub fn from_raw_blocks(blocks: &[Block]) -> Result<Self, BigIntError> {
        Ok(Self {
            blocks: Blocks::try_from_slice(blocks)?,
            negative: false,
        })
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, BigIntError> {
        Ok(Self {
            blocks: self.blocks.try_clone()?,
            negative: self.negative,
        })
    }

    /// Overwrite the value with the non-negative single-block value `val`.
    pub fn set_u32(&mut self, val: u32) {
        // reuse the existing allocation
        if self.blocks.is_empty() {
            self.blocks = single_block(val);
        } else {
            self.blocks.truncate(1);
            self.blocks[0] = val;
        }
        self.negative = false;
    }
}

fn single_block(val: Block) -> Blocks {
    Blocks::from_vec(vec![val])
}

// ============================================================================
// Accessors and predicates
// ============================================================================

impl BigInt {
    /// Magnitude blocks, least significant first.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Whether this value was created with [`empty`](Self::empty) and never assigned.
    #[inline]
    pub fn is_uninitialized(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether the value is in minimal form.
    pub fn is_normalized(&self) -> bool {
        match self.blocks.last() {
            None => false,
            Some(&top) => top != 0 || self.blocks.len() == 1,
        }
    }

    /// Whether every block is zero, regardless of sign and normalization.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    /// Whether the value is below zero. A zero magnitude is never negative,
    /// even if its sign flag is set.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Flip the sign flag.
    #[inline]
    pub fn negate(&mut self) {
        self.negative = !self.negative;
    }

    /// Strip high zero blocks. An all-zero magnitude collapses to `[0]`;
    /// an uninitialized value stays uninitialized.
    pub fn normalize(&mut self) {
        if self.blocks.is_empty() {
            return;
        }
        let len = self.blocks.highest_nonzero().map_or(1, |top| top + 1);
        self.blocks.truncate(len);
    }

    pub(crate) fn check_initialized(&self) -> Result<(), BigIntError> {
        if self.blocks.is_empty() {
            Err(BigIntError::Uninitialized)
        } else {
            Ok(())
        }
    }

    /// Clear the sign flag of a zero result so it never reads as `-0`.
    pub(crate) fn clear_zero_sign(&mut self) {
        if self.is_zero() {
            self.negative = false;
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl BigInt {
    /// Compare magnitudes, ignoring sign.
    ///
    /// Blocks are compared from the most significant down; a value with fewer
    /// blocks reads its missing high blocks as zero, so unnormalized operands
    /// compare correctly.
    ///
    /// ```
    /// use bigint::BigInt;
    /// use std::cmp::Ordering;
    ///
    /// let a = BigInt::from_i32(-7);
    /// let b = BigInt::from_i32(5);
    /// assert_eq!(a.compare_magnitude(&b), Ordering::Greater);
    /// ```
    pub fn compare_magnitude(&self, other: &Self) -> Ordering {
        let len = self.blocks.len().max(other.blocks.len());
        for i in (0..len).rev() {
            match self.blocks.get_or_zero(i).cmp(&other.blocks.get_or_zero(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

/// Signed equality. An uninitialized value equals only another
/// uninitialized value.
impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

/// Signed order. Uninitialized values sort below every initialized one.
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_uninitialized(), other.is_uninitialized()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_magnitude(other),
            (true, true) => other.compare_magnitude(self),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u32> for BigInt {
    fn from(val: u32) -> Self {
        Self::from_u32(val)
    }
}

impl From<i32> for BigInt {
    fn from(val: i32) -> Self {
        Self::from_i32(val)
    }
}

impl From<u64> for BigInt {
    fn from(val: u64) -> Self {
        Self::from_u64(val)
    }
}

impl From<i64> for BigInt {
    fn from(val: i64) -> Self {
        Self::from_i64(val)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("negative", &self.negative)
            .field("blocks", &self.blocks)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
