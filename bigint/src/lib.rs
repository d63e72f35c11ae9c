//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] stores its magnitude as a little-endian sequence of 32-bit
//! blocks plus a sign flag. Arithmetic is block-level: carry and borrow chains
//! for addition and subtraction, schoolbook multiplication, and binary long
//! division by repeated doubling. Decimal text is the only external format.
//!
//! Every operation that may grow a buffer is fallible and reports
//! [`BigIntError::AllocationFailed`] rather than aborting.
//!
//! ```
//! use bigint::BigInt;
//!
//! let a: BigInt = "999999999".parse().unwrap();
//! let sq = a.mul(&a).unwrap();
//! assert_eq!(sq.to_string(), "999999998000000001");
//! ```

mod add;
pub mod bigint;
pub mod blocks;
mod decimal;
mod div;
pub mod error;
mod mul;
mod shift;

#[cfg(feature = "serde")]
mod serde_impl;

pub use bigint::BigInt;
pub use blocks::{Block, Blocks, DoubleBlock, BLOCK_BITS, BLOCK_HIGHEST_BIT};
pub use error::BigIntError;
