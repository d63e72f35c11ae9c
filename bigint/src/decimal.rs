//! Decimal text conversion.
//!
//! The format is an optional leading `-` followed by ASCII digits. Output
//! never has leading zeros; zero renders as `0`.

use std::fmt;
use std::str::FromStr;

use strbuf::StrBuf;

use crate::blocks::Block;
use crate::{BigInt, BigIntError};

/// Decimal digits folded into the value per immediate multiply-add.
/// 10^9 is the largest power of ten below 2^32.
const DIGITS_PER_CHUNK: usize = 9;

const POW10: [Block; DIGITS_PER_CHUNK + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

impl BigInt {
    /// Render as base-10 text.
    ///
    /// Digits are produced least significant first by repeated division by
    /// ten, then reversed.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from_i64(-1234567890123).to_decimal_string().unwrap(), "-1234567890123");
    /// assert_eq!(BigInt::zero().to_decimal_string().unwrap(), "0");
    /// ```
    pub fn to_decimal_string(&self) -> Result<String, BigIntError> {
        self.check_initialized()?;
        let ten = Self::from_u32(10);
        let mut buf = StrBuf::new();
        let mut current = self.try_clone()?;

        // at least one pass, so zero still yields its digit
        loop {
            let next = current.divmod(&ten)?;
            let digit = current.blocks.get_or_zero(0) as u8;
            buf.push(b'0' + digit)?;
            current = next;
            if current.is_zero() {
                break;
            }
        }
        if self.is_negative() {
            buf.push(b'-')?;
        }
        buf.reverse();
        Ok(buf.to_text()?)
    }

    /// Parse base-10 text with an optional leading `-`.
    ///
    /// Digits are consumed nine at a time from the most significant end, each
    /// chunk folded in as `value = value * 10^k + chunk`. Leading zeros are
    /// accepted and `-0` parses as zero.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// let b = BigInt::from_decimal_str("-4294967296").unwrap();
    /// assert_eq!(b, BigInt::from_i64(-4294967296));
    /// assert_eq!(BigInt::from_decimal_str("-"), Err(BigIntError::EmptyLiteral));
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<Self, BigIntError> {
        let (negative, digits, offset) = match s.strip_prefix('-') {
            Some(rest) => (true, rest, 1),
            None => (false, s, 0),
        };
        if digits.is_empty() {
            return Err(BigIntError::EmptyLiteral);
        }
        if let Some((pos, ch)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(BigIntError::InvalidDigit {
                position: pos + offset,
                found: ch,
            });
        }

        let mut value = Self::zero();
        for chunk in digits.as_bytes().chunks(DIGITS_PER_CHUNK) {
            let chunk_value = chunk
                .iter()
                .fold(0, |acc: Block, &b| acc * 10 + Block::from(b - b'0'));
            value.mul_imm(POW10[chunk.len()])?;
            value.add_imm(chunk_value)?;
        }
        value.negative = negative;
        value.clear_zero_sign();
        Ok(value)
    }
}

impl fmt::Display for BigInt {
    /// Writes the decimal form, or `<uninitialized>` for an empty value.
    /// Use [`BigInt::to_decimal_string`] to get the error instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_uninitialized() {
            return f.write_str("<uninitialized>");
        }
        let text = self.to_decimal_string().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}
