//! Growable byte buffer.
//!
//! A small append-only byte sequence used to assemble text output. Growth
//! doubles the capacity and is fallible: a failed reservation is reported
//! as [`StrBufError::AllocationFailed`] and leaves the existing contents
//! untouched.

use std::ffi::CString;

/// Capacity of a buffer created with [`StrBuf::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// Errors from buffer growth and materialization.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StrBufError {
    #[error("buffer allocation failed")]
    AllocationFailed,
    #[error("buffer contents are not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
    #[error("buffer contains a NUL byte at position {position}")]
    InteriorNul { position: usize },
}

/// Append-only byte buffer with explicit, fallible growth.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StrBuf {
    data: Vec<u8>,
}

impl StrBuf {
    /// Create an empty buffer with [`DEFAULT_CAPACITY`] bytes reserved.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Append a single byte.
    ///
    /// ```
    /// use strbuf::StrBuf;
    ///
    /// let mut buf = StrBuf::new();
    /// buf.push(b'4').unwrap();
    /// buf.push(b'2').unwrap();
    /// assert_eq!(buf.as_bytes(), b"42");
    /// ```
    pub fn push(&mut self, byte: u8) -> Result<(), StrBufError> {
        self.grow_for(1)?;
        self.data.push(byte);
        Ok(())
    }

    /// Append `bytes` to the end of the buffer.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), StrBufError> {
        self.grow_for(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Reverse the current contents in place.
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Copy the contents out as an owned `String`.
    ///
    /// The buffer is left as is.
    pub fn to_text(&self) -> Result<String, StrBufError> {
        let bytes = self.copy_bytes(0)?;
        String::from_utf8(bytes).map_err(|e| StrBufError::InvalidUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        })
    }

    /// Copy the contents out as a null-terminated C string.
    pub fn to_c_string(&self) -> Result<CString, StrBufError> {
        // one spare byte for the terminator CString appends
        let bytes = self.copy_bytes(1)?;
        CString::new(bytes).map_err(|e| StrBufError::InteriorNul {
            position: e.nul_position(),
        })
    }

    fn copy_bytes(&self, spare: usize) -> Result<Vec<u8>, StrBufError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(self.data.len() + spare)
            .map_err(|_| alloc_failed(self.data.len() + spare))?;
        bytes.extend_from_slice(&self.data);
        Ok(bytes)
    }

    /// Double the capacity until `additional` more bytes fit.
    fn grow_for(&mut self, additional: usize) -> Result<(), StrBufError> {
        let needed = self
            .data
            .len()
            .checked_add(additional)
            .ok_or(StrBufError::AllocationFailed)?;
        if needed <= self.data.capacity() {
            return Ok(());
        }
        let mut target = self.data.capacity().max(DEFAULT_CAPACITY);
        while target < needed {
            target = target.checked_mul(2).ok_or(StrBufError::AllocationFailed)?;
        }
        self.data
            .try_reserve_exact(target - self.data.len())
            .map_err(|_| alloc_failed(target))
    }
}

fn alloc_failed(requested: usize) -> StrBufError {
    log::debug!("strbuf: failed to reserve {requested} bytes");
    StrBufError::AllocationFailed
}

impl std::fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StrBuf({:?})", String::from_utf8_lossy(&self.data))
    }
}
