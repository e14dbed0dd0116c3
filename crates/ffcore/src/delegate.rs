//! Byte-backed file delegates
//!
//! Serve serialized metadata (or any other in-memory buffer) as file
//! contents: positional reads, writes and truncation.

use crate::error::DelegateError;
use bytes::{Bytes, BytesMut};

/// File-like access to an in-memory buffer
pub trait FileDelegate {
    /// Current contents
    fn data(&self) -> &[u8];

    /// Copy bytes at `offset` into `buf`; returns the count read, 0 at or past the end
    fn read(&self, buf: &mut [u8], offset: i64) -> Result<usize, DelegateError> {
        let data = self.data();
        let start = to_index(offset)?;
        if start >= data.len() {
            return Ok(0);
        }
        let count = buf.len().min(data.len() - start);
        buf[..count].copy_from_slice(&data[start..start + count]);
        Ok(count)
    }

    /// Write `buf` at `offset`; returns the count written
    fn write(&mut self, buf: &[u8], offset: i64) -> Result<usize, DelegateError>;

    /// Cut or zero-extend the contents to `offset` bytes
    fn truncate(&mut self, offset: i64) -> Result<(), DelegateError>;

    fn len(&self) -> usize {
        self.data().len()
    }

    fn is_empty(&self) -> bool {
        self.data().is_empty()
    }
}

/// Largest size a mutable delegate grows to; matches the widest length
/// field of the encoded formats
pub const MAX_FILE_SIZE: usize = u32::MAX as usize;

fn to_index(offset: i64) -> Result<usize, DelegateError> {
    if offset < 0 {
        return Err(DelegateError::NegativeOffset(offset));
    }
    usize::try_from(offset).map_err(|_| DelegateError::OffsetTooLarge(offset))
}

/// Read-only delegate over immutable data
#[derive(Debug, Clone, Default)]
pub struct DataBackedFile {
    data: Bytes,
}

impl DataBackedFile {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.data
    }
}

impl FileDelegate for DataBackedFile {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn write(&mut self, _buf: &[u8], _offset: i64) -> Result<usize, DelegateError> {
        Err(DelegateError::ReadOnly)
    }

    fn truncate(&mut self, _offset: i64) -> Result<(), DelegateError> {
        Err(DelegateError::ReadOnly)
    }
}

/// Read-write delegate over growable data
#[derive(Debug, Clone, Default)]
pub struct MutableDataBackedFile {
    data: BytesMut,
}

impl MutableDataBackedFile {
    pub fn new(data: impl AsRef<[u8]>) -> Self {
        Self {
            data: BytesMut::from(data.as_ref()),
        }
    }

    /// Freeze the current contents
    pub fn into_bytes(self) -> Bytes {
        self.data.freeze()
    }

    /// Resize to `len`, zero-filling growth; sizes past `MAX_FILE_SIZE` are refused
    fn resize(&mut self, len: usize, offset: i64) -> Result<(), DelegateError> {
        if len > MAX_FILE_SIZE {
            return Err(DelegateError::OffsetTooLarge(offset));
        }
        self.data.resize(len, 0);
        Ok(())
    }
}

impl FileDelegate for MutableDataBackedFile {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn write(&mut self, buf: &[u8], offset: i64) -> Result<usize, DelegateError> {
        let start = to_index(offset)?;
        let end = start
            .checked_add(buf.len())
            .ok_or(DelegateError::OffsetTooLarge(offset))?;

        // Gaps past the current end read back as zero
        if end > self.data.len() {
            self.resize(end, offset)?;
        }
        self.data[start..end].copy_from_slice(buf);
        Ok(buf.len())
    }

    fn truncate(&mut self, offset: i64) -> Result<(), DelegateError> {
        let len = to_index(offset)?;
        self.resize(len, offset)
    }
}
