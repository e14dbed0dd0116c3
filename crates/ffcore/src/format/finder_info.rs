//! FinderInfo record
//!
//! The 32-byte record is a `FileInfo` followed by an `ExtendedFileInfo`:
//!
//! ```text
//!  0  fdType               4
//!  4  fdCreator            4
//!  8  fdFlags              2
//! 10  fdLocation           4   (zero)
//! 14  fdFldr               2   (zero)
//! 16  reserved1            8   (zero)
//! 24  extendedFinderFlags  2
//! 26  reserved2            2   (zero)
//! 28  putAwayFolderID      4   (zero)
//! ```

use super::constants::FINDER_INFO_SIZE;
use crate::error::{EncodeError, Result};
use crate::types::{ExtendedFinderFlags, FinderFlags, FourCharCode};
use bytes::{Buf, BufMut, Bytes};

/// Builds the raw FinderInfo record for a file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinderInfoBuilder {
    flags: FinderFlags,
    extended_flags: ExtendedFinderFlags,
    type_code: FourCharCode,
    creator_code: FourCharCode,
}

impl FinderInfoBuilder {
    pub const SIZE: usize = FINDER_INFO_SIZE;

    /// Offset of `extendedFinderFlags` within the record
    const EXTENDED_FLAGS_OFFSET: usize = 24;

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Finder flags; reserved bits are kept
    pub fn set_flags(&mut self, flags: FinderFlags) -> &mut Self {
        self.flags = flags;
        self
    }

    /// Set the extended Finder flags; reserved bits are kept
    pub fn set_extended_flags(&mut self, flags: ExtendedFinderFlags) -> &mut Self {
        self.extended_flags = flags;
        self
    }

    pub fn set_type_code(&mut self, code: impl Into<FourCharCode>) -> &mut Self {
        self.type_code = code.into();
        self
    }

    pub fn set_creator_code(&mut self, code: impl Into<FourCharCode>) -> &mut Self {
        self.creator_code = code.into();
        self
    }

    pub fn flags(&self) -> FinderFlags {
        self.flags
    }

    pub fn extended_flags(&self) -> ExtendedFinderFlags {
        self.extended_flags
    }

    pub fn type_code(&self) -> FourCharCode {
        self.type_code
    }

    pub fn creator_code(&self) -> FourCharCode {
        self.creator_code
    }

    /// Parse the four fields back out of a record
    pub fn from_bytes(mut buf: &[u8]) -> Result<Self> {
        if buf.len() < Self::SIZE {
            return Err(EncodeError::TruncatedRecord {
                record: "FinderInfo",
                len: buf.len(),
                needed: Self::SIZE,
            });
        }

        let mut type_code = [0u8; 4];
        buf.copy_to_slice(&mut type_code);
        let mut creator_code = [0u8; 4];
        buf.copy_to_slice(&mut creator_code);
        let flags = buf.get_u16();
        buf.advance(Self::EXTENDED_FLAGS_OFFSET - 10);
        let extended_flags = buf.get_u16();

        Ok(Self {
            flags: FinderFlags::from_bits_retain(flags),
            extended_flags: ExtendedFinderFlags::from_bits_retain(extended_flags),
            type_code: FourCharCode(type_code),
            creator_code: FourCharCode(creator_code),
        })
    }

    /// Encode the record to bytes
    pub fn to_bytes(&self, buf: &mut impl BufMut) {
        // FileInfo
        buf.put_slice(self.type_code.as_bytes());
        buf.put_slice(self.creator_code.as_bytes());
        buf.put_u16(self.flags.bits());
        buf.put_bytes(0, 4); // fdLocation
        buf.put_u16(0); // fdFldr

        // ExtendedFileInfo
        buf.put_bytes(0, 8);
        buf.put_u16(self.extended_flags.bits());
        buf.put_u16(0);
        buf.put_u32(0); // putAwayFolderID
    }

    /// Construct the raw data for the FinderInfo
    pub fn serialize(&self) -> Bytes {
        let mut buf = Vec::with_capacity(Self::SIZE);
        self.to_bytes(&mut buf);
        Bytes::from(buf)
    }
}
