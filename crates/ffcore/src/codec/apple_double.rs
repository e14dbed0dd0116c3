//! AppleDouble (`._`) sidecar encoding
//!
//! Used where a filesystem cannot hold extended attributes. The sidecar
//! carries the FinderInfo record and the resource fork as entries.

use crate::error::{EncodeError, Result};
use crate::format::constants::{
    APPLE_DOUBLE_FINDER_INFO_ID, APPLE_DOUBLE_MAGIC, APPLE_DOUBLE_RESOURCE_FORK_ID,
    APPLE_DOUBLE_VERSION, MAX_FORK_FIELD,
};
use crate::format::FinderInfoBuilder;
use bytes::{BufMut, Bytes, BytesMut};

/// AppleDouble header (26 bytes)
#[derive(Debug, Clone, Copy)]
pub struct AppleDoubleHeader {
    pub magic: u32,
    pub version: u32,
    pub entry_count: u16,
}

impl AppleDoubleHeader {
    pub const SIZE: usize = 26;

    /// Encode to bytes
    pub fn to_bytes(&self, buf: &mut impl BufMut) {
        buf.put_u32(self.magic);
        buf.put_u32(self.version);
        buf.put_bytes(0, 16); // filler
        buf.put_u16(self.entry_count);
    }
}

/// Entry descriptor (12 bytes)
#[derive(Debug, Clone, Copy)]
pub struct EntryDescriptor {
    pub id: u32,
    pub offset: u32,
    pub length: u32,
}

impl EntryDescriptor {
    pub const SIZE: usize = 12;

    /// Encode to bytes
    pub fn to_bytes(&self, buf: &mut impl BufMut) {
        buf.put_u32(self.id);
        buf.put_u32(self.offset);
        buf.put_u32(self.length);
    }
}

/// Builds an AppleDouble sidecar holding FinderInfo and a resource fork
#[derive(Debug, Clone, Default)]
pub struct AppleDoubleBuilder {
    finder_info: Option<FinderInfoBuilder>,
    resource_fork: Option<Bytes>,
}

impl AppleDoubleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_finder_info(&mut self, info: FinderInfoBuilder) -> &mut Self {
        self.finder_info = Some(info);
        self
    }

    /// Set already serialized resource fork data
    pub fn set_resource_fork(&mut self, fork: Bytes) -> &mut Self {
        self.resource_fork = Some(fork);
        self
    }

    /// Entries in the order they are laid out: FinderInfo, then the fork
    fn entries(&self) -> Vec<(u32, Bytes)> {
        let mut entries = Vec::with_capacity(2);
        if let Some(info) = &self.finder_info {
            entries.push((APPLE_DOUBLE_FINDER_INFO_ID, info.serialize()));
        }
        if let Some(fork) = &self.resource_fork {
            entries.push((APPLE_DOUBLE_RESOURCE_FORK_ID, fork.clone()));
        }
        entries
    }

    /// Construct the raw sidecar data
    pub fn serialize(&self) -> Result<Bytes> {
        let entries = self.entries();

        let mut offset = AppleDoubleHeader::SIZE + entries.len() * EntryDescriptor::SIZE;
        let mut descriptors = Vec::with_capacity(entries.len());
        for (id, data) in &entries {
            if data.len() > MAX_FORK_FIELD {
                return Err(EncodeError::overflow("entry length", data.len(), MAX_FORK_FIELD as u64));
            }
            descriptors.push(EntryDescriptor {
                id: *id,
                offset: offset as u32,
                length: data.len() as u32,
            });
            offset += data.len();
            if offset > MAX_FORK_FIELD {
                return Err(EncodeError::overflow("entry offset", offset, MAX_FORK_FIELD as u64));
            }
        }

        let mut buf = BytesMut::with_capacity(offset);
        AppleDoubleHeader {
            magic: APPLE_DOUBLE_MAGIC,
            version: APPLE_DOUBLE_VERSION,
            entry_count: entries.len() as u16,
        }
        .to_bytes(&mut buf);
        for descriptor in &descriptors {
            descriptor.to_bytes(&mut buf);
        }
        for (_, data) in &entries {
            buf.extend_from_slice(data);
        }

        tracing::debug!(entries = entries.len(), bytes = buf.len(), "Encoded AppleDouble sidecar");
        Ok(buf.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ResourceForkBuilder;
    use crate::types::FinderFlags;

    fn be32(data: &[u8], offset: usize) -> u32 {
        u32::from_be_bytes(data[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_empty_sidecar() {
        let data = AppleDoubleBuilder::new().serialize().unwrap();
        assert_eq!(data.len(), 26);
        assert_eq!(be32(&data, 0), 0x0005_1607);
        assert_eq!(be32(&data, 4), 0x0002_0000);
        assert!(data[8..24].iter().all(|&b| b == 0));
        assert_eq!(&data[24..26], &[0, 0]);
    }

    #[test]
    fn test_finder_info_then_fork() {
        let mut info = FinderInfoBuilder::new();
        info.set_type_code(*b"TEXT").set_flags(FinderFlags::HAS_CUSTOM_ICON);

        let mut fork = ResourceForkBuilder::new();
        fork.add_resource(*b"icns", -16455, None, vec![1u8, 2, 3]).unwrap();
        let fork = fork.serialize().unwrap();

        let data = AppleDoubleBuilder::new()
            .set_finder_info(info)
            .set_resource_fork(fork.clone())
            .serialize()
            .unwrap();

        assert_eq!(&data[24..26], &[0, 2]);

        // FinderInfo entry
        assert_eq!(be32(&data, 26), 9);
        assert_eq!(be32(&data, 30), 50);
        assert_eq!(be32(&data, 34), 32);
        assert_eq!(&data[50..82], info.serialize().as_ref());

        // Resource fork entry
        assert_eq!(be32(&data, 38), 2);
        assert_eq!(be32(&data, 42), 82);
        assert_eq!(be32(&data, 46) as usize, fork.len());
        assert_eq!(&data[82..], fork.as_ref());
    }
}
