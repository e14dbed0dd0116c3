//! Resource fork builder and its wire structures

use super::resource::ResourceRecord;
use crate::error::Result;
use crate::types::FourCharCode;
use bytes::{BufMut, Bytes};
use std::collections::HashMap;

/// Resource fork header (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkHeader {
    /// Offset from the start of the fork to the data section
    pub data_offset: u32,
    /// Offset from the start of the fork to the map
    pub map_offset: u32,
    pub data_length: u32,
    pub map_length: u32,
}

impl ForkHeader {
    pub const SIZE: usize = 16;

    /// Encode to bytes
    pub fn to_bytes(&self, buf: &mut impl BufMut) {
        buf.put_u32(self.data_offset);
        buf.put_u32(self.map_offset);
        buf.put_u32(self.data_length);
        buf.put_u32(self.map_length);
    }
}

/// Fixed part of the resource map (28 bytes)
///
/// The header copy, next-map handle and file reference number are only
/// meaningful to an open Resource Manager file and are written as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHeader {
    pub attributes: u16,
    /// Offset from the start of the map to the type list
    pub type_list_offset: u16,
    /// Offset from the start of the map to the name list
    pub name_list_offset: u16,
}

impl MapHeader {
    pub const SIZE: usize = 28;

    /// Encode to bytes
    pub fn to_bytes(&self, buf: &mut impl BufMut) {
        buf.put_bytes(0, ForkHeader::SIZE); // header copy
        buf.put_u32(0); // next map handle
        buf.put_u16(0); // file reference number
        buf.put_u16(self.attributes);
        buf.put_u16(self.type_list_offset);
        buf.put_u16(self.name_list_offset);
    }
}

/// Type list entry (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    pub res_type: FourCharCode,
    /// Number of resources of this type, minus one
    pub count_minus_one: u16,
    /// Offset from the start of the type list to this type's references
    pub ref_list_offset: u16,
}

impl TypeEntry {
    pub const SIZE: usize = 8;

    /// Encode to bytes
    pub fn to_bytes(&self, buf: &mut impl BufMut) {
        buf.put_slice(self.res_type.as_bytes());
        buf.put_u16(self.count_minus_one);
        buf.put_u16(self.ref_list_offset);
    }
}

/// Reference list entry (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub id: i16,
    /// Offset from the start of the name list, or `NO_NAME_OFFSET`
    pub name_offset: u16,
    pub attributes: u8,
    /// Offset from the start of the data section (24 bits)
    pub data_offset: u32,
}

impl ReferenceEntry {
    pub const SIZE: usize = 12;

    /// Encode to bytes
    pub fn to_bytes(&self, buf: &mut impl BufMut) {
        buf.put_i16(self.id);
        buf.put_u16(self.name_offset);
        buf.put_u32((u32::from(self.attributes) << 24) | (self.data_offset & 0x00FF_FFFF));
        buf.put_u32(0); // handle
    }
}

/// Accumulates resources and constructs raw resource fork data
///
/// Records live in a single arena in insertion order. Types are tracked
/// in first-seen order, each with the arena indices of its resources.
#[derive(Debug, Clone, Default)]
pub struct ResourceForkBuilder {
    records: Vec<ResourceRecord>,
    types: Vec<FourCharCode>,
    by_type: HashMap<FourCharCode, Vec<usize>>,
}

impl ResourceForkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource by specifying its components
    pub fn add_resource(
        &mut self,
        res_type: impl Into<FourCharCode>,
        id: i16,
        name: Option<&str>,
        data: impl Into<Bytes>,
    ) -> Result<&mut Self> {
        let record = ResourceRecord::new(res_type, id, name, data)?;
        Ok(self.add_record(record))
    }

    /// Add an existing record
    pub fn add_record(&mut self, record: ResourceRecord) -> &mut Self {
        let res_type = record.res_type();
        let index = self.records.len();
        self.records.push(record);

        self.by_type
            .entry(res_type)
            .or_insert_with(|| {
                self.types.push(res_type);
                Vec::new()
            })
            .push(index);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of resources held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// Distinct types in first-seen order
    pub fn types(&self) -> &[FourCharCode] {
        &self.types
    }

    /// Records grouped by type: first-seen type order, insertion order within a type
    pub fn groups(&self) -> impl Iterator<Item = (FourCharCode, Vec<&ResourceRecord>)> + '_ {
        self.types.iter().map(move |res_type| {
            let records = self.by_type[res_type]
                .iter()
                .map(|&index| &self.records[index])
                .collect();
            (*res_type, records)
        })
    }

    /// Construct the raw data for the resource fork
    ///
    /// Fails with `EncodingOverflow` when any offset, length or count does
    /// not fit its field; no partial output is produced.
    pub fn serialize(&self) -> Result<Bytes> {
        let groups: Vec<_> = self.groups().collect();
        crate::codec::fork_codec::encode_fork(&groups).map(|buf| buf.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_preserves_first_seen_order() {
        let mut fork = ResourceForkBuilder::new();
        fork.add_record(ResourceRecord::unnamed(*b"AAAA", 1, Bytes::from_static(b"a1")));
        fork.add_record(ResourceRecord::unnamed(*b"BBBB", 2, Bytes::from_static(b"b1")));
        fork.add_record(ResourceRecord::unnamed(*b"AAAA", 3, Bytes::from_static(b"a2")));

        assert_eq!(fork.len(), 3);
        assert_eq!(fork.types(), &[FourCharCode(*b"AAAA"), FourCharCode(*b"BBBB")]);

        let groups: Vec<_> = fork.groups().collect();
        let ids: Vec<Vec<i16>> = groups
            .iter()
            .map(|(_, records)| records.iter().map(|r| r.id()).collect())
            .collect();
        assert_eq!(ids, vec![vec![1, 3], vec![2]]);
    }

    #[test]
    fn test_add_resource_rejects_long_name() {
        let mut fork = ResourceForkBuilder::new();
        let name = "x".repeat(256);
        assert!(fork
            .add_resource(FourCharCode::ICNS, 1, Some(&name), Bytes::new())
            .is_err());
        assert!(fork.is_empty());
    }

    #[test]
    fn test_reference_entry_packs_attributes() {
        let entry = ReferenceEntry {
            id: -16455,
            name_offset: 0xFFFF,
            attributes: 0x20,
            data_offset: 0x0001_0203,
        };
        let mut buf = Vec::new();
        entry.to_bytes(&mut buf);
        assert_eq!(
            buf,
            vec![0xBF, 0xB9, 0xFF, 0xFF, 0x20, 0x01, 0x02, 0x03, 0, 0, 0, 0]
        );
    }
}
