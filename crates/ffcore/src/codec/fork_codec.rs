//! Resource fork codec
//!
//! Layout of the encoded fork:
//!
//! ```text
//! header (16) | data section | map
//! map = map header (28) | type count - 1 (2) | type entries (8 each)
//!     | reference entries (12 each) | name list
//! ```

use crate::error::{EncodeError, Result};
use crate::format::constants::{
    encode_count, DATA_LENGTH_PREFIX_SIZE, MAX_COUNT, MAX_DATA_OFFSET, MAX_FORK_FIELD,
    MAX_MAP_OFFSET, MAX_NAME_OFFSET, NO_NAME_OFFSET,
};
use crate::format::{ForkHeader, MapHeader, ReferenceEntry, ResourceRecord, TypeEntry};
use crate::types::FourCharCode;
use bytes::{BufMut, BytesMut};

/// Offsets computed for one resource
#[derive(Debug, Clone, Copy)]
struct Placement {
    data_offset: u32,
    name_offset: u16,
}

/// Every offset and length of a fork, validated against its field width
#[derive(Debug)]
struct ForkLayout {
    data_length: u32,
    map_offset: u32,
    map_length: u32,
    name_list_offset: u16,
    name_list_length: usize,
    /// Per type, in group order
    type_entries: Vec<TypeEntry>,
    /// Per resource, in emission order
    placements: Vec<Placement>,
}

fn check(field: &'static str, value: usize, max: usize) -> Result<()> {
    if value > max {
        tracing::warn!("Resource fork {} overflows: {} > {}", field, value, max);
        return Err(EncodeError::overflow(field, value, max as u64));
    }
    Ok(())
}

impl ForkLayout {
    fn plan(groups: &[(FourCharCode, Vec<&ResourceRecord>)]) -> Result<Self> {
        check("type count", groups.len(), MAX_COUNT)?;

        let mut placements = Vec::new();
        let mut data_length = 0usize;
        let mut name_list_length = 0usize;

        for (_, records) in groups {
            for record in records {
                check("resource data offset", data_length, MAX_DATA_OFFSET)?;
                check("resource data length", record.data().len(), MAX_FORK_FIELD)?;

                let name_offset = match record.name_bytes() {
                    Some(name) => {
                        check("resource name offset", name_list_length, MAX_NAME_OFFSET)?;
                        let offset = name_list_length as u16;
                        name_list_length += 1 + name.len();
                        offset
                    }
                    None => NO_NAME_OFFSET,
                };

                placements.push(Placement {
                    data_offset: data_length as u32,
                    name_offset,
                });
                data_length += DATA_LENGTH_PREFIX_SIZE + record.data().len();
            }
        }
        check("data section length", data_length, MAX_FORK_FIELD)?;

        // Reference lists follow the count and the type entries
        let type_list_length = 2 + groups.len() * TypeEntry::SIZE;
        let mut ref_list_offset = type_list_length;
        let mut type_entries = Vec::with_capacity(groups.len());
        for (res_type, records) in groups {
            check("resources per type", records.len(), MAX_COUNT)?;
            check("reference list offset", ref_list_offset, MAX_MAP_OFFSET)?;
            type_entries.push(TypeEntry {
                res_type: *res_type,
                count_minus_one: encode_count(records.len()),
                ref_list_offset: ref_list_offset as u16,
            });
            ref_list_offset += records.len() * ReferenceEntry::SIZE;
        }

        let name_list_offset = MapHeader::SIZE + ref_list_offset;
        check("name list offset", name_list_offset, MAX_MAP_OFFSET)?;

        let map_length = name_list_offset + name_list_length;
        check("map length", map_length, MAX_FORK_FIELD)?;

        let map_offset = ForkHeader::SIZE + data_length;
        check("map offset", map_offset, MAX_FORK_FIELD)?;
        check("fork length", map_offset + map_length, MAX_FORK_FIELD)?;

        Ok(Self {
            data_length: data_length as u32,
            map_offset: map_offset as u32,
            map_length: map_length as u32,
            name_list_offset: name_list_offset as u16,
            name_list_length,
            type_entries,
            placements,
        })
    }

    fn total_len(&self) -> usize {
        self.map_offset as usize + self.map_length as usize
    }
}

/// Encode grouped resources into a complete resource fork
///
/// The layout is validated in full before any byte is written.
pub fn encode_fork(groups: &[(FourCharCode, Vec<&ResourceRecord>)]) -> Result<BytesMut> {
    let layout = ForkLayout::plan(groups)?;
    let mut buf = BytesMut::with_capacity(layout.total_len());

    ForkHeader {
        data_offset: ForkHeader::SIZE as u32,
        map_offset: layout.map_offset,
        data_length: layout.data_length,
        map_length: layout.map_length,
    }
    .to_bytes(&mut buf);

    // Data section
    for record in groups.iter().flat_map(|(_, records)| records) {
        buf.put_u32(record.data().len() as u32);
        buf.extend_from_slice(record.data());
    }

    // Map
    MapHeader {
        attributes: 0,
        type_list_offset: MapHeader::SIZE as u16,
        name_list_offset: layout.name_list_offset,
    }
    .to_bytes(&mut buf);

    buf.put_u16(encode_count(groups.len()));
    for entry in &layout.type_entries {
        entry.to_bytes(&mut buf);
    }

    let records = groups.iter().flat_map(|(_, records)| records);
    for (record, placement) in records.clone().zip(&layout.placements) {
        ReferenceEntry {
            id: record.id(),
            name_offset: placement.name_offset,
            attributes: 0,
            data_offset: placement.data_offset,
        }
        .to_bytes(&mut buf);
    }

    let name_list_start = buf.len();
    for name in records.filter_map(|record| record.name_bytes()) {
        buf.put_u8(name.len() as u8);
        buf.extend_from_slice(name);
    }
    debug_assert_eq!(buf.len() - name_list_start, layout.name_list_length);
    debug_assert_eq!(buf.len(), layout.total_len());

    tracing::debug!(
        types = groups.len(),
        resources = layout.placements.len(),
        bytes = buf.len(),
        "Encoded resource fork"
    );

    Ok(buf)
}
