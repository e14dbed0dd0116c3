//! Format constants

/// Size of a FinderInfo record (`FileInfo` + `ExtendedFileInfo`)
pub const FINDER_INFO_SIZE: usize = 32;

/// Extended attribute holding the FinderInfo record
pub const XATTR_FINDER_INFO: &str = "com.apple.FinderInfo";

/// Extended attribute holding the resource fork
pub const XATTR_RESOURCE_FORK: &str = "com.apple.ResourceFork";

/// Resource id of a file's custom icon (kCustomIconResource)
pub const CUSTOM_ICON_RESOURCE_ID: i16 = -16455;

/// Longest resource name; the name list stores a one-byte length
pub const MAX_RESOURCE_NAME_LEN: usize = u8::MAX as usize;

/// Name offset marking a resource without a name
pub const NO_NAME_OFFSET: u16 = 0xFFFF;

/// Largest usable name offset, one below the sentinel
pub const MAX_NAME_OFFSET: usize = NO_NAME_OFFSET as usize - 1;

/// Largest data offset held by a reference entry (24 bits)
pub const MAX_DATA_OFFSET: usize = 0x00FF_FFFF;

/// Largest offset held by a 16-bit map field
pub const MAX_MAP_OFFSET: usize = u16::MAX as usize;

/// Largest length or offset held by a 32-bit header field
pub const MAX_FORK_FIELD: usize = u32::MAX as usize;

/// Most entries a minus-one encoded 16-bit count can describe
pub const MAX_COUNT: usize = u16::MAX as usize + 1;

/// Minus-one encoded count for an empty list
///
/// The legacy format stores `count - 1`, so zero entries become `0xFFFF`.
pub const EMPTY_COUNT: u16 = 0xFFFF;

/// Length prefix in front of every resource payload
pub const DATA_LENGTH_PREFIX_SIZE: usize = 4;

/// AppleDouble magic number
pub const APPLE_DOUBLE_MAGIC: u32 = 0x0005_1607;

/// AppleDouble version 2
pub const APPLE_DOUBLE_VERSION: u32 = 0x0002_0000;

/// AppleDouble entry id for the resource fork
pub const APPLE_DOUBLE_RESOURCE_FORK_ID: u32 = 2;

/// AppleDouble entry id for the FinderInfo record
pub const APPLE_DOUBLE_FINDER_INFO_ID: u32 = 9;

/// Encode a list length with the format's minus-one convention
///
/// Callers must have checked `len <= MAX_COUNT`.
pub fn encode_count(len: usize) -> u16 {
    if len == 0 {
        EMPTY_COUNT
    } else {
        (len - 1) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_count() {
        assert_eq!(encode_count(0), EMPTY_COUNT);
        assert_eq!(encode_count(1), 0);
        assert_eq!(encode_count(3), 2);
        assert_eq!(encode_count(MAX_COUNT), 0xFFFF);
    }
}
