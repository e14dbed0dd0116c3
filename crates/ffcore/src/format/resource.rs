//! Resource records

use super::constants::MAX_RESOURCE_NAME_LEN;
use crate::error::{EncodeError, Result};
use crate::types::FourCharCode;
use bytes::Bytes;

/// A single typed, identified resource
///
/// Name and payload are owned by the record; nothing borrowed from the
/// caller outlives construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    res_type: FourCharCode,
    id: i16,
    name: Option<String>,
    data: Bytes,
}

impl ResourceRecord {
    /// Create a record, rejecting names longer than 255 encoded bytes
    pub fn new(
        res_type: impl Into<FourCharCode>,
        id: i16,
        name: Option<&str>,
        data: impl Into<Bytes>,
    ) -> Result<Self> {
        if let Some(name) = name {
            if name.len() > MAX_RESOURCE_NAME_LEN {
                return Err(EncodeError::InvalidName { len: name.len() });
            }
        }

        Ok(Self {
            res_type: res_type.into(),
            id,
            name: name.map(str::to_owned),
            data: data.into(),
        })
    }

    /// Create an unnamed record
    pub fn unnamed(res_type: impl Into<FourCharCode>, id: i16, data: impl Into<Bytes>) -> Self {
        Self {
            res_type: res_type.into(),
            id,
            name: None,
            data: data.into(),
        }
    }

    /// The four-char resource type, e.g. `'icns'`
    pub fn res_type(&self) -> FourCharCode {
        self.res_type
    }

    /// The resource id, scoped within its type
    pub fn id(&self) -> i16 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Encoded name bytes as written to the name list
    pub fn name_bytes(&self) -> Option<&[u8]> {
        self.name.as_ref().map(|n| n.as_bytes())
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_boundary() {
        let ok = "a".repeat(255);
        let record = ResourceRecord::new(FourCharCode::ICNS, 1, Some(&ok), Bytes::new()).unwrap();
        assert_eq!(record.name_bytes().map(<[u8]>::len), Some(255));

        let too_long = "a".repeat(256);
        let err = ResourceRecord::new(FourCharCode::ICNS, 1, Some(&too_long), Bytes::new())
            .unwrap_err();
        assert_eq!(err, EncodeError::InvalidName { len: 256 });
    }

    #[test]
    fn test_name_length_counts_encoded_bytes() {
        // 128 two-byte characters = 256 encoded bytes
        let name = "é".repeat(128);
        assert!(matches!(
            ResourceRecord::new(FourCharCode::TEXT, 0, Some(&name), Bytes::new()),
            Err(EncodeError::InvalidName { len: 256 })
        ));
    }

    #[test]
    fn test_data_is_copied() {
        let mut source = vec![1u8, 2, 3];
        let record = ResourceRecord::unnamed(
            FourCharCode::TEXT,
            128,
            Bytes::copy_from_slice(&source),
        );
        source[0] = 9;
        assert_eq!(record.data().as_ref(), &[1, 2, 3]);
        assert_eq!(record.id(), 128);
        assert_eq!(record.name(), None);
    }
}
