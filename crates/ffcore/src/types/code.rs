//! Four-character codes

use crate::error::EncodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A four-character code (`OSType` / `ResType`), stored big-endian
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FourCharCode(pub [u8; 4]);

impl FourCharCode {
    /// Icon family resource
    pub const ICNS: Self = Self(*b"icns");
    /// URL resource, as found in `.webloc` files
    pub const URL: Self = Self(*b"url ");
    /// Plain text file type
    pub const TEXT: Self = Self(*b"TEXT");

    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Convert from u32
    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    /// Convert to u32
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Whether this is the all-zero code
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 4]
    }
}

impl From<[u8; 4]> for FourCharCode {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl From<&[u8; 4]> for FourCharCode {
    fn from(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }
}

impl From<u32> for FourCharCode {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<FourCharCode> for u32 {
    fn from(code: FourCharCode) -> Self {
        code.to_u32()
    }
}

impl FromStr for FourCharCode {
    type Err = EncodeError;

    /// Parse from text; must be exactly four bytes (e.g. `"icns"`, `"url "`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| EncodeError::InvalidFourCharCode(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for FourCharCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

/// Printable codes serialize as text, anything else as the raw u32
impl Serialize for FourCharCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_u32(self.to_u32())
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CodeRepr {
    Text(String),
    Number(u32),
}

impl<'de> Deserialize<'de> for FourCharCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CodeRepr::deserialize(deserializer)? {
            CodeRepr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            CodeRepr::Number(n) => Ok(Self::from_u32(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_conversion() {
        let code = FourCharCode::ICNS;
        assert_eq!(code.to_u32(), 0x69636E73);
        assert_eq!(FourCharCode::from_u32(0x69636E73), code);
    }

    #[test]
    fn test_parse() {
        assert_eq!("url ".parse::<FourCharCode>().unwrap(), FourCharCode::URL);
        assert!(matches!(
            "icn".parse::<FourCharCode>(),
            Err(EncodeError::InvalidFourCharCode(_))
        ));
        assert!("icns5".parse::<FourCharCode>().is_err());
    }

    #[test]
    fn test_display_escapes_non_printable() {
        assert_eq!(FourCharCode::TEXT.to_string(), "TEXT");
        assert_eq!(FourCharCode::new([0, b'a', b'b', 0xff]).to_string(), "\\x00ab\\xff");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&FourCharCode::ICNS).unwrap();
        assert_eq!(json, "\"icns\"");

        let code: FourCharCode = serde_json::from_str("\"TEXT\"").unwrap();
        assert_eq!(code, FourCharCode::TEXT);

        assert!(serde_json::from_str::<FourCharCode>("\"toolong\"").is_err());

        let binary = FourCharCode::new([0, 0, 0, 1]);
        assert_eq!(serde_json::to_string(&binary).unwrap(), "1");
        assert_eq!(serde_json::from_str::<FourCharCode>("1").unwrap(), binary);
    }
}
