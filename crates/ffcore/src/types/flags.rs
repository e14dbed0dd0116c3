//! Finder flag sets

use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags::bitflags! {
    /// Finder flags (`fdFlags`)
    /// Bit values match CarbonCore/Finder.h
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FinderFlags: u16 {
        const IS_ON_DESK = 0x0001;       // kIsOnDesk (System 6)
        const COLOR = 0x000E;            // kColor, 3-bit label index
        const IS_SHARED = 0x0040;        // kIsShared
        const HAS_NO_INITS = 0x0080;     // kHasNoINITs
        const HAS_BEEN_INITED = 0x0100;  // kHasBeenInited
        const HAS_CUSTOM_ICON = 0x0400;  // kHasCustomIcon
        const IS_STATIONERY = 0x0800;    // kIsStationery
        const NAME_LOCKED = 0x1000;      // kNameLocked
        const HAS_BUNDLE = 0x2000;       // kHasBundle
        const IS_INVISIBLE = 0x4000;     // kIsInvisible
        const IS_ALIAS = 0x8000;         // kIsAlias
    }
}

bitflags::bitflags! {
    /// Extended Finder flags (`extendedFinderFlags`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ExtendedFinderFlags: u16 {
        const HAS_ROUTING_INFO = 0x0004;  // kExtendedFlagHasRoutingInfo
        const OBJECT_IS_BUSY = 0x0080;    // kExtendedFlagObjectIsBusy
        const HAS_CUSTOM_BADGE = 0x0100;  // kExtendedFlagHasCustomBadge
        const FLAGS_ARE_INVALID = 0x8000; // kExtendedFlagsAreInvalid
    }
}

/// Finder label colors, stored in the `COLOR` bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LabelColor {
    None = 0,
    Gray = 1,
    Green = 2,
    Purple = 3,
    Blue = 4,
    Yellow = 5,
    Red = 6,
    Orange = 7,
}

impl LabelColor {
    /// Convert from the 3-bit label index
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            1 => Self::Gray,
            2 => Self::Green,
            3 => Self::Purple,
            4 => Self::Blue,
            5 => Self::Yellow,
            6 => Self::Red,
            7 => Self::Orange,
            _ => Self::None,
        }
    }
}

impl FinderFlags {
    /// Label color held in the `COLOR` bits
    pub fn label(&self) -> LabelColor {
        LabelColor::from_index(((self.bits() & Self::COLOR.bits()) >> 1) as u8)
    }

    /// Replace the label color, leaving every other bit alone
    pub fn with_label(self, label: LabelColor) -> Self {
        let bits = (self.bits() & !Self::COLOR.bits()) | ((label as u16) << 1);
        Self::from_bits_retain(bits)
    }
}

impl Default for FinderFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for ExtendedFinderFlags {
    fn default() -> Self {
        Self::empty()
    }
}

// Raw bits are kept as-is, reserved bits included
impl Serialize for FinderFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for FinderFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(FinderFlags::from_bits_retain(bits))
    }
}

impl Serialize for ExtendedFinderFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for ExtendedFinderFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(ExtendedFinderFlags::from_bits_retain(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        let flags = FinderFlags::HAS_CUSTOM_ICON.with_label(LabelColor::Red);
        assert_eq!(flags.label(), LabelColor::Red);
        assert!(flags.contains(FinderFlags::HAS_CUSTOM_ICON));
        assert_eq!(flags.bits(), 0x0400 | (6 << 1));

        let cleared = flags.with_label(LabelColor::None);
        assert_eq!(cleared, FinderFlags::HAS_CUSTOM_ICON);
    }

    #[test]
    fn test_reserved_bits_survive() {
        // 0x0020 and 0x0200 are reserved in fdFlags
        let flags = FinderFlags::from_bits_retain(0x0220);
        assert_eq!(flags.bits(), 0x0220);

        let json = serde_json::to_string(&flags).unwrap();
        let back: FinderFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bits(), 0x0220);
    }
}
