//! Type definitions

pub mod code;
pub mod flags;

pub use code::FourCharCode;
pub use flags::{ExtendedFinderFlags, FinderFlags, LabelColor};
