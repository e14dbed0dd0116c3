//! On-disk record formats

pub mod constants;
pub mod finder_info;
pub mod fork;
pub mod resource;

pub use constants::*;
pub use finder_info::FinderInfoBuilder;
pub use fork::{ForkHeader, MapHeader, ReferenceEntry, ResourceForkBuilder, TypeEntry};
pub use resource::ResourceRecord;
