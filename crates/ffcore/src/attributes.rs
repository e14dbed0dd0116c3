//! Finder attributes exposed as extended attributes

use crate::codec::AppleDoubleBuilder;
use crate::error::Result;
use crate::format::constants::{CUSTOM_ICON_RESOURCE_ID, XATTR_FINDER_INFO, XATTR_RESOURCE_FORK};
use crate::format::{FinderInfoBuilder, ResourceForkBuilder, ResourceRecord};
use crate::types::{FinderFlags, FourCharCode};
use bytes::Bytes;

/// Finder-visible metadata for one file
#[derive(Debug, Clone, Default)]
pub struct FinderAttributes {
    finder_info: Option<FinderInfoBuilder>,
    resource_fork: ResourceForkBuilder,
}

impl FinderAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// FinderInfo builder, created on first use
    pub fn finder_info_mut(&mut self) -> &mut FinderInfoBuilder {
        self.finder_info.get_or_insert_with(FinderInfoBuilder::new)
    }

    pub fn finder_info(&self) -> Option<&FinderInfoBuilder> {
        self.finder_info.as_ref()
    }

    pub fn resource_fork_mut(&mut self) -> &mut ResourceForkBuilder {
        &mut self.resource_fork
    }

    pub fn resource_fork(&self) -> &ResourceForkBuilder {
        &self.resource_fork
    }

    /// Attach a custom icon
    ///
    /// Adds an `'icns'` resource under the custom icon id and sets
    /// `HAS_CUSTOM_ICON` in the Finder flags.
    pub fn with_custom_icon(mut self, icns: impl Into<Bytes>) -> Self {
        self.set_custom_icon(icns, CUSTOM_ICON_RESOURCE_ID, true);
        self
    }

    /// Attach a custom icon under a chosen resource id
    pub fn set_custom_icon(&mut self, icns: impl Into<Bytes>, id: i16, set_flag: bool) {
        self.resource_fork
            .add_record(ResourceRecord::unnamed(FourCharCode::ICNS, id, icns));
        if set_flag {
            let info = self.finder_info_mut();
            let flags = info.flags() | FinderFlags::HAS_CUSTOM_ICON;
            info.set_flags(flags);
        }
    }

    /// Serialized attribute values, keyed by attribute name
    ///
    /// FinderInfo comes first; an empty resource fork is left out.
    pub fn to_xattrs(&self) -> Result<Vec<(&'static str, Bytes)>> {
        let mut attrs = Vec::with_capacity(2);
        if let Some(info) = &self.finder_info {
            attrs.push((XATTR_FINDER_INFO, info.serialize()));
        }
        if !self.resource_fork.is_empty() {
            attrs.push((XATTR_RESOURCE_FORK, self.resource_fork.serialize()?));
        }
        Ok(attrs)
    }

    /// Look up one attribute value by name
    pub fn xattr(&self, name: &str) -> Result<Option<Bytes>> {
        match name {
            XATTR_FINDER_INFO => Ok(self.finder_info.as_ref().map(FinderInfoBuilder::serialize)),
            XATTR_RESOURCE_FORK if !self.resource_fork.is_empty() => {
                self.resource_fork.serialize().map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Encode the same metadata as an AppleDouble sidecar
    pub fn to_apple_double(&self) -> Result<Bytes> {
        let mut sidecar = AppleDoubleBuilder::new();
        if let Some(info) = self.finder_info {
            sidecar.set_finder_info(info);
        }
        if !self.resource_fork.is_empty() {
            sidecar.set_resource_fork(self.resource_fork.serialize()?);
        }
        sidecar.serialize()
    }
}
