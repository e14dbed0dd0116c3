//! # ffcore
//!
//! Encoders for Finder-visible file metadata, for user-space filesystems
//! that have no native place to keep it.
//!
//! - FinderInfo records (flags, extended flags, type and creator codes)
//! - Resource forks holding typed, identified, optionally named resources
//! - AppleDouble sidecars for filesystems without extended attributes
//! - Byte-backed file delegates to serve the encoded data
//!
//! Builders perform no I/O; every encoder returns an immutable buffer.
//!
//! ## Example
//!
//! ```rust
//! use ffcore::{FinderFlags, FinderInfoBuilder, ResourceForkBuilder};
//!
//! let mut info = FinderInfoBuilder::new();
//! info.set_type_code(*b"TEXT")
//!     .set_creator_code(*b"ttxt")
//!     .set_flags(FinderFlags::HAS_CUSTOM_ICON);
//! assert_eq!(info.serialize().len(), 32);
//!
//! let mut fork = ResourceForkBuilder::new();
//! fork.add_resource(*b"icns", -16455, None, vec![0u8; 16]).unwrap();
//! let data = fork.serialize().unwrap();
//! assert_eq!(&data[0..4], &[0, 0, 0, 16]);
//! ```

pub mod attributes;
pub mod codec;
pub mod delegate;
pub mod error;
pub mod format;
pub mod types;

// Re-export commonly used types
pub use attributes::FinderAttributes;
pub use codec::AppleDoubleBuilder;
pub use delegate::{DataBackedFile, FileDelegate, MutableDataBackedFile};
pub use error::{DelegateError, EncodeError, Result};
pub use format::{FinderInfoBuilder, ResourceForkBuilder, ResourceRecord};
pub use types::{ExtendedFinderFlags, FinderFlags, FourCharCode, LabelColor};
