//! Codec implementations for encoding metadata containers

pub mod apple_double;
pub mod fork_codec;

pub use apple_double::AppleDoubleBuilder;
pub use fork_codec::encode_fork;
