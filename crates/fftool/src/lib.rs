//! fftool library interface

pub mod cli;
pub mod config;
pub mod manifest;
pub mod output;

pub use config::{Config, OutputFormat};
pub use manifest::Manifest;
