//! Convert icon-style SVG documents into WPF XAML `DrawingImage` resources.
//!
//! The conversion core lives in [`convert`]: a blocking call from source
//! markup to a XAML resource string, with a placeholder where the resource
//! key belongs. The binary is a thin host around it (file I/O, key
//! finalization, logging).

pub mod cli;
pub mod config;
pub mod convert;
pub mod key;
pub mod logger;

pub use convert::{ConvertError, KEY_PLACEHOLDER, apply_key, convert_document};
