//! Core types for responsive font sizes.
//!
//! - [`Length`]: a px-stripped CSS length and its numeric value
//! - [`RfsConfig`]: tuning parameters with their defaults
//! - [`FontSizePair`]: the default and responsive values

pub mod config;
pub mod font_size;
pub mod length;

pub use config::{RfsConfig, ViewportUnit};
pub use font_size::FontSizePair;
pub use length::Length;
