//! # RFS - Responsive Font Sizes
//!
//! Computes fluid font sizes for generated stylesheets. Given a font size and
//! a few tuning parameters, produce a static value for wide viewports and a
//! `calc()` expression that scales the text down on narrow ones, without
//! writing a media query per breakpoint.
//!
//! ## Quick Start
//!
//! ```rust
//! use rfs::{RfsConfig, compute, compute_font_size};
//!
//! let sizes = compute("20px").unwrap();
//! assert_eq!(sizes.default, "20px");
//! assert_eq!(sizes.responsive, "calc(13.6px + 0.83333vmin)");
//!
//! let config = RfsConfig::default().with_two_dimensional(false);
//! let sizes = compute_font_size("20px", &config).unwrap();
//! assert_eq!(sizes.responsive, "calc(13.6px + 0.83333vw)");
//! ```
//!
//! The caller decides where the values go, typically `default` in the base
//! rule and `responsive` inside `@media (max-width: <breakpoint>)`.
//!
//! ## Inputs
//!
//! - Bare numbers and px values: `20`, `20px`
//! - Anything else is echoed back as is: `inherit`, `1.5em`, `2rem`, `0`
//!
//! ## Modules
//!
//! - [`compute`](mod@compute): the fluid size formula
//! - [`parser`]: px stripping and numeric parsing
//! - [`types`]: configuration, lengths and the size pair
//! - [`error`]: error types for invalid configuration

pub mod compute;
pub mod error;
pub mod parser;
pub mod types;

pub use compute::{compute, compute_font_size};
pub use error::{Result, RfsError};
pub use types::{FontSizePair, Length, RfsConfig, ViewportUnit};
