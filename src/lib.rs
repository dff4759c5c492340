//! Responsive font sizes for stylesheet generators.
//!
//! Re-exports the [`rfs`] crate. A generator calls [`compute_font_size`] once
//! per `font-size` declaration and writes `default` into the base rule and
//! `responsive` into a `@media (max-width: <breakpoint>)` block.
//!
//! ```rust
//! use responsive_font_sizes::{RfsConfig, compute_font_size};
//!
//! let config = RfsConfig::default().with_important(true);
//! let sizes = compute_font_size("20px", &config).unwrap();
//! assert_eq!(sizes.responsive, "calc(13.6px + 0.83333vmin) !important");
//! ```

pub use rfs::{
    FontSizePair, Length, Result, RfsConfig, RfsError, ViewportUnit, compute, compute_font_size,
    parser, types,
};
