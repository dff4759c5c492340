//! Parsing of the lengths accepted by the calculator.
//!
//! Only bare numbers and `px` values are understood. `px` is removed by
//! substring replacement and the rest must be a plain decimal number for the
//! value to count as a length; everything else stays opaque.
//!
//! ## Example
//!
//! ```rust
//! use rfs::parser::parse_length;
//!
//! assert_eq!(parse_length("768px").value(), Some(768.0));
//! assert_eq!(parse_length("1.5em").value(), None);
//! ```

pub mod units;

pub use crate::parser::units::{is_numeric, parse_length, parse_numeric, strip_px};
