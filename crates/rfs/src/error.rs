//! Error types for responsive font size computation.
//!
//! Most unusual inputs (keywords, non-px units, zero, sizes below the minimum)
//! are not errors: they produce a pass-through size pair. Only configuration
//! values that make the fluid formula meaningless are reported here.

use thiserror::Error;

/// Errors that can occur while computing a responsive font size.
///
/// # Examples
///
/// ```rust
/// use rfs::{RfsConfig, RfsError, compute_font_size};
///
/// let config = RfsConfig::default().with_factor(0.5);
/// let result = compute_font_size("20px", &config);
/// assert!(matches!(result, Err(RfsError::InvalidFactor(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RfsError {
    /// The rescaling factor is NaN or smaller than 1.
    #[error("{0} is not a valid factor, it must be greater or equal to 1")]
    InvalidFactor(f64),

    /// The minimum font size is not a number once `px` is removed.
    ///
    /// Only reported when the font size itself is a px length, since the
    /// minimum is never consulted for pass-through values.
    #[error("Invalid minimum font size: {0:?} is not a px length")]
    InvalidMinimumFontSize(String),

    /// The breakpoint is not a number once `px` is removed, or is zero.
    #[error("Invalid breakpoint: {0:?} must be a non-zero px length")]
    InvalidBreakpoint(String),
}

pub type Result<T> = std::result::Result<T, RfsError>;
