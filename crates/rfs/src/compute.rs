//! Responsive font size computation.
//!
//! Given a font size like `20px`, produce a static value for wide viewports
//! and a `calc()` expression that shrinks the size towards the configured
//! minimum as the viewport narrows below the breakpoint:
//!
//! ```text
//! min  = minimum + (size - minimum) / factor
//! diff = size - min
//! responsive = calc(<min>px + <round(diff * 100 / breakpoint, 5)><vmin|vw>)
//! ```
//!
//! Values that are not px lengths (`inherit`, `1.5em`, `0`) are passed
//! through untouched, and sizes at or below the minimum are never rescaled.

use crate::error::{Result, RfsError};
use crate::parser::units::parse_length;
use crate::types::length::{Length, format_number, round_to};
use crate::types::{FontSizePair, RfsConfig};

/// Decimal places kept in the viewport coefficient.
const COEFFICIENT_PLACES: i32 = 5;

/// Compute the default and responsive values for `font_size`.
///
/// Checks run in a fixed order: pass-through values first, then sizes at or
/// below the minimum, and only then the factor. A size that never reaches the
/// fluid formula is therefore returned even when the factor is invalid.
///
/// # Examples
///
/// ```rust
/// use rfs::{RfsConfig, compute_font_size};
///
/// let sizes = compute_font_size("20px", &RfsConfig::default()).unwrap();
/// assert_eq!(sizes.default, "20px");
/// assert_eq!(sizes.responsive, "calc(13.6px + 0.83333vmin)");
/// ```
pub fn compute_font_size(font_size: &str, config: &RfsConfig) -> Result<FontSizePair> {
    let suffix = config.important_suffix();
    let font_size = parse_length(font_size);

    let Some(size) = font_size.px() else {
        log::trace!("font size {:?} is not a px length, passing through", font_size.raw());
        return Ok(FontSizePair::fixed(format!("{}{suffix}", font_size.raw())));
    };

    let minimum = parse_length(&config.minimum_font_size)
        .value()
        .ok_or_else(|| RfsError::InvalidMinimumFontSize(config.minimum_font_size.clone()))?;

    let rfs_static = format!("{}px{suffix}", font_size.raw());

    if size <= minimum {
        log::trace!("font size {size}px is not above the minimum {minimum}px");
        return Ok(FontSizePair::fixed(rfs_static));
    }

    let factor = config.factor;
    if factor.is_nan() || factor < 1.0 {
        return Err(RfsError::InvalidFactor(factor));
    }

    let rfs_fluid = if factor != 1.0 {
        Some(fluid_size(size, minimum, factor, config)?)
    } else {
        None
    };

    Ok(match rfs_fluid {
        Some(fluid) => FontSizePair::new(rfs_static, format!("{fluid}{suffix}")),
        None => FontSizePair::fixed(rfs_static),
    })
}

/// Compute the size pair for `font_size` with the default configuration.
pub fn compute(font_size: &str) -> Result<FontSizePair> {
    compute_font_size(font_size, &RfsConfig::default())
}

/// Build the `calc()` expression for a size above the minimum.
fn fluid_size(size: f64, minimum: f64, factor: f64, config: &RfsConfig) -> Result<String> {
    let breakpoint = breakpoint_px(&parse_length(&config.breakpoint))
        .ok_or_else(|| RfsError::InvalidBreakpoint(config.breakpoint.clone()))?;

    let fs_min = minimum + (size - minimum) / factor;
    let fs_diff = size - fs_min;
    let coefficient = round_to(fs_diff * 100.0 / breakpoint, COEFFICIENT_PLACES);

    log::debug!(
        "rescaling {size}px: min={fs_min}px diff={fs_diff}px coefficient={coefficient} over {breakpoint}px"
    );

    Ok(format!(
        "calc({}px + {}{})",
        format_number(fs_min),
        format_number(coefficient),
        config.viewport_unit()
    ))
}

fn breakpoint_px(breakpoint: &Length) -> Option<f64> {
    breakpoint.value().filter(|value| *value != 0.0)
}
