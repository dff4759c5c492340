//! Tuning parameters for responsive font sizes.

use crate::compute::compute_font_size;
use crate::error::Result;
use crate::types::font_size::FontSizePair;

/// Viewport unit used for the fluid part of a `calc()` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportUnit {
    /// Smallest side of the viewport, so rotating a device keeps the size.
    #[default]
    Vmin,
    /// Viewport width only.
    Vw,
}

impl ViewportUnit {
    pub fn from_two_dimensional(two_dimensional: bool) -> Self {
        if two_dimensional { Self::Vmin } else { Self::Vw }
    }
}

impl std::fmt::Display for ViewportUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vmin => write!(f, "vmin"),
            Self::Vw => write!(f, "vw"),
        }
    }
}

/// Configuration for [`compute_font_size`].
///
/// `minimum_font_size` and `breakpoint` are CSS lengths as written in a
/// stylesheet (`"12px"`, `"768"`); they are parsed on every computation.
///
/// # Examples
///
/// ```rust
/// use rfs::RfsConfig;
///
/// let config = RfsConfig::default()
///     .with_factor(3.0)
///     .with_breakpoint("1200px")
///     .with_important(true);
///
/// let sizes = config.compute("20px").unwrap();
/// assert_eq!(sizes.default, "20px !important");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RfsConfig {
    /// Strength of the rescaling. Higher values shrink small screens less.
    /// Must be at least 1; exactly 1 disables rescaling.
    pub factor: f64,
    /// Append `!important` to every generated value.
    pub important: bool,
    /// Font sizes at or below this are never rescaled.
    pub minimum_font_size: String,
    /// Viewport size where rescaling stops. Should match the media query
    /// the caller wraps the responsive value in.
    pub breakpoint: String,
    /// Scale with `vmin` instead of `vw`.
    pub two_dimensional: bool,
}

impl RfsConfig {
    pub const DEFAULT_FACTOR: f64 = 5.0;
    pub const DEFAULT_MINIMUM_FONT_SIZE: &'static str = "12px";
    pub const DEFAULT_BREAKPOINT: &'static str = "768px";
    pub const IMPORTANT_SUFFIX: &'static str = " !important";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn with_minimum_font_size(mut self, minimum_font_size: impl Into<String>) -> Self {
        self.minimum_font_size = minimum_font_size.into();
        self
    }

    pub fn with_breakpoint(mut self, breakpoint: impl Into<String>) -> Self {
        self.breakpoint = breakpoint.into();
        self
    }

    pub fn with_two_dimensional(mut self, two_dimensional: bool) -> Self {
        self.two_dimensional = two_dimensional;
        self
    }

    /// Suffix appended to every output value.
    pub fn important_suffix(&self) -> &'static str {
        if self.important {
            Self::IMPORTANT_SUFFIX
        } else {
            ""
        }
    }

    pub fn viewport_unit(&self) -> ViewportUnit {
        ViewportUnit::from_two_dimensional(self.two_dimensional)
    }

    /// Compute the size pair for `font_size` with this configuration.
    pub fn compute(&self, font_size: &str) -> Result<FontSizePair> {
        compute_font_size(font_size, self)
    }
}

impl Default for RfsConfig {
    fn default() -> Self {
        Self {
            factor: Self::DEFAULT_FACTOR,
            important: false,
            minimum_font_size: Self::DEFAULT_MINIMUM_FONT_SIZE.to_string(),
            breakpoint: Self::DEFAULT_BREAKPOINT.to_string(),
            two_dimensional: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = RfsConfig::default();
        assert_eq!(config.factor, 5.0);
        assert!(!config.important);
        assert_eq!(config.minimum_font_size, "12px");
        assert_eq!(config.breakpoint, "768px");
        assert!(config.two_dimensional);
    }

    #[test]
    fn test_important_suffix() {
        assert_eq!(RfsConfig::default().important_suffix(), "");
        assert_eq!(
            RfsConfig::default().with_important(true).important_suffix(),
            " !important"
        );
    }

    #[test]
    fn test_viewport_unit() {
        assert_eq!(RfsConfig::default().viewport_unit(), ViewportUnit::Vmin);
        let config = RfsConfig::default().with_two_dimensional(false);
        assert_eq!(config.viewport_unit(), ViewportUnit::Vw);
        assert_eq!(config.viewport_unit().to_string(), "vw");
    }
}
