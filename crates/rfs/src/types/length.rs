//! Length values and the number formatting used in generated CSS.

/// Significant digits kept when a computed number is written into CSS.
pub const SIGNIFICANT_DIGITS: usize = 14;

/// A font size, minimum or breakpoint after `px` has been removed.
///
/// `raw` is what remains of the input string and is what gets echoed back
/// into the output. `value` is present only when `raw` is a plain number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Length {
    raw: String,
    value: Option<f64>,
}

impl Length {
    pub fn new(raw: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            raw: raw.into(),
            value,
        }
    }

    /// The input with `px` removed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The numeric value, if the input was a bare number or a px length.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Whether this length cannot take part in the fluid formula.
    ///
    /// Keywords, other units and zero are opaque and get passed through.
    pub fn is_opaque(&self) -> bool {
        match self.value {
            None => true,
            Some(value) => {
                self.raw.contains("px") || self.raw.contains("rem") || value == 0.0
            }
        }
    }

    /// The pixel value, unless the length is opaque.
    pub fn px(&self) -> Option<f64> {
        if self.is_opaque() { None } else { self.value }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.px() {
            Some(_) => write!(f, "{}px", self.raw),
            None => write!(f, "{}", self.raw),
        }
    }
}

/// Round half away from zero to `places` decimal places.
///
/// The scaled value is first cut to 15 significant digits so that binary
/// noise like `83333.499999999999` rounds the way the decimal reads.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    let scaled = format!("{:.*e}", 14, scaled)
        .parse::<f64>()
        .unwrap_or(scaled);
    scaled.round() / scale
}

/// Format a computed number for CSS output.
///
/// At most [`SIGNIFICANT_DIGITS`] significant digits, no trailing zeros and
/// never exponent notation: `13.6`, `16`, `14.666666666667`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let shortened = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse::<f64>()
        .unwrap_or(value);
    // -0 prints as "-0"
    if shortened == 0.0 {
        return "0".to_string();
    }
    shortened.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_opaque() {
        assert!(Length::new("inherit", None).is_opaque());
        assert!(Length::new("0", Some(0.0)).is_opaque());
        assert!(!Length::new("20", Some(20.0)).is_opaque());
    }

    #[test]
    fn test_length_display() {
        assert_eq!(Length::new("20", Some(20.0)).to_string(), "20px");
        assert_eq!(Length::new("1.5em", None).to_string(), "1.5em");
        assert_eq!(Length::new("0", Some(0.0)).to_string(), "0");
    }

    #[test]
    fn test_round_to_five_places() {
        assert_eq!(round_to(6.4 * 100.0 / 768.0, 5), 0.83333);
        assert_eq!(round_to(3.2 * 100.0 / 768.0, 5), 0.41667);
        assert_eq!(round_to(1.25, 5), 1.25);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(0.000005, 5), 0.00001);
        assert_eq!(round_to(-0.000005, 5), -0.00001);
        assert_eq!(round_to(1.234565, 5), 1.23457);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(13.6), "13.6");
        assert_eq!(format_number(12.0 + 1.6), "13.6");
        assert_eq!(format_number(12.0 + 8.0 / 3.0), "14.666666666667");
        assert_eq!(format_number(0.83333), "0.83333");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_no_exponent() {
        assert_eq!(format_number(0.00001), "0.00001");
        assert_eq!(format_number(1e15), "1000000000000000");
    }
}
