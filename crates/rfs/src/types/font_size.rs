/// The two values produced for one font size declaration.
///
/// `default` goes into the base rule. `responsive` goes inside a
/// `@media (max-width: <breakpoint>)` block; it equals `default` whenever no
/// rescaling applies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontSizePair {
    pub default: String,
    pub responsive: String,
}

impl FontSizePair {
    pub fn new(default: impl Into<String>, responsive: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            responsive: responsive.into(),
        }
    }

    /// A pair where both values are the same.
    pub fn fixed(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            responsive: value.clone(),
            default: value,
        }
    }

    /// Whether the responsive value differs from the default one.
    pub fn is_fluid(&self) -> bool {
        self.default != self.responsive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pair() {
        let pair = FontSizePair::fixed("12px");
        assert_eq!(pair.default, "12px");
        assert_eq!(pair.responsive, "12px");
        assert!(!pair.is_fluid());
    }

    #[test]
    fn test_fluid_pair() {
        let pair = FontSizePair::new("20px", "calc(13.6px + 0.83333vmin)");
        assert!(pair.is_fluid());
    }
}
