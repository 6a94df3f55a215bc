//! Built-in sample programs.
//!
//! Two small reference toolpaths shipped for demos and parity testing:
//! a five-point closed square and an eight-point star.

/// Five-point closed square, 50 units on a side.
pub const SQUARE: &str = "G0 X0 Y0
G1 X50 Y0
G1 X50 Y50
G1 X0 Y50
G1 X0 Y0";

/// Eight-point closed star.
pub const STAR: &str = "G0 X0 Y50
G1 X19.1 Y15.45
G1 X47.6 Y15.45
G1 X30 Y-9.1
G1 X-30 Y-9.1
G1 X-47.6 Y15.45
G1 X-19.1 Y15.45
G1 X0 Y50";

/// A named built-in sample program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Square,
    Star,
}

impl Sample {
    /// All built-in samples.
    pub fn all() -> &'static [Sample] {
        &[Sample::Square, Sample::Star]
    }

    /// Look up a sample by its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "square" => Some(Self::Square),
            "star" => Some(Self::Star),
            _ => None,
        }
    }

    /// The sample's command text.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Square => SQUARE,
            Self::Star => STAR,
        }
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Square => write!(f, "square"),
            Self::Star => write!(f, "star"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_square_sample_has_five_commands() {
        assert_eq!(parse(SQUARE).len(), 5);
    }

    #[test]
    fn test_star_sample_has_eight_commands() {
        assert_eq!(parse(STAR).len(), 8);
    }

    #[test]
    fn test_sample_lookup_by_name() {
        assert_eq!(Sample::from_name("square"), Some(Sample::Square));
        assert_eq!(Sample::from_name("STAR"), Some(Sample::Star));
        assert_eq!(Sample::from_name("spiral"), None);
    }
}
