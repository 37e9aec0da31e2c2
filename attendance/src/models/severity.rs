// src/models/severity.rs
use std::fmt;

pub const ANSI_RESET: &str = "\x1b[0m";

/// Highlighting band for an attendance percentage. Used only for colouring,
/// never for the status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl Severity {
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Critical => "critical",
        }
    }

    /// Background colour of the band as RGB.
    ///
    /// darkgreen, mediumseagreen, yellowgreen, lightcoral and darkred.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Excellent => (0, 100, 0),
            Self::Good => (60, 179, 113),
            Self::Fair => (154, 205, 50),
            Self::Poor => (240, 128, 128),
            Self::Critical => (139, 0, 0),
        }
    }

    /// 24-bit ANSI escape that sets this band as the background colour.
    /// Undone by [`ANSI_RESET`].
    #[must_use]
    pub fn ansi_background(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[48;2;{r};{g};{b}m")
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
