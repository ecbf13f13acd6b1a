//! Severity classification for prediction results.
//!
//! The service decorates severity text with pictographic markers
//! (e.g. "HIGH 🚨", "LOW ✅"). Styling is chosen from the text itself and
//! the markers are stripped for the history table.

/// Markers removed from severity text before it is written to history.
const SEVERITY_MARKERS: [char; 7] = [
    '\u{274C}',  // cross mark
    '\u{2757}',  // heavy exclamation mark
    '\u{2705}',  // check mark
    '\u{26A0}',  // warning sign
    '\u{FE0F}',  // variation selector-16
    '\u{1F6A8}', // police car light
    '\u{1F6A9}', // triangular flag
];

/// Display style bucket for a severity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityLevel {
    High,
    Moderate,
    Low,
}

impl SeverityLevel {
    /// Classify severity text. Case-sensitive, first match wins.
    ///
    /// Anything without "HIGH" or "MODERATE" (including "LOW", "HEALTHY"
    /// and unrecognized text) lands in `Low`.
    pub fn classify(text: &str) -> Self {
        if text.contains("HIGH") {
            SeverityLevel::High
        } else if text.contains("MODERATE") {
            SeverityLevel::Moderate
        } else {
            SeverityLevel::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SeverityLevel::High => "high",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Low => "low",
        }
    }
}

/// Strip pictographic markers and surrounding whitespace.
pub fn clean_severity(text: &str) -> String {
    text.chars()
        .filter(|c| !SEVERITY_MARKERS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
