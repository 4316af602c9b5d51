use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Feedback class returned by the prediction service.
///
/// The service speaks in literal strings ("poor feedback", "median feedback",
/// "excellent feedback") and those exact strings must survive a round trip,
/// so serialization goes through [`FeedbackLabel::as_str`] rather than derive.
/// Anything outside the closed set lands in `Unrecognized` with the raw
/// string preserved; it is never a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedbackLabel {
    Poor,
    Median,
    Excellent,
    Unrecognized(String),
}

const POOR: &str = "poor feedback";
const MEDIAN: &str = "median feedback";
const EXCELLENT: &str = "excellent feedback";

impl FeedbackLabel {
    pub fn parse(raw: &str) -> Self {
        match raw {
            POOR => FeedbackLabel::Poor,
            MEDIAN => FeedbackLabel::Median,
            EXCELLENT => FeedbackLabel::Excellent,
            other => FeedbackLabel::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FeedbackLabel::Poor => POOR,
            FeedbackLabel::Median => MEDIAN,
            FeedbackLabel::Excellent => EXCELLENT,
            FeedbackLabel::Unrecognized(raw) => raw,
        }
    }

    /// Ordinal rank used for the indicator fill: poor fills one slot,
    /// median two, excellent all three. Unrecognized fills none.
    pub fn rank(&self) -> usize {
        match self {
            FeedbackLabel::Poor => 1,
            FeedbackLabel::Median => 2,
            FeedbackLabel::Excellent => 3,
            FeedbackLabel::Unrecognized(_) => 0,
        }
    }

    /// Display form with each word capitalized ("Excellent Feedback").
    pub fn display_label(&self) -> String {
        capitalize_words(self.as_str())
    }
}

impl fmt::Display for FeedbackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FeedbackLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FeedbackLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FeedbackLabel::parse(&raw))
    }
}

fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
