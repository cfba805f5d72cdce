use std::sync::LazyLock;

use regex::Regex;

/// Kinds of language the fast path cannot resolve on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexPattern {
    RelativeDay,
    ClockTime,
    OrdinalDay,
    IsoDate,
    Duration,
}

impl ComplexPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexPattern::RelativeDay => "relative_day",
            ComplexPattern::ClockTime => "clock_time",
            ComplexPattern::OrdinalDay => "ordinal_day",
            ComplexPattern::IsoDate => "iso_date",
            ComplexPattern::Duration => "duration",
        }
    }
}

// Checked in order; the first hit decides.
static PATTERNS: LazyLock<Vec<(ComplexPattern, Regex)>> = LazyLock::new(|| {
    vec![
        pattern(
            ComplexPattern::RelativeDay,
            r"(?i)\b(?:today|tomorrow|tonight|next|day|week|month|year)\b",
        ),
        pattern(
            ComplexPattern::ClockTime,
            r"(?i)\b(?:am|pm|\d{1,2}\s?(?:am|pm)|\d{1,2}:\d{2})\b",
        ),
        pattern(ComplexPattern::OrdinalDay, r"(?i)\b\d{1,2}(?:st|nd|rd|th)\b"),
        pattern(ComplexPattern::IsoDate, r"\d{4}-\d{2}-\d{2}"),
        // Suffix match: "weekend", "attend" and "thereafter" count too.
        pattern(ComplexPattern::Duration, r"(?i)(?:end|ending|later|after)\b"),
    ]
});

fn pattern(kind: ComplexPattern, re: &str) -> (ComplexPattern, Regex) {
    (kind, Regex::new(re).expect("complexity pattern must compile"))
}

/// First disqualifying pattern found in `text`, if any.
pub fn detect(text: &str) -> Option<ComplexPattern> {
    PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(kind, _)| *kind)
}

/// True when the transcript must go to the fallback path.
pub fn is_complex(text: &str) -> bool {
    detect(text).is_some()
}
