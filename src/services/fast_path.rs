use std::sync::LazyLock;

use regex::Regex;

use crate::models::{VisitRecord, VisitType};

/// Tokens that introduce the lead's name, in priority order.
const START_MARKERS: [&str; 2] = ["with", "for"];

/// Tokens that end the name span.
const STOP_MARKERS: [&str; 13] = [
    "to",
    "regarding",
    "for",
    "about",
    "on",
    "at",
    "business",
    "operation",
    "discuss",
    "review",
    "close",
    "account",
    "structure",
];

const HONORIFICS: [&str; 5] = ["mr", "mrs", "ms", "miss", "dr"];

const TITLE_CHARS: usize = 40;

static BUSINESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bbusiness\b").expect("business pattern must compile"));
static OPERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\boperation\b").expect("operation pattern must compile"));

/// Token-level extraction of lead name and visit type.
///
/// Returns `None` unless both a name span and a visit category are found, so
/// the caller can hand the transcript to the fallback path. Does not check for
/// temporal language; the caller runs the complexity detector first.
pub fn extract_fast(text: &str) -> Option<VisitRecord> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let lead_name = START_MARKERS
        .iter()
        .find_map(|marker| capture_name(&words, marker))?;
    let visit_type = classify_visit_type(text)?;

    Some(VisitRecord {
        title: make_title(text),
        visit_type,
        lead_name,
        ..VisitRecord::default()
    })
}

/// Whole-word, case-insensitive. "business" wins over "operation".
pub fn classify_visit_type(text: &str) -> Option<VisitType> {
    if BUSINESS.is_match(text) {
        Some(VisitType::Business)
    } else if OPERATION.is_match(text) {
        Some(VisitType::Operation)
    } else {
        None
    }
}

fn capture_name(words: &[&str], marker: &str) -> Option<String> {
    let start = words.iter().position(|w| bare(w) == marker)? + 1;

    let span: Vec<&str> = words[start..]
        .iter()
        .copied()
        .take_while(|w| !STOP_MARKERS.contains(&bare(w)))
        .skip_while(|w| HONORIFICS.contains(&bare(w)))
        .collect();

    let joined = span.join(" ");
    let name = joined.trim_end_matches(|c: char| c.is_ascii_punctuation());
    if name.is_empty() {
        return None;
    }
    Some(title_case(name))
}

/// Token with trailing punctuation removed, for marker comparisons.
fn bare(word: &str) -> &str {
    word.trim_end_matches(|c: char| c.is_ascii_punctuation())
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

fn make_title(text: &str) -> String {
    let head: String = text.chars().take(TITLE_CHARS).collect();
    format!("{}...", head.trim())
}
