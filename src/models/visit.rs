use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum VisitType {
    #[serde(rename = "OPERATION")]
    Operation,
    #[serde(rename = "BUSINESS")]
    Business,
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl VisitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::Operation => "OPERATION",
            VisitType::Business => "BUSINESS",
            VisitType::NotApplicable => NOT_AVAILABLE,
        }
    }

    /// Exact, case-sensitive match against the three literals.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OPERATION" => Some(VisitType::Operation),
            "BUSINESS" => Some(VisitType::Business),
            NOT_AVAILABLE => Some(VisitType::NotApplicable),
            _ => None,
        }
    }
}

/// The structured record a transcript is reduced to. Absent values are the
/// literal `"N/A"`, never empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisitRecord {
    pub title: String,
    pub visit_type: VisitType,
    pub lead_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub email: String,
    pub phone_number: String,
}

impl VisitRecord {
    pub const FIELDS: [&'static str; 8] = [
        "title",
        "visit_type",
        "lead_name",
        "date",
        "start_time",
        "end_time",
        "email",
        "phone_number",
    ];
}

impl Default for VisitRecord {
    fn default() -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            visit_type: VisitType::NotApplicable,
            lead_name: NOT_AVAILABLE.to_string(),
            date: NOT_AVAILABLE.to_string(),
            start_time: NOT_AVAILABLE.to_string(),
            end_time: NOT_AVAILABLE.to_string(),
            email: NOT_AVAILABLE.to_string(),
            phone_number: NOT_AVAILABLE.to_string(),
        }
    }
}
