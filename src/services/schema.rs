use serde_json::{json, Map, Value};

use crate::models::{VisitRecord, VisitType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must be text")]
    NotText(&'static str),

    #[error("invalid visit_type `{0}` (expected OPERATION, BUSINESS or N/A)")]
    InvalidVisitType(String),
}

/// Checks a decoded candidate against the visit record contract.
///
/// All eight fields must be present as strings; nothing is defaulted.
/// `visit_type` must be one of its literals verbatim. Date and time formats
/// are not enforced. Unknown extra keys are ignored.
pub fn validate(candidate: &Value) -> Result<VisitRecord, ValidationError> {
    let map = candidate
        .as_object()
        .ok_or_else(|| ValidationError::NotAnObject(kind_of(candidate)))?;

    let visit_type_raw = text_field(map, "visit_type")?;
    let visit_type = VisitType::parse(&visit_type_raw)
        .ok_or(ValidationError::InvalidVisitType(visit_type_raw))?;

    Ok(VisitRecord {
        title: text_field(map, "title")?,
        visit_type,
        lead_name: text_field(map, "lead_name")?,
        date: text_field(map, "date")?,
        start_time: text_field(map, "start_time")?,
        end_time: text_field(map, "end_time")?,
        email: text_field(map, "email")?,
        phone_number: text_field(map, "phone_number")?,
    })
}

fn text_field(map: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match map.get(field) {
        None => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::NotText(field)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JSON schema advertised as the `schedule_visit` tool parameters.
pub fn visit_record_schema() -> Value {
    json!({
        "title": "VisitDetails",
        "description": "The strict data schema required by the Log Visit form.",
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "A brief summary/title of the visit's purpose."
            },
            "visit_type": {
                "type": "string",
                "enum": ["OPERATION", "BUSINESS", "N/A"],
                "description": "Must be one of the allowed Visit Types: OPERATION or BUSINESS."
            },
            "lead_name": {
                "type": "string",
                "description": "The full name of the lead/client."
            },
            "date": {
                "type": "string",
                "description": "The date of the visit in YYYY-MM-DD format."
            },
            "start_time": {
                "type": "string",
                "description": "The exact start time in 24-hour format (HH:MM)."
            },
            "end_time": {
                "type": "string",
                "description": "The exact end time in 24-hour format (HH:MM). If not specified, set to 'N/A'."
            },
            "email": {
                "type": "string",
                "description": "Extracted email address, if mentioned. Default to 'N/A'."
            },
            "phone_number": {
                "type": "string",
                "description": "Extracted phone number, if mentioned. Default to 'N/A'."
            }
        },
        "required": VisitRecord::FIELDS
    })
}
