use crate::models::ExtractionMetrics;

/// Sentence a voice-confirmation step reads back to the caller. `None` when
/// nothing was extracted.
pub fn confirmation_message(metrics: &ExtractionMetrics) -> Option<String> {
    let data = metrics.data.as_ref().filter(|_| metrics.success)?;
    Some(format!(
        "Success! The {} visit with {} is scheduled for {}. Processing used the {} path.",
        data.visit_type.as_str(),
        data.lead_name,
        data.date,
        metrics.method.as_str(),
    ))
}
