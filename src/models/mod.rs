pub mod metrics;
pub mod tool_call;
pub mod visit;

pub use metrics::{ExtractionMethod, ExtractionMetrics};
pub use tool_call::{ToolCallPayload, ToolCallResponse};
pub use visit::{VisitRecord, VisitType, NOT_AVAILABLE};
