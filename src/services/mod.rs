pub mod ai;
pub mod complexity;
pub mod confirmation;
pub mod fallback;
pub mod fast_path;
pub mod pipeline;
pub mod schema;
