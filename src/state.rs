use crate::config::AppConfig;
use crate::services::pipeline::Pipeline;

pub struct AppState {
    pub config: AppConfig,
    pub pipeline: Pipeline,
}
