use crate::analysis::AnalysisClient;
use crate::pipeline::Pipeline;
use std::sync::Arc;

/// Shared, immutable per-server state. Each request runs its own pipeline
/// invocation; nothing here is mutated.
pub struct AppState {
    pub pipeline: Pipeline,
    pub analyst: Arc<dyn AnalysisClient>,
}
