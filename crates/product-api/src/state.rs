use product_core::ExclusionList;
use product_processing::ProcessingPipeline;

/// Shared across all request handlers. The pipeline only holds the read-only
/// exclusion list, so no lock is needed.
pub struct AppState {
    pipeline: ProcessingPipeline,
}

impl AppState {
    pub fn new(exclusion_list: ExclusionList) -> Self {
        Self {
            pipeline: ProcessingPipeline::new(exclusion_list),
        }
    }

    pub fn pipeline(&self) -> &ProcessingPipeline {
        &self.pipeline
    }
}
