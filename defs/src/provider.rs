use async_trait::async_trait;

use crate::{ImageSpec, PipelineExecution, PipelineState};

/// Read access to the CI/CD pipeline service.
#[async_trait]
pub trait PipelineProvider: Send + Sync {
    async fn get_pipeline_state(&self, pipeline_name: &str)
        -> Result<PipelineState, anyhow::Error>;
    async fn get_pipeline_execution(
        &self,
        pipeline_name: &str,
        execution_id: &str,
    ) -> Result<PipelineExecution, anyhow::Error>;
}

/// Lookup of managed container images by region and framework.
pub trait ImageUriProvider: Send + Sync {
    fn image_uri(&self, region: &str, spec: ImageSpec<'_>) -> Result<String, anyhow::Error>;
}
